//! One hook per API operation. Reads bind an endpoint to its cache key;
//! writes pair the request with the declared set of keys whose cached data
//! it changes.

use std::any::Any;
use std::rc::Rc;

use yew::prelude::*;

use crate::api;
use crate::cache::key::{self as qk, FoodFilter};
use crate::data::{
	CreateFoodInput, CreateFoodLogInput, CreateWeightInput, DailyData, Food, FoodLog, FoodLogPatch,
	FoodPatch, MealType, ProfileUpdate, Tdee, User, WeightEntry, WeightPatch, WeightTrend,
};
use crate::hooks::{use_mutation, use_query, Effect, UseMutationHandle, UseQueryHandle};
use crate::session;

// -------------------- auth --------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AuthSubmit {
	pub email: String,
	pub password: String,
	pub name: String,
}

pub struct LoginOutcome {
	pub profile: Option<User>,
}

/// Login or registration, including the session side effects: the token and
/// minimal profile are installed first, then the full profile is fetched
/// best-effort. A failed profile fetch leaves the session valid with
/// default goals.
#[hook]
pub fn use_login_mutation(register: bool) -> UseMutationHandle<AuthSubmit, LoginOutcome> {
	use_mutation(
		move |input: AuthSubmit| {
			Box::pin(async move {
				let auth = if register {
					api::auth::register(&input.email, &input.password, &input.name).await?
				} else {
					api::auth::login(&input.email, &input.password).await?
				};
				session::start(&auth);
				let profile = match api::users::get_profile().await {
					Ok(profile) => profile,
					Err(error) => {
						log::debug!("profile fetch after login failed: {error}");
						None
					}
				};
				if let Some(user) = &profile {
					session::set_user(user.clone());
				}
				Ok(LoginOutcome { profile })
			})
		},
		|outcome: &LoginOutcome, _input| {
			let Some(user) = &outcome.profile else {
				return Vec::new();
			};
			vec![
				Effect::SetQueryData(qk::profile(), Rc::new(Some(user.clone())) as Rc<dyn Any>),
				Effect::SetQueryData(qk::me(), Rc::new(Some(user.clone())) as Rc<dyn Any>),
			]
		},
	)
}

// -------------------- users --------------------

#[hook]
pub fn use_profile_query(enabled: bool) -> UseQueryHandle<Option<User>> {
	use_query(qk::profile(), enabled, || Box::pin(api::users::get_profile()))
}

#[hook]
pub fn use_update_profile_mutation() -> UseMutationHandle<ProfileUpdate, User> {
	use_mutation(
		|update: ProfileUpdate| {
			Box::pin(async move {
				let user = api::users::update_profile(&update).await?;
				session::set_user(user.clone());
				Ok(user)
			})
		},
		|updated: &User, _update| {
			vec![
				Effect::SetQueryData(qk::profile(), Rc::new(Some(updated.clone())) as Rc<dyn Any>),
				Effect::Invalidate(qk::profile()),
			]
		},
	)
}

#[hook]
pub fn use_calculate_tdee_mutation() -> UseMutationHandle<(), Tdee> {
	use_mutation(|_: ()| Box::pin(api::users::calculate_tdee()), |_, _| Vec::new())
}

// -------------------- foods --------------------

#[hook]
pub fn use_foods_query(filter: FoodFilter, enabled: bool) -> UseQueryHandle<Vec<Food>> {
	let key = qk::foods(&filter);
	use_query(key, enabled, move || {
		let filter = filter.clone();
		Box::pin(async move { api::foods::get_all(&filter).await })
	})
}

#[hook]
pub fn use_food_by_id_query(id: Option<String>, enabled: bool) -> UseQueryHandle<Option<Food>> {
	let key = qk::food(id.as_deref().unwrap_or("missing"));
	let enabled = enabled && id.is_some();
	use_query(key, enabled, move || {
		let id = id.clone().unwrap_or_default();
		Box::pin(async move { api::foods::get_by_id(&id).await })
	})
}

#[hook]
pub fn use_create_food_mutation() -> UseMutationHandle<CreateFoodInput, Option<Food>> {
	use_mutation(
		|input: CreateFoodInput| Box::pin(async move { api::foods::create(&input).await }),
		|_food, _input| vec![Effect::Invalidate(qk::all_foods())],
	)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFood {
	pub id: String,
	pub patch: FoodPatch,
}

#[hook]
pub fn use_update_food_mutation() -> UseMutationHandle<UpdateFood, Option<Food>> {
	use_mutation(
		|args: UpdateFood| Box::pin(async move { api::foods::update(&args.id, &args.patch).await }),
		|_food, args| {
			vec![
				Effect::Invalidate(qk::all_foods()),
				Effect::Invalidate(qk::food(&args.id)),
			]
		},
	)
}

#[hook]
pub fn use_delete_food_mutation() -> UseMutationHandle<String, ()> {
	use_mutation(
		|id: String| Box::pin(async move { api::foods::delete(&id).await }),
		|_ok, _id| vec![Effect::Invalidate(qk::all_foods())],
	)
}

// -------------------- logs --------------------

#[hook]
pub fn use_daily_logs_query(date: String, enabled: bool) -> UseQueryHandle<Option<DailyData>> {
	let key = qk::daily(&date);
	let enabled = enabled && !date.is_empty();
	use_query(key, enabled, move || {
		let date = date.clone();
		Box::pin(async move { api::logs::get_daily(&date).await })
	})
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLog {
	pub date: String,
	pub input: CreateFoodLogInput,
}

#[hook]
pub fn use_create_log_mutation() -> UseMutationHandle<CreateLog, Option<FoodLog>> {
	use_mutation(
		|args: CreateLog| Box::pin(async move { api::logs::create(&args.input).await }),
		|_log, args| vec![Effect::Invalidate(qk::daily(&args.date))],
	)
}

/// Quick-add: create a one-off library food and log one serving of it
/// against the chosen meal in the same stroke. Touches both the foods
/// caches and that date's diary.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAdd {
	pub date: String,
	pub meal_type: MealType,
	pub food: CreateFoodInput,
}

#[hook]
pub fn use_quick_add_mutation() -> UseMutationHandle<QuickAdd, Option<FoodLog>> {
	use_mutation(
		|args: QuickAdd| {
			Box::pin(async move {
				let Some(food) = api::foods::create(&args.food).await? else {
					return Ok(None);
				};
				api::logs::create(&CreateFoodLogInput {
					food_id: food.id,
					date: args.date.clone(),
					meal_type: args.meal_type,
					servings: 1.0,
					notes: None,
				})
				.await
			})
		},
		|_log, args| {
			vec![
				Effect::Invalidate(qk::all_foods()),
				Effect::Invalidate(qk::daily(&args.date)),
			]
		},
	)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateLog {
	pub date: String,
	pub id: String,
	pub patch: FoodLogPatch,
}

#[hook]
pub fn use_update_log_mutation() -> UseMutationHandle<UpdateLog, Option<FoodLog>> {
	use_mutation(
		|args: UpdateLog| Box::pin(async move { api::logs::update(&args.id, &args.patch).await }),
		|_log, args| vec![Effect::Invalidate(qk::daily(&args.date))],
	)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteLog {
	pub date: String,
	pub id: String,
}

#[hook]
pub fn use_delete_log_mutation() -> UseMutationHandle<DeleteLog, ()> {
	use_mutation(
		|args: DeleteLog| Box::pin(async move { api::logs::delete(&args.id).await }),
		|_ok, args| vec![Effect::Invalidate(qk::daily(&args.date))],
	)
}

// -------------------- weight --------------------

#[hook]
pub fn use_weights_query(enabled: bool) -> UseQueryHandle<Vec<WeightEntry>> {
	use_query(qk::weights(), enabled, || Box::pin(api::weight::get_all()))
}

#[hook]
pub fn use_weight_latest_query(enabled: bool) -> UseQueryHandle<Option<WeightEntry>> {
	use_query(qk::weight_latest(), enabled, || {
		Box::pin(api::weight::get_latest())
	})
}

#[hook]
pub fn use_weight_trend_query(days: u32, enabled: bool) -> UseQueryHandle<WeightTrend> {
	use_query(qk::weight_trend(days), enabled, move || {
		Box::pin(api::weight::get_trend(days))
	})
}

#[hook]
pub fn use_create_weight_mutation() -> UseMutationHandle<CreateWeightInput, Option<WeightEntry>> {
	use_mutation(
		|input: CreateWeightInput| Box::pin(async move { api::weight::create(&input).await }),
		|_entry, _input| vec![Effect::Invalidate(qk::all_weight())],
	)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWeight {
	pub id: String,
	pub patch: WeightPatch,
}

#[hook]
pub fn use_update_weight_mutation() -> UseMutationHandle<UpdateWeight, Option<WeightEntry>> {
	use_mutation(
		|args: UpdateWeight| Box::pin(async move { api::weight::update(&args.id, &args.patch).await }),
		|_entry, _args| vec![Effect::Invalidate(qk::all_weight())],
	)
}

#[hook]
pub fn use_delete_weight_mutation() -> UseMutationHandle<String, ()> {
	use_mutation(
		|id: String| Box::pin(async move { api::weight::delete(&id).await }),
		|_ok, _id| vec![Effect::Invalidate(qk::all_weight())],
	)
}
