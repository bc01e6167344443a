use yew::prelude::*;
use yewdux::prelude::*;

use crate::cache::QueryCache;
use crate::components::{on_input, on_select};
use crate::data::{ActivityLevel, Gender, ProfileUpdate};
use crate::hooks::MutationStatus;
use crate::query::{use_calculate_tdee_mutation, use_profile_query, use_update_profile_mutation};
use crate::session::{self, Session};

fn parse_opt(text: &str) -> Option<f64> {
	text.parse().ok()
}

/// Body metrics, activity level, and the four nutrition goals. The TDEE
/// round-trip pre-fills the calorie goal; saving overwrites the session
/// profile from the response.
#[function_component]
pub fn Profile() -> Html {
	let session = use_store_value::<Session>();
	let cache = use_context::<QueryCache>().expect("query cache context is not provided");

	let name = use_state(String::new);
	let current_weight = use_state(String::new);
	let goal_weight = use_state(String::new);
	let height = use_state(String::new);
	let age = use_state(String::new);
	let gender = use_state(String::new);
	let activity = use_state(String::new);
	let calorie_goal = use_state(String::new);
	let protein_goal = use_state(String::new);
	let carbs_goal = use_state(String::new);
	let fats_goal = use_state(String::new);

	let profile_query = use_profile_query(true);
	let update = use_update_profile_mutation();
	let tdee = use_calculate_tdee_mutation();

	// The cached profile wins over the session copy, which may still hold
	// the minimal login placeholder.
	let profile_user = profile_query
		.data()
		.and_then(|found| found.clone())
		.or_else(|| session.user.clone());

	{
		let name = name.clone();
		let current_weight = current_weight.clone();
		let goal_weight = goal_weight.clone();
		let height = height.clone();
		let age = age.clone();
		let gender = gender.clone();
		let activity = activity.clone();
		let calorie_goal = calorie_goal.clone();
		let protein_goal = protein_goal.clone();
		let carbs_goal = carbs_goal.clone();
		let fats_goal = fats_goal.clone();
		use_effect_with(profile_user, move |user| {
			let Some(user) = user else { return };
			let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
			name.set(user.name.clone());
			current_weight.set(number(user.current_weight));
			goal_weight.set(number(user.goal_weight));
			height.set(number(user.height));
			age.set(user.age.map(|v| v.to_string()).unwrap_or_default());
			gender.set(match user.gender {
				Some(Gender::Male) => "male".to_owned(),
				Some(Gender::Female) => "female".to_owned(),
				Some(Gender::Other) => "other".to_owned(),
				None => String::new(),
			});
			activity.set(
				user.activity_level
					.map(|level| level.value().to_owned())
					.unwrap_or_default(),
			);
			calorie_goal.set(user.daily_calorie_goal.to_string());
			protein_goal.set(user.protein_goal.to_string());
			carbs_goal.set(user.carbs_goal.to_string());
			fats_goal.set(user.fats_goal.to_string());
		});
	}

	// A fresh TDEE estimate pre-fills the calorie goal, rounded.
	{
		let calorie_goal = calorie_goal.clone();
		let tdee = tdee.clone();
		use_effect_with(tdee.is_pending(), move |pending| {
			if !pending {
				if let Some(result) = tdee.data() {
					calorie_goal.set(result.tdee.round().to_string());
				}
			}
		});
	}

	let save = {
		let name = name.clone();
		let current_weight = current_weight.clone();
		let goal_weight = goal_weight.clone();
		let height = height.clone();
		let age = age.clone();
		let gender = gender.clone();
		let activity = activity.clone();
		let calorie_goal = calorie_goal.clone();
		let protein_goal = protein_goal.clone();
		let carbs_goal = carbs_goal.clone();
		let fats_goal = fats_goal.clone();
		let update = update.clone();
		Callback::from(move |_: MouseEvent| {
			update.run(ProfileUpdate {
				name: (!name.is_empty()).then(|| (*name).clone()),
				current_weight: parse_opt(&current_weight),
				goal_weight: parse_opt(&goal_weight),
				height: parse_opt(&height),
				age: age.parse().ok(),
				gender: match gender.as_str() {
					"male" => Some(Gender::Male),
					"female" => Some(Gender::Female),
					"other" => Some(Gender::Other),
					_ => None,
				},
				activity_level: ActivityLevel::from_value(&activity),
				daily_calorie_goal: parse_opt(&calorie_goal),
				protein_goal: parse_opt(&protein_goal),
				carbs_goal: parse_opt(&carbs_goal),
				fats_goal: parse_opt(&fats_goal),
			});
		})
	};

	let calculate_tdee = {
		let tdee = tdee.clone();
		Callback::from(move |_: MouseEvent| tdee.run(()))
	};

	let sign_out = {
		let cache = cache.clone();
		Callback::from(move |_: MouseEvent| {
			cache.clear();
			session::end();
		})
	};

	let text_field = |label: &'static str, state: &UseStateHandle<String>, numeric: bool| {
		let state = state.clone();
		html! {<>
			<label class="field-label">{label}</label>
			<input
				class="field-input"
				type={if numeric { "number" } else { "text" }}
				value={(*state).clone()}
				oninput={on_input(move |value| state.set(value))}
			/>
		</>}
	};

	html! {<>
		<header class="page-header">
			<h1>{"Profile"}</h1>
			<button class="button-secondary" onclick={sign_out}>{"Sign Out"}</button>
		</header>

		if let Some(user) = &session.user {
			<p class="hint">{&user.email}</p>
		}

		<section class="form-section">
			<h3>{"About You"}</h3>
			{text_field("Name", &name, false)}
			{text_field("Current Weight (kg)", &current_weight, true)}
			{text_field("Goal Weight (kg)", &goal_weight, true)}
			{text_field("Height (cm)", &height, true)}
			{text_field("Age", &age, true)}
			<label class="field-label">{"Gender"}</label>
			<select
				class="field-input"
				onchange={on_select({
					let gender = gender.clone();
					move |value| gender.set(value)
				})}
			>
				<option value="" selected={gender.is_empty()}>{"Not set"}</option>
				<option value="male" selected={*gender == "male"}>{"Male"}</option>
				<option value="female" selected={*gender == "female"}>{"Female"}</option>
				<option value="other" selected={*gender == "other"}>{"Other"}</option>
			</select>
			<label class="field-label">{"Activity Level"}</label>
			<select
				class="field-input"
				onchange={on_select({
					let activity = activity.clone();
					move |value| activity.set(value)
				})}
			>
				<option value="" selected={activity.is_empty()}>{"Not set"}</option>
				{ActivityLevel::all().into_iter().map(|level| html! {
					<option value={level.value()} selected={*activity == level.value()}>
						{level.label()}
					</option>
				}).collect::<Html>()}
			</select>
		</section>

		<section class="form-section">
			<h3>{"Goals"}</h3>
			<button
				class="button-secondary"
				disabled={tdee.is_pending()}
				onclick={calculate_tdee}
			>
				{if tdee.is_pending() { "Calculating..." } else { "Calculate TDEE" }}
			</button>
			if let Some(result) = tdee.data() {
				<p class="tdee-info">{format!(
					"Estimated TDEE: {} cal/day",
					result.tdee.round(),
				)}</p>
			}
			if let Some(error) = tdee.error() {
				<p class="form-error">{error.message_or("Add your body metrics first")}</p>
			}
			{text_field("Daily Calorie Goal", &calorie_goal, true)}
			{text_field("Protein Goal (g)", &protein_goal, true)}
			{text_field("Carbs Goal (g)", &carbs_goal, true)}
			{text_field("Fats Goal (g)", &fats_goal, true)}
		</section>

		if let Some(error) = update.error() {
			<p class="form-error">{error.message_or("Failed to update profile")}</p>
		}
		if matches!(update.status(), MutationStatus::Success(_)) {
			<p class="form-success">{"Profile updated"}</p>
		}
		<button
			class="button-primary"
			disabled={update.is_pending()}
			onclick={save}
		>
			{if update.is_pending() { "Saving..." } else { "Save Profile" }}
		</button>
	</>}
}
