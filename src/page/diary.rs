use std::collections::HashSet;

use itertools::Itertools;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{AddFoodModal, EditFoodLogModal, FoodLogItem, MacroBar};
use crate::data::{FoodLog, MealType};
use crate::hooks::QueryStatus;
use crate::nutrition;
use crate::query::{use_daily_logs_query, use_delete_log_mutation, DeleteLog};
use crate::session::Session;
use crate::store::Ui;
use crate::util;

static HEADER_DATE: &[BorrowedFormatItem<'static>] =
	format_description!("[month repr:short] [day padding:none], [year]");

const RING_RADIUS: f64 = 96.0;

#[function_component]
pub fn Diary() -> Html {
	let session = use_store_value::<Session>();
	let current_date = use_state(util::today);
	let editing_log = use_state(|| None::<FoodLog>);
	let expanded = use_state(|| MealType::all().into_iter().collect::<HashSet<_>>());

	let date_string = util::format_date(*current_date);
	let daily_query = use_daily_logs_query(date_string.clone(), true);
	let delete_log = use_delete_log_mutation();

	let (calorie_goal, protein_goal, carbs_goal, fats_goal) = match &session.user {
		Some(user) => (
			user.daily_calorie_goal,
			user.protein_goal,
			user.carbs_goal,
			user.fats_goal,
		),
		None => (2000.0, 150.0, 250.0, 65.0),
	};

	let daily = daily_query.data().and_then(|data| data.clone());
	let summary = daily.as_ref().map(|data| data.summary.clone()).unwrap_or_default();
	let logs = daily.map(|data| data.logs).unwrap_or_default();

	let consumed = summary.total_calories.round();
	let left = nutrition::calories_remaining(calorie_goal, consumed);
	let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
	let fill = nutrition::progress_percentage(consumed, calorie_goal) / 100.0;
	let dash_offset = circumference * (1.0 - fill);

	let is_today = *current_date == util::today();
	let title = if is_today {
		"Today".to_owned()
	} else {
		current_date.weekday().to_string()
	};
	let subtitle = current_date.format(HEADER_DATE).unwrap_or_else(|_| date_string.clone());

	let previous_day = {
		let current_date = current_date.clone();
		Callback::from(move |_: MouseEvent| {
			if let Some(date) = current_date.previous_day() {
				current_date.set(date);
			}
		})
	};
	let next_day = {
		let current_date = current_date.clone();
		Callback::from(move |_: MouseEvent| {
			if let Some(date) = current_date.next_day() {
				current_date.set(date);
			}
		})
	};
	let refresh = {
		let refetch = daily_query.refetcher();
		Callback::from(move |_: MouseEvent| refetch.emit(()))
	};

	let by_meal = logs
		.iter()
		.cloned()
		.map(|log| (log.meal_type, log))
		.into_group_map();

	let meal_section = |meal: MealType| {
		let meal_logs = by_meal.get(&meal).cloned().unwrap_or_default();
		let is_expanded = expanded.contains(&meal);
		let subtotal = summary.meal_breakdown.get(&meal).map(|totals| {
			format!(
				"{} items \u{2022} {} cal \u{2022} P: {}g C: {}g F: {}g",
				totals.count,
				totals.calories.round(),
				totals.protein.round(),
				totals.carbs.round(),
				totals.fats.round(),
			)
		});
		let toggle = {
			let expanded = expanded.clone();
			Callback::from(move |_: MouseEvent| {
				let mut next = (*expanded).clone();
				if !next.remove(&meal) {
					next.insert(meal);
				}
				expanded.set(next);
			})
		};
		let add_food = Callback::from(move |_: MouseEvent| Ui::open_add_food(Some(meal)));
		html! {
			<section class="meal-section">
				<button class="meal-header" onclick={toggle}>
					<span class="meal-name">{meal.label()}</span>
					if let Some(subtotal) = subtotal {
						<span class="meal-subtotal">{subtotal}</span>
					}
					<span class="meal-chevron">{if is_expanded { "\u{25B4}" } else { "\u{25BE}" }}</span>
				</button>
				if is_expanded {
					<div class="meal-body">
						if meal_logs.is_empty() {
							<p class="meal-empty">{"No items"}</p>
						} else {
							{meal_logs.iter().map(|log| {
								let on_edit = {
									let editing_log = editing_log.clone();
									Callback::from(move |log: FoodLog| editing_log.set(Some(log)))
								};
								let on_delete = {
									let delete_log = delete_log.clone();
									let date = date_string.clone();
									Callback::from(move |id: String| {
										delete_log.run(DeleteLog {
											date: date.clone(),
											id,
										});
									})
								};
								html! {
									<FoodLogItem key={log.id.clone()} log={log.clone()} {on_edit} {on_delete} />
								}
							}).collect::<Html>()}
						}
						<button class="meal-add" onclick={add_food}>{"+ Add Food"}</button>
					</div>
				}
			</section>
		}
	};

	let close_edit = {
		let editing_log = editing_log.clone();
		Callback::from(move |_: ()| editing_log.set(None))
	};

	html! {<>
		<header class="diary-header">
			<button class="nav-button" onclick={previous_day}>{"\u{2039}"}</button>
			<div class="diary-date">
				<h1>{title}</h1>
				<p>{subtitle}</p>
			</div>
			<button class="nav-button" onclick={next_day}>{"\u{203A}"}</button>
		</header>

		<button class="refresh-button" onclick={refresh}>{"Refresh"}</button>

		<div class="calorie-ring">
			<svg viewBox="0 0 208 208" class="calorie-ring-svg">
				<circle cx="104" cy="104" r={RING_RADIUS.to_string()} class="calorie-ring-track" />
				<circle
					cx="104" cy="104" r={RING_RADIUS.to_string()}
					class="calorie-ring-fill"
					stroke-dasharray={circumference.to_string()}
					stroke-dashoffset={dash_offset.to_string()}
				/>
			</svg>
			<div class="calorie-ring-center">
				<h2>{format!("{consumed}")}</h2>
				<p>{"Calories Consumed"}</p>
				<p class="hint">{format!("{left} left")}</p>
			</div>
		</div>

		<div class="macro-grid">
			<MacroBar label="Protein" current={summary.total_protein} goal={protein_goal} color_class="fill-protein" />
			<MacroBar label="Carbs" current={summary.total_carbs} goal={carbs_goal} color_class="fill-carbs" />
			<MacroBar label="Fats" current={summary.total_fats} goal={fats_goal} color_class="fill-fats" />
		</div>

		{match daily_query.status() {
			QueryStatus::Pending(_) => html! { <p class="hint">{"Loading..."}</p> },
			QueryStatus::Failed(error) => html! {
				<p class="form-error">{error.message_or("Failed to load the day")}</p>
			},
			_ => html! {},
		}}

		{MealType::all().into_iter().map(meal_section).collect::<Html>()}

		<AddFoodModal date={date_string.clone()} />
		<EditFoodLogModal log={(*editing_log).clone()} date={date_string} on_close={close_edit} />
	</>}
}
