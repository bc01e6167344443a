use yew::prelude::*;

use super::on_input;
use crate::data::{FoodLog, FoodLogPatch, MealType};
use crate::hooks::MutationStatus;
use crate::nutrition;
use crate::query::{use_food_by_id_query, use_update_log_mutation, UpdateLog};

#[derive(Debug, Clone, Copy, PartialEq)]
enum AmountMode {
	Servings,
	Units,
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct EditFoodLogModalProps {
	/// The entry under edit; `None` keeps the modal closed.
	pub log: Option<FoodLog>,
	pub date: AttrValue,
	pub on_close: Callback<()>,
}

/// Edits servings, meal, and notes of an existing diary entry. The macro
/// preview rescales the rate locked in from the log's stored totals; the
/// live food record is only consulted for the serving unit toggle.
#[function_component]
pub fn EditFoodLogModal(props: &EditFoodLogModalProps) -> Html {
	let servings = use_state(|| 1.0_f64);
	let meal_type = use_state(|| MealType::Breakfast);
	let notes = use_state(String::new);
	let amount_mode = use_state(|| AmountMode::Servings);

	{
		let servings = servings.clone();
		let meal_type = meal_type.clone();
		let notes = notes.clone();
		let amount_mode = amount_mode.clone();
		use_effect_with(props.log.clone(), move |log| {
			if let Some(log) = log {
				servings.set(log.servings);
				meal_type.set(log.meal_type);
				notes.set(log.notes.clone().unwrap_or_default());
				amount_mode.set(AmountMode::Servings);
			}
		});
	}

	let food_query = use_food_by_id_query(
		props.log.as_ref().map(|log| log.food_id.clone()),
		props.log.is_some(),
	);
	let update = use_update_log_mutation();

	{
		let on_close = props.on_close.clone();
		let update = update.clone();
		use_effect_with(update.is_pending(), move |pending| {
			if !pending && matches!(update.status(), MutationStatus::Success(_)) {
				on_close.emit(());
			}
		});
	}

	let Some(log) = &props.log else {
		return html! { <div class="modal" id="edit-food-log-modal" /> };
	};

	let close = {
		let on_close = props.on_close.clone();
		Callback::from(move |_: MouseEvent| on_close.emit(()))
	};

	// Rates fixed from the stored totals; later edits to the food record do
	// not reach back into this log.
	let calories_rate = nutrition::per_serving_rate(log.calories, log.servings);
	let protein_rate = nutrition::per_serving_rate(log.protein, log.servings);
	let carbs_rate = nutrition::per_serving_rate(log.carbs, log.servings);
	let fats_rate = nutrition::per_serving_rate(log.fats, log.servings);
	let food = food_query.data().and_then(|found| found.as_ref());

	let save = {
		let update = update.clone();
		let servings = servings.clone();
		let meal_type = meal_type.clone();
		let notes = notes.clone();
		let date = props.date.to_string();
		let id = log.id.clone();
		Callback::from(move |_: MouseEvent| {
			update.run(UpdateLog {
				date: date.clone(),
				id: id.clone(),
				patch: FoodLogPatch {
					servings: Some(*servings),
					meal_type: Some(*meal_type),
					notes: (!notes.is_empty()).then(|| (*notes).clone()),
				},
			});
		})
	};

	let amount_field = match (*amount_mode, food) {
		(AmountMode::Units, Some(food)) => {
			let serving_size = food.serving_size;
			html! {<>
				<label class="field-label">{format!("Amount ({})", food.serving_unit)}</label>
				<input
					class="field-input" type="number" min="0.1" step="1"
					value={format!("{:.1}", nutrition::servings_to_units(*servings, serving_size))}
					oninput={on_input({
						let servings = servings.clone();
						move |value: String| {
							let units = value.parse().unwrap_or(0.0);
							servings.set(nutrition::units_to_servings(units, serving_size));
						}
					})}
				/>
			</>}
		}
		_ => html! {<>
			<label class="field-label">{"Servings"}</label>
			<input
				class="field-input" type="number" min="0.1" step="0.5"
				value={servings.to_string()}
				oninput={on_input({
					let servings = servings.clone();
					move |value: String| servings.set(value.parse().unwrap_or(1.0))
				})}
			/>
		</>},
	};

	html! {
		<div class="modal is-active" id="edit-food-log-modal">
			<div class="modal-background" onclick={close.clone()} />
			<div class="modal-content">
				<div class="modal-header">
					<h3 class="modal-title">{"Edit Food Log"}</h3>
					<button class="modal-close" onclick={close}>{"Close"}</button>
				</div>
				<h4>{&log.food_name}</h4>
				{match food {
					Some(food) => html! {
						<p class="hint">{format!(
							"Original: {} serving(s) = {:.1} {}",
							log.servings,
							nutrition::servings_to_units(log.servings, food.serving_size),
							food.serving_unit,
						)}</p>
					},
					None => html! {
						<p class="hint">{format!("Original: {} serving(s)", log.servings)}</p>
					},
				}}
				if let Some(food) = food {
					<div class="segment">
						<button
							class={classes!((*amount_mode == AmountMode::Servings).then_some("is-selected"))}
							onclick={{
								let amount_mode = amount_mode.clone();
								Callback::from(move |_: MouseEvent| amount_mode.set(AmountMode::Servings))
							}}
						>{"Servings"}</button>
						<button
							class={classes!((*amount_mode == AmountMode::Units).then_some("is-selected"))}
							onclick={{
								let amount_mode = amount_mode.clone();
								Callback::from(move |_: MouseEvent| amount_mode.set(AmountMode::Units))
							}}
						>{&food.serving_unit}</button>
					</div>
				}
				{amount_field}
				<label class="field-label">{"Meal Type"}</label>
				<select
					class="field-input"
					onchange={super::on_select({
						let meal_type = meal_type.clone();
						move |value: String| {
							if let Some(meal) = MealType::from_value(&value) {
								meal_type.set(meal);
							}
						}
					})}
				>
					{MealType::all().into_iter().map(|meal| html! {
						<option value={meal.value()} selected={*meal_type == meal}>{meal.label()}</option>
					}).collect::<Html>()}
				</select>
				<label class="field-label">{"Notes (optional)"}</label>
				<input
					class="field-input"
					value={(*notes).clone()}
					oninput={on_input({
						let notes = notes.clone();
						move |value| notes.set(value)
					})}
				/>
				<div class="totals-preview">
					<h5>{"Updated Totals:"}</h5>
					<p>{format!("{} calories", nutrition::scaled_total(calories_rate, *servings))}</p>
					<p>{format!(
						"P: {}g  C: {}g  F: {}g",
						nutrition::scaled_total(protein_rate, *servings),
						nutrition::scaled_total(carbs_rate, *servings),
						nutrition::scaled_total(fats_rate, *servings),
					)}</p>
				</div>
				if let Some(error) = update.error() {
					<p class="form-error">{error.message_or("Failed to update entry")}</p>
				}
				<button
					class="button-primary"
					disabled={update.is_pending() || *servings <= 0.0}
					onclick={save}
				>
					{if update.is_pending() { "Updating..." } else { "Update Entry" }}
				</button>
			</div>
		</div>
	}
}
