use yew::prelude::*;
use yew_hooks::use_debounce_state;
use yewdux::prelude::*;

use super::on_input;
use crate::cache::key::FoodFilter;
use crate::data::{CreateFoodInput, CreateFoodLogInput, Food};
use crate::hooks::MutationStatus;
use crate::nutrition;
use crate::query::{use_create_log_mutation, use_foods_query, use_quick_add_mutation, CreateLog, QuickAdd};
use crate::store::Ui;

static SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
	Search,
	Quick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AmountMode {
	Servings,
	Units,
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AddFoodModalProps {
	/// The diary date new logs land on.
	pub date: AttrValue,
}

/// Logs a food against the meal the diary (or the action sheet) selected.
/// Either pick from the library, or quick-add a one-off food and log one
/// serving of it in the same stroke.
#[function_component]
pub fn AddFoodModal(props: &AddFoodModalProps) -> Html {
	let ui = use_store_value::<Ui>();
	let mode = use_state(|| Mode::Search);
	let amount_mode = use_state(|| AmountMode::Servings);

	let search_text = use_state(String::new);
	// Trails the input so a fast typist does not fan out one request per
	// keystroke.
	let search_query = use_debounce_state(String::new, SEARCH_DEBOUNCE_MS);

	let selected_food = use_state(|| None::<Food>);
	let servings = use_state(|| 1.0_f64);
	let notes = use_state(String::new);

	let quick_name = use_state(String::new);
	let quick_calories = use_state(String::new);
	let quick_protein = use_state(String::new);
	let quick_carbs = use_state(String::new);
	let quick_fats = use_state(String::new);

	let foods_query = use_foods_query(
		FoodFilter::new(Some(&search_query), None),
		ui.show_add_food,
	);
	let create_log = use_create_log_mutation();
	let quick_add = use_quick_add_mutation();

	let reset = {
		let mode = mode.clone();
		let amount_mode = amount_mode.clone();
		let selected_food = selected_food.clone();
		let servings = servings.clone();
		let notes = notes.clone();
		let quick_name = quick_name.clone();
		let quick_calories = quick_calories.clone();
		let quick_protein = quick_protein.clone();
		let quick_carbs = quick_carbs.clone();
		let quick_fats = quick_fats.clone();
		Callback::from(move |_: ()| {
			mode.set(Mode::Search);
			amount_mode.set(AmountMode::Servings);
			selected_food.set(None);
			servings.set(1.0);
			notes.set(String::new());
			quick_name.set(String::new());
			quick_calories.set(String::new());
			quick_protein.set(String::new());
			quick_carbs.set(String::new());
			quick_fats.set(String::new());
		})
	};

	// Selection from a previous visit does not carry over.
	{
		let selected_food = selected_food.clone();
		use_effect_with(ui.show_add_food, move |open| {
			if *open {
				selected_food.set(None);
			}
		});
	}
	{
		let reset = reset.clone();
		let create_log = create_log.clone();
		use_effect_with(create_log.is_pending(), move |pending| {
			if !pending && matches!(create_log.status(), MutationStatus::Success(_)) {
				reset.emit(());
				Ui::close_add_food();
			}
		});
	}
	{
		let reset = reset.clone();
		let quick_add = quick_add.clone();
		use_effect_with(quick_add.is_pending(), move |pending| {
			if !pending && matches!(quick_add.status(), MutationStatus::Success(_)) {
				reset.emit(());
				Ui::close_add_food();
			}
		});
	}

	if !ui.show_add_food {
		return html! { <div class="modal" id="add-food-modal" /> };
	}

	let close = {
		let reset = reset.clone();
		Callback::from(move |_: MouseEvent| {
			reset.emit(());
			Ui::close_add_food();
		})
	};

	let pending = create_log.is_pending() || quick_add.is_pending();

	let search_input = on_input({
		let search_text = search_text.clone();
		let search_query = search_query.clone();
		move |value: String| {
			search_text.set(value.clone());
			search_query.set(value);
		}
	});

	let add_selected = {
		let selected_food = selected_food.clone();
		let servings = servings.clone();
		let notes = notes.clone();
		let create_log = create_log.clone();
		let date = props.date.to_string();
		let meal_type = ui.selected_meal;
		Callback::from(move |_: MouseEvent| {
			let Some(food) = &*selected_food else { return };
			create_log.run(CreateLog {
				date: date.clone(),
				input: CreateFoodLogInput {
					food_id: food.id.clone(),
					date: date.clone(),
					meal_type,
					servings: *servings,
					notes: (!notes.is_empty()).then(|| (*notes).clone()),
				},
			});
		})
	};

	let run_quick_add = {
		let quick_name = quick_name.clone();
		let quick_calories = quick_calories.clone();
		let quick_protein = quick_protein.clone();
		let quick_carbs = quick_carbs.clone();
		let quick_fats = quick_fats.clone();
		let quick_add = quick_add.clone();
		let date = props.date.to_string();
		let meal_type = ui.selected_meal;
		Callback::from(move |_: MouseEvent| {
			quick_add.run(QuickAdd {
				date: date.clone(),
				meal_type,
				food: CreateFoodInput {
					name: (*quick_name).clone(),
					calories: quick_calories.parse().unwrap_or(0.0),
					protein: quick_protein.parse().unwrap_or(0.0),
					carbs: quick_carbs.parse().unwrap_or(0.0),
					fats: quick_fats.parse().unwrap_or(0.0),
					serving_size: 1.0,
					serving_unit: "serving".to_owned(),
					category: None,
				},
			});
		})
	};

	let amount_field = |food: &Food| {
		let serving_size = food.serving_size;
		match *amount_mode {
			AmountMode::Servings => html! {<>
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
			AmountMode::Units => html! {<>
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
			</>},
		}
	};

	let search_pane = {
		let foods = foods_query.data().cloned().unwrap_or_default();
		html! {<>
			<input
				class="field-input" placeholder="Search your foods"
				value={(*search_text).clone()}
				oninput={search_input}
			/>
			if foods_query.is_loading() {
				<p class="hint">{"Searching..."}</p>
			}
			if let Some(food) = &*selected_food {
				<div class="selected-food">
					<h4>{&food.name}</h4>
					<p class="hint">{format!("{} {} per serving", food.serving_size, food.serving_unit)}</p>
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
					{amount_field(food)}
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
						<p>{format!("{} calories", nutrition::scaled_total(food.calories, *servings))}</p>
						<p>{format!(
							"P: {}g  C: {}g  F: {}g",
							nutrition::scaled_total(food.protein, *servings),
							nutrition::scaled_total(food.carbs, *servings),
							nutrition::scaled_total(food.fats, *servings),
						)}</p>
					</div>
					<button
						class="button-primary"
						disabled={pending || *servings <= 0.0}
						onclick={add_selected}
					>
						{format!("Add to {}", ui.selected_meal.label())}
					</button>
				</div>
			} else {
				<div class="food-picker">
					{foods.iter().map(|food| {
						let selected_food = selected_food.clone();
						let food = food.clone();
						let label = format!("{} \u{2022} {} cal", food.name, food.calories.round());
						html! {
							<button
								class="food-picker-row"
								onclick={Callback::from(move |_: MouseEvent| selected_food.set(Some(food.clone())))}
							>{label}</button>
						}
					}).collect::<Html>()}
				</div>
			}
		</>}
	};

	let quick_field = |label: &'static str, state: &UseStateHandle<String>, numeric: bool| {
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

	let quick_pane = html! {<>
		{quick_field("Name", &quick_name, false)}
		{quick_field("Calories", &quick_calories, true)}
		{quick_field("Protein (g)", &quick_protein, true)}
		{quick_field("Carbs (g)", &quick_carbs, true)}
		{quick_field("Fats (g)", &quick_fats, true)}
		<button
			class="button-primary"
			disabled={quick_name.is_empty() || quick_calories.parse::<f64>().unwrap_or(0.0) <= 0.0 || pending}
			onclick={run_quick_add}
		>
			{"Quick Add"}
		</button>
	</>};

	let error = create_log.error().or_else(|| quick_add.error());

	html! {
		<div class="modal is-active" id="add-food-modal">
			<div class="modal-background" onclick={close.clone()} />
			<div class="modal-content">
				<div class="modal-header">
					<h3 class="modal-title">{format!("Add Food \u{2022} {}", ui.selected_meal.label())}</h3>
					<button class="modal-close" onclick={close}>{"Close"}</button>
				</div>
				<div class="segment">
					<button
						class={classes!((*mode == Mode::Search).then_some("is-selected"))}
						onclick={{
							let mode = mode.clone();
							Callback::from(move |_: MouseEvent| mode.set(Mode::Search))
						}}
					>{"Search"}</button>
					<button
						class={classes!((*mode == Mode::Quick).then_some("is-selected"))}
						onclick={{
							let mode = mode.clone();
							Callback::from(move |_: MouseEvent| mode.set(Mode::Quick))
						}}
					>{"Quick Add"}</button>
				</div>
				{match *mode {
					Mode::Search => search_pane,
					Mode::Quick => quick_pane,
				}}
				if let Some(error) = error {
					<p class="form-error">{error.message_or("Failed to add food")}</p>
				}
			</div>
		</div>
	}
}
