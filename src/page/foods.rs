use yew::prelude::*;
use yew_hooks::use_debounce_state;
use yewdux::prelude::*;

use crate::cache::key::FoodFilter;
use crate::components::{on_input, on_select};
use crate::data::{CreateFoodInput, Food, FoodPatch};
use crate::hooks::MutationStatus;
use crate::query::{
	use_create_food_mutation, use_delete_food_mutation, use_foods_query, use_update_food_mutation,
	UpdateFood,
};
use crate::store::Ui;

static SEARCH_DEBOUNCE_MS: u32 = 300;

static CATEGORIES: &[&str] = &[
	"all",
	"protein",
	"carbs",
	"vegetables",
	"fruits",
	"dairy",
	"snacks",
	"drinks",
	"other",
];

/// The personal food library: filterable list plus the create/edit form.
#[function_component]
pub fn Foods() -> Html {
	let ui = use_store_value::<Ui>();

	let search_text = use_state(String::new);
	let search_query = use_debounce_state(String::new, SEARCH_DEBOUNCE_MS);
	let category_filter = use_state(|| "all".to_owned());

	let editing_food = use_state(|| None::<Food>);
	let name = use_state(String::new);
	let calories = use_state(String::new);
	let protein = use_state(String::new);
	let carbs = use_state(String::new);
	let fats = use_state(String::new);
	let serving_size = use_state(|| "1".to_owned());
	let serving_unit = use_state(|| "serving".to_owned());
	let category = use_state(|| "other".to_owned());

	let filter = FoodFilter::new(
		Some(&search_query),
		(*category_filter != "all").then_some(category_filter.as_str()),
	);
	let foods_query = use_foods_query(filter, true);
	let create = use_create_food_mutation();
	let update = use_update_food_mutation();
	let delete = use_delete_food_mutation();

	// Prefill the form whenever a row enters edit.
	{
		let name = name.clone();
		let calories = calories.clone();
		let protein = protein.clone();
		let carbs = carbs.clone();
		let fats = fats.clone();
		let serving_size = serving_size.clone();
		let serving_unit = serving_unit.clone();
		let category = category.clone();
		use_effect_with((*editing_food).clone(), move |food| {
			if let Some(food) = food {
				name.set(food.name.clone());
				calories.set(food.calories.to_string());
				protein.set(food.protein.to_string());
				carbs.set(food.carbs.to_string());
				fats.set(food.fats.to_string());
				serving_size.set(food.serving_size.to_string());
				serving_unit.set(food.serving_unit.clone());
				category.set(if food.category.is_empty() {
					"other".to_owned()
				} else {
					food.category.clone()
				});
			}
		});
	}

	let reset_form = {
		let editing_food = editing_food.clone();
		let name = name.clone();
		let calories = calories.clone();
		let protein = protein.clone();
		let carbs = carbs.clone();
		let fats = fats.clone();
		let serving_size = serving_size.clone();
		let serving_unit = serving_unit.clone();
		let category = category.clone();
		Callback::from(move |_: ()| {
			editing_food.set(None);
			name.set(String::new());
			calories.set(String::new());
			protein.set(String::new());
			carbs.set(String::new());
			fats.set(String::new());
			serving_size.set("1".to_owned());
			serving_unit.set("serving".to_owned());
			category.set("other".to_owned());
		})
	};

	{
		let reset_form = reset_form.clone();
		let create = create.clone();
		use_effect_with(create.is_pending(), move |pending| {
			if !pending && matches!(create.status(), MutationStatus::Success(_)) {
				reset_form.emit(());
				Ui::close_add_library_food();
			}
		});
	}
	{
		let reset_form = reset_form.clone();
		let update = update.clone();
		use_effect_with(update.is_pending(), move |pending| {
			if !pending && matches!(update.status(), MutationStatus::Success(_)) {
				reset_form.emit(());
				Ui::close_add_library_food();
			}
		});
	}

	let search_input = on_input({
		let search_text = search_text.clone();
		let search_query = search_query.clone();
		move |value: String| {
			search_text.set(value.clone());
			search_query.set(value);
		}
	});

	let form_open = ui.show_add_library_food || editing_food.is_some();
	let pending = create.is_pending() || update.is_pending();

	let submit = {
		let editing_food = editing_food.clone();
		let name = name.clone();
		let calories = calories.clone();
		let protein = protein.clone();
		let carbs = carbs.clone();
		let fats = fats.clone();
		let serving_size = serving_size.clone();
		let serving_unit = serving_unit.clone();
		let category = category.clone();
		let create = create.clone();
		let update = update.clone();
		Callback::from(move |_: MouseEvent| {
			let parse = |text: &str| text.parse::<f64>().unwrap_or(0.0);
			match &*editing_food {
				Some(food) => update.run(UpdateFood {
					id: food.id.clone(),
					patch: FoodPatch {
						name: Some((*name).clone()),
						calories: Some(parse(&calories)),
						protein: Some(parse(&protein)),
						carbs: Some(parse(&carbs)),
						fats: Some(parse(&fats)),
						serving_size: Some(serving_size.parse().unwrap_or(1.0)),
						serving_unit: Some((*serving_unit).clone()),
						category: Some((*category).clone()),
					},
				}),
				None => create.run(CreateFoodInput {
					name: (*name).clone(),
					calories: parse(&calories),
					protein: parse(&protein),
					carbs: parse(&carbs),
					fats: parse(&fats),
					serving_size: serving_size.parse().unwrap_or(1.0),
					serving_unit: (*serving_unit).clone(),
					category: Some((*category).clone()),
				}),
			}
		})
	};

	let close_form = {
		let reset_form = reset_form.clone();
		Callback::from(move |_: MouseEvent| {
			reset_form.emit(());
			Ui::close_add_library_food();
		})
	};

	let number_field = |label: &'static str, state: &UseStateHandle<String>| {
		let state = state.clone();
		html! {<>
			<label class="field-label">{label}</label>
			<input
				class="field-input" type="number" min="0"
				value={(*state).clone()}
				oninput={on_input(move |value| state.set(value))}
			/>
		</>}
	};

	let food_row = |food: &Food| {
		let edit = {
			let editing_food = editing_food.clone();
			let food = food.clone();
			Callback::from(move |_: MouseEvent| editing_food.set(Some(food.clone())))
		};
		let remove = {
			let delete = delete.clone();
			let id = food.id.clone();
			Callback::from(move |_: MouseEvent| delete.run(id.clone()))
		};
		html! {
			<div class="food-row" key={food.id.clone()}>
				<div class="food-row-body">
					<p class="food-row-name">{&food.name}</p>
					<p class="food-row-detail">{format!(
						"{} {} \u{2022} {}",
						food.serving_size, food.serving_unit, food.category,
					)}</p>
					<p class="food-row-macros">{format!(
						"{} cal \u{2022} P: {}g C: {}g F: {}g",
						food.calories.round(),
						food.protein.round(),
						food.carbs.round(),
						food.fats.round(),
					)}</p>
				</div>
				<button class="food-row-edit" onclick={edit}>{"Edit"}</button>
				<button class="food-row-delete" onclick={remove}>{"\u{2715}"}</button>
			</div>
		}
	};

	let foods = foods_query.data().cloned().unwrap_or_default();

	html! {<>
		<header class="page-header">
			<h1>{"My Foods"}</h1>
			<button
				class="button-primary"
				onclick={Callback::from(|_: MouseEvent| Ui::open_add_library_food())}
			>
				{"+ Add"}
			</button>
		</header>

		<input
			class="field-input" placeholder="Search foods"
			value={(*search_text).clone()}
			oninput={search_input}
		/>
		<select
			class="field-input"
			onchange={on_select({
				let category_filter = category_filter.clone();
				move |value| category_filter.set(value)
			})}
		>
			{CATEGORIES.iter().map(|option| html! {
				<option value={*option} selected={*category_filter == *option}>{*option}</option>
			}).collect::<Html>()}
		</select>

		if let Some(error) = foods_query.error() {
			<p class="form-error">{error.message_or("Failed to load foods")}</p>
		}
		if foods_query.is_loading() {
			<p class="hint">{"Loading..."}</p>
		}
		if foods.is_empty() && !foods_query.is_loading() {
			<p class="hint">{"No foods yet. Add one to get started."}</p>
		}
		<div class="food-list">
			{foods.iter().map(food_row).collect::<Html>()}
		</div>

		if form_open {
			<div class="modal is-active" id="food-form-modal">
				<div class="modal-background" onclick={close_form.clone()} />
				<div class="modal-content">
					<div class="modal-header">
						<h3 class="modal-title">
							{if editing_food.is_some() { "Edit Food" } else { "Add Food" }}
						</h3>
						<button class="modal-close" onclick={close_form}>{"Close"}</button>
					</div>
					<label class="field-label">{"Name"}</label>
					<input
						class="field-input"
						value={(*name).clone()}
						oninput={on_input({
							let name = name.clone();
							move |value| name.set(value)
						})}
					/>
					{number_field("Calories (per serving)", &calories)}
					{number_field("Protein (g)", &protein)}
					{number_field("Carbs (g)", &carbs)}
					{number_field("Fats (g)", &fats)}
					{number_field("Serving Size", &serving_size)}
					<label class="field-label">{"Serving Unit"}</label>
					<input
						class="field-input"
						value={(*serving_unit).clone()}
						oninput={on_input({
							let serving_unit = serving_unit.clone();
							move |value| serving_unit.set(value)
						})}
					/>
					<label class="field-label">{"Category"}</label>
					<select
						class="field-input"
						onchange={on_select({
							let category = category.clone();
							move |value| category.set(value)
						})}
					>
						{CATEGORIES.iter().skip(1).map(|option| html! {
							<option value={*option} selected={*category == *option}>{*option}</option>
						}).collect::<Html>()}
					</select>
					if let Some(error) = create.error().or_else(|| update.error()) {
						<p class="form-error">{error.message_or("Failed to save food")}</p>
					}
					<button
						class="button-primary"
						disabled={name.is_empty() || calories.parse::<f64>().unwrap_or(0.0) <= 0.0 || pending}
						onclick={submit}
					>
						{if editing_food.is_some() { "Update Food" } else { "Add Food" }}
					</button>
				</div>
			</div>
		}
	</>}
}
