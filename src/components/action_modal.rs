use yew::prelude::*;

use crate::data::MealType;
use crate::store::Ui;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct ActionModalProps {
	pub open: bool,
	pub on_close: Callback<()>,
	/// Fired after a meal choice so the caller can land on the diary.
	#[prop_or_default]
	pub on_meal_chosen: Callback<MealType>,
}

/// The "+" sheet: pick a meal to log against, record a weight, or add a
/// food to the library.
#[function_component]
pub fn ActionModal(props: &ActionModalProps) -> Html {
	if !props.open {
		return html! { <div class="modal" id="action-modal" /> };
	}
	let close = {
		let on_close = props.on_close.clone();
		Callback::from(move |_: MouseEvent| on_close.emit(()))
	};
	let meal_button = |meal: MealType| {
		let on_close = props.on_close.clone();
		let on_meal_chosen = props.on_meal_chosen.clone();
		let onclick = Callback::from(move |_: MouseEvent| {
			Ui::open_add_food(Some(meal));
			on_meal_chosen.emit(meal);
			on_close.emit(());
		});
		html! {
			<button class="action-modal-option" {onclick}>{meal.label()}</button>
		}
	};
	let add_weight = {
		let on_close = props.on_close.clone();
		Callback::from(move |_: MouseEvent| {
			Ui::open_add_weight();
			on_close.emit(());
		})
	};
	let add_library_food = {
		let on_close = props.on_close.clone();
		Callback::from(move |_: MouseEvent| {
			Ui::open_add_library_food();
			on_close.emit(());
		})
	};
	html! {
		<div class="modal is-active" id="action-modal">
			<div class="modal-background" onclick={close.clone()} />
			<div class="modal-content action-modal-sheet">
				<h3 class="action-modal-title">{"Log a meal"}</h3>
				<div class="action-modal-grid">
					{MealType::all().into_iter().map(meal_button).collect::<Html>()}
				</div>
				<h3 class="action-modal-title">{"Track"}</h3>
				<div class="action-modal-grid">
					<button class="action-modal-option" onclick={add_weight}>{"Weight"}</button>
					<button class="action-modal-option" onclick={add_library_food}>{"Library Food"}</button>
				</div>
				<button class="action-modal-cancel" onclick={close}>{"Cancel"}</button>
			</div>
		</div>
	}
}
