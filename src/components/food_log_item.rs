use yew::prelude::*;

use crate::data::FoodLog;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct FoodLogItemProps {
	pub log: FoodLog,
	pub on_edit: Callback<FoodLog>,
	pub on_delete: Callback<String>,
}

#[function_component]
pub fn FoodLogItem(props: &FoodLogItemProps) -> Html {
	let log = &props.log;
	let edit = {
		let on_edit = props.on_edit.clone();
		let log = log.clone();
		Callback::from(move |_: MouseEvent| on_edit.emit(log.clone()))
	};
	let delete = {
		let on_delete = props.on_delete.clone();
		let id = log.id.clone();
		Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
	};
	html! {
		<div class="food-log-item">
			<button class="food-log-item-body" onclick={edit}>
				<p class="food-log-item-name">{&log.food_name}</p>
				<p class="food-log-item-detail">
					{format!(
						"{} serving(s) \u{2022} P: {}g C: {}g F: {}g",
						log.servings,
						log.protein.round(),
						log.carbs.round(),
						log.fats.round(),
					)}
					{log.notes.as_deref().map(|notes| format!(" \u{2022} {notes}")).unwrap_or_default()}
				</p>
			</button>
			<span class="food-log-item-calories">{format!("{}", log.calories.round())}</span>
			<button class="food-log-item-delete" onclick={delete}>{"\u{2715}"}</button>
		</div>
	}
}
