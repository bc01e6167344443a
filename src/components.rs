use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;

mod action_modal;
pub use action_modal::*;
mod add_food_modal;
pub use add_food_modal::*;
mod add_weight_modal;
pub use add_weight_modal::*;
mod edit_food_log_modal;
pub use edit_food_log_modal::*;
mod food_log_item;
pub use food_log_item::*;
mod macro_bar;
pub use macro_bar::*;

/// Text-input callback builder; hands the current value to `apply`.
pub(crate) fn on_input(apply: impl Fn(String) + 'static) -> Callback<InputEvent> {
	Callback::from(move |ev: InputEvent| {
		let input: web_sys::HtmlInputElement =
			ev.target_dyn_into().expect_throw("event target should be an input");
		apply(input.value());
	})
}

/// Change callback builder for `<select>` elements.
pub(crate) fn on_select(apply: impl Fn(String) + 'static) -> Callback<Event> {
	Callback::from(move |ev: Event| {
		let select: web_sys::HtmlSelectElement =
			ev.target_dyn_into().expect_throw("event target should be a select");
		apply(select.value());
	})
}
