use yew::prelude::*;
use yewdux::prelude::*;

use super::on_input;
use crate::data::CreateWeightInput;
use crate::hooks::MutationStatus;
use crate::query::use_create_weight_mutation;
use crate::store::Ui;
use crate::util;

/// Records a weight entry for a chosen date. Visibility lives on the UI
/// store so the tab bar's action sheet can open it from anywhere.
#[function_component]
pub fn AddWeightModal() -> Html {
	let ui = use_store_value::<Ui>();
	let weight = use_state(String::new);
	let date = use_state(|| util::format_date(util::today()));
	let notes = use_state(String::new);
	let create = use_create_weight_mutation();

	{
		let weight = weight.clone();
		let notes = notes.clone();
		let create = create.clone();
		use_effect_with(create.is_pending(), move |pending| {
			if !pending && matches!(create.status(), MutationStatus::Success(_)) {
				weight.set(String::new());
				notes.set(String::new());
				Ui::close_add_weight();
			}
		});
	}

	if !ui.show_add_weight {
		return html! { <div class="modal" id="add-weight-modal" /> };
	}

	let close = Callback::from(|_: MouseEvent| Ui::close_add_weight());
	let parsed_weight = weight.parse::<f64>().ok().filter(|value| *value > 0.0);
	let submit = {
		let date = date.clone();
		let notes = notes.clone();
		let create = create.clone();
		Callback::from(move |_: MouseEvent| {
			let Some(value) = parsed_weight else { return };
			create.run(CreateWeightInput {
				weight: value,
				date: (*date).clone(),
				notes: (!notes.is_empty()).then(|| (*notes).clone()),
			});
		})
	};

	html! {
		<div class="modal is-active" id="add-weight-modal">
			<div class="modal-background" onclick={close.clone()} />
			<div class="modal-content">
				<h3 class="modal-title">{"Add Weight"}</h3>
				<label class="field-label">{"Weight (kg)"}</label>
				<input
					class="field-input" type="number" min="1" step="0.1"
					value={(*weight).clone()}
					oninput={on_input({
						let weight = weight.clone();
						move |value| weight.set(value)
					})}
				/>
				<label class="field-label">{"Date"}</label>
				<input
					class="field-input" type="date"
					value={(*date).clone()}
					oninput={on_input({
						let date = date.clone();
						move |value| date.set(value)
					})}
				/>
				<label class="field-label">{"Notes (optional)"}</label>
				<input
					class="field-input"
					value={(*notes).clone()}
					oninput={on_input({
						let notes = notes.clone();
						move |value| notes.set(value)
					})}
				/>
				if let Some(error) = create.error() {
					<p class="form-error">{error.message_or("Failed to save weight")}</p>
				}
				<div class="modal-actions">
					<button class="button-secondary" onclick={close}>{"Cancel"}</button>
					<button
						class="button-primary"
						disabled={parsed_weight.is_none() || create.is_pending()}
						onclick={submit}
					>
						{if create.is_pending() { "Saving..." } else { "Save" }}
					</button>
				</div>
			</div>
		</div>
	}
}
