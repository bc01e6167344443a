use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::cache::{key as qk, QueryCache};
use crate::components::on_input;
use crate::data::{WeightEntry, WeightPatch};
use crate::hooks::MutationStatus;
use crate::nutrition;
use crate::query::{
	use_delete_weight_mutation, use_update_weight_mutation, use_weight_latest_query,
	use_weight_trend_query, use_weights_query, UpdateWeight,
};
use crate::session::Session;
use crate::store::Ui;
use crate::util;

static HISTORY_DATE: &[BorrowedFormatItem<'static>] =
	format_description!("[month repr:long] [day padding:none], [year]");

static TREND_WINDOW_DAYS: u32 = 30;

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 160.0;

/// Entries arrive newest first from the server; the chart runs oldest to
/// newest left to right.
fn chart_points(entries: &[WeightEntry]) -> Option<String> {
	if entries.len() < 2 {
		return None;
	}
	let min = entries.iter().map(|entry| entry.weight).fold(f64::INFINITY, f64::min);
	let max = entries.iter().map(|entry| entry.weight).fold(f64::NEG_INFINITY, f64::max);
	let span = if max > min { max - min } else { 1.0 };
	let step = CHART_WIDTH / (entries.len() - 1) as f64;
	let points = entries
		.iter()
		.rev()
		.enumerate()
		.map(|(index, entry)| {
			let x = index as f64 * step;
			let y = CHART_HEIGHT - ((entry.weight - min) / span) * CHART_HEIGHT;
			format!("{x:.1},{y:.1}")
		})
		.collect::<Vec<_>>()
		.join(" ");
	Some(points)
}

fn history_date(entry: &WeightEntry) -> String {
	util::parse_date(&entry.date)
		.and_then(|date| date.format(HISTORY_DATE).ok())
		.unwrap_or_else(|| entry.date.clone())
}

#[function_component]
pub fn Progress() -> Html {
	let session = use_store_value::<Session>();
	let cache = use_context::<QueryCache>().expect("query cache context is not provided");
	let weights_query = use_weights_query(true);
	let latest_query = use_weight_latest_query(true);
	let trend_query = use_weight_trend_query(TREND_WINDOW_DAYS, true);
	let delete = use_delete_weight_mutation();
	let update = use_update_weight_mutation();

	// The entry under inline edit, plus the text being typed.
	let editing = use_state(|| None::<String>);
	let edit_weight = use_state(String::new);

	{
		let editing = editing.clone();
		let update = update.clone();
		use_effect_with(update.is_pending(), move |pending| {
			if !pending && matches!(update.status(), MutationStatus::Success(_)) {
				editing.set(None);
			}
		});
	}

	let weights = weights_query.data().cloned().unwrap_or_default();
	let latest = latest_query
		.data()
		.and_then(|entry| entry.clone())
		.or_else(|| weights.first().cloned());
	let trend = trend_query.data().cloned().unwrap_or_default();

	// Net change over the trend window; falls back to the two most recent
	// entries until the trend fetch lands.
	let change = if trend.entries.is_empty() {
		match (weights.first(), weights.get(1)) {
			(Some(a), Some(b)) => nutrition::weight_delta(a.weight, b.weight),
			_ => 0.0,
		}
	} else {
		trend.change
	};
	let delta_chip = {
		let magnitude = nutrition::weight_delta_magnitude(change);
		let label = nutrition::weight_delta_label(change);
		html! {
			<span class={classes!(
				"delta-chip",
				(change > 0.0).then_some("is-gain"),
				(change < 0.0).then_some("is-loss"),
			)}>
				{format!("{magnitude} kg {label} this month")}
			</span>
		}
	};

	let goal_weight = session.user.as_ref().and_then(|user| user.goal_weight);
	let to_goal = match (&latest, goal_weight) {
		(Some(latest), Some(goal)) => {
			let distance = nutrition::weight_delta_magnitude(nutrition::weight_delta(latest.weight, goal));
			format!("{distance}")
		}
		_ => "--".to_owned(),
	};

	let refresh = {
		let cache = cache.clone();
		Callback::from(move |_: MouseEvent| cache.invalidate(&qk::all_weight()))
	};

	// The chart prefers the trend window; before it loads, the full
	// collection stands in.
	let chart_entries = if trend.entries.is_empty() { &weights } else { &trend.entries };

	let history_row = |index: usize, entry: &WeightEntry| {
		let remove = {
			let delete = delete.clone();
			let id = entry.id.clone();
			Callback::from(move |_: MouseEvent| delete.run(id.clone()))
		};
		// Change against the next-older entry, the way the list reads.
		let row_delta = weights.get(index + 1).map(|older| {
			let delta = nutrition::weight_delta(entry.weight, older.weight);
			format!(
				"{} kg {}",
				nutrition::weight_delta_magnitude(delta),
				nutrition::weight_delta_label(delta),
			)
		});
		let is_editing = editing.as_deref() == Some(entry.id.as_str());
		let start_edit = {
			let editing = editing.clone();
			let edit_weight = edit_weight.clone();
			let id = entry.id.clone();
			let weight = entry.weight;
			Callback::from(move |_: MouseEvent| {
				edit_weight.set(weight.to_string());
				editing.set(Some(id.clone()));
			})
		};
		let save_edit = {
			let update = update.clone();
			let edit_weight = edit_weight.clone();
			let id = entry.id.clone();
			Callback::from(move |_: MouseEvent| {
				let Ok(weight) = edit_weight.parse::<f64>() else { return };
				if weight <= 0.0 {
					return;
				}
				update.run(UpdateWeight {
					id: id.clone(),
					patch: WeightPatch {
						weight: Some(weight),
						..Default::default()
					},
				});
			})
		};
		let cancel_edit = {
			let editing = editing.clone();
			Callback::from(move |_: MouseEvent| editing.set(None))
		};
		html! {
			<div class="history-row" key={entry.id.clone()}>
				<div class="history-row-body">
					if is_editing {
						<input
							class="field-input" type="number" min="1" step="0.1"
							value={(*edit_weight).clone()}
							oninput={on_input({
								let edit_weight = edit_weight.clone();
								move |value| edit_weight.set(value)
							})}
						/>
					} else {
						<p class="history-weight">{format!("{} kg", entry.weight)}</p>
					}
					<p class="history-date">{history_date(entry)}</p>
					if let Some(delta) = row_delta {
						<p class="hint">{delta}</p>
					}
					if let Some(notes) = &entry.notes {
						<p class="hint">{notes}</p>
					}
				</div>
				if is_editing {
					<button class="button-primary" disabled={update.is_pending()} onclick={save_edit}>{"Save"}</button>
					<button class="button-secondary" onclick={cancel_edit}>{"Cancel"}</button>
				} else {
					<button class="history-edit" onclick={start_edit}>{"Edit"}</button>
					<button class="history-delete" onclick={remove}>{"\u{2715}"}</button>
				}
			</div>
		}
	};

	html! {<>
		<header class="page-header">
			<h1>{"Progress"}</h1>
			<button class="refresh-button" onclick={refresh}>{"Refresh"}</button>
		</header>

		<div class="trend-card">
			<div class="trend-card-top">
				<div>
					<h3 class="trend-card-label">{"Weight Trend"}</h3>
					<p class="trend-card-value">
						{latest.as_ref().map(|entry| entry.weight.to_string()).unwrap_or_else(|| "--".to_owned())}
						<span class="trend-card-unit">{"kg"}</span>
					</p>
				</div>
				{delta_chip}
			</div>
			{match chart_points(chart_entries) {
				Some(points) => html! {
					<svg
						class="trend-chart"
						viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
						preserveAspectRatio="none"
					>
						<polyline fill="none" class="trend-line" points={points} />
					</svg>
				},
				None => html! { <p class="hint">{"Log a few weights to see the trend."}</p> },
			}}
		</div>

		<div class="stats-grid">
			<div class="stat-card">
				<p class="stat-label">{"Goal Weight"}</p>
				<p class="stat-value">
					{goal_weight.map(|goal| goal.to_string()).unwrap_or_else(|| "--".to_owned())}
					<span class="stat-unit">{"kg"}</span>
				</p>
			</div>
			<div class="stat-card">
				<p class="stat-label">{"To Goal"}</p>
				<p class="stat-value">{to_goal}<span class="stat-unit">{"kg"}</span></p>
			</div>
		</div>

		<div class="history">
			<div class="history-header">
				<h3>{"History"}</h3>
				<button
					class="button-primary"
					onclick={Callback::from(|_: MouseEvent| Ui::open_add_weight())}
				>
					{"+ Add Weight"}
				</button>
			</div>
			if let Some(error) = delete.error().or_else(|| update.error()) {
				<p class="form-error">{error.message_or("Failed to save entry")}</p>
			}
			if weights_query.is_loading() {
				<p class="hint">{"Loading..."}</p>
			}
			{weights.iter().take(5).enumerate().map(|(index, entry)| history_row(index, entry)).collect::<Html>()}
		</div>
	</>}
}
