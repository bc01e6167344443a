use yew::prelude::*;

use crate::nutrition;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct MacroBarProps {
	pub label: AttrValue,
	pub current: f64,
	pub goal: f64,
	/// e.g. "fill-protein"
	pub color_class: AttrValue,
}

#[function_component]
pub fn MacroBar(props: &MacroBarProps) -> Html {
	let percentage = nutrition::progress_percentage(props.current, props.goal);
	html! {
		<div class="macro-bar">
			<div class="macro-bar-header">
				<span class="macro-bar-label">{&props.label}</span>
				<span class="macro-bar-amounts">
					{format!("{}", props.current.round())}
					<span class="macro-bar-separator">{"/"}</span>
					{format!("{}g", props.goal.round())}
				</span>
			</div>
			<div class="macro-bar-track">
				<div
					class={classes!("macro-bar-fill", props.color_class.to_string())}
					style={format!("width: {percentage:.0}%;")}
				/>
			</div>
		</div>
	}
}
