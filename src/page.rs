use yew::prelude::*;
use yew_router::prelude::*;

mod diary;
pub use diary::*;
mod foods;
pub use foods::*;
mod login;
pub use login::*;
mod profile;
pub use profile::*;
mod progress;
pub use progress::*;

use crate::components::{ActionModal, AddWeightModal};

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Root,
	#[at("/tabs/diary")]
	Diary,
	#[at("/tabs/foods")]
	Foods,
	#[at("/tabs/progress")]
	Progress,
	#[at("/tabs/profile")]
	Profile,
	#[not_found]
	#[at("/404")]
	NotFound,
}

fn switch(route: Route) -> Html {
	match route {
		Route::Root => html! { <Redirect<Route> to={Route::Diary} /> },
		Route::Diary => html! { <Diary /> },
		Route::Foods => html! { <Foods /> },
		Route::Progress => html! { <Progress /> },
		Route::Profile => html! { <Profile /> },
		Route::NotFound => html! { <h1>{"404: Page not found"}</h1> },
	}
}

/// Authenticated shell: the routed page, the bottom tab bar, and the
/// modals reachable from anywhere.
#[function_component]
pub fn Layout() -> Html {
	let show_actions = use_state(|| false);
	let navigator = use_navigator().unwrap();

	let open_actions = {
		let show_actions = show_actions.clone();
		Callback::from(move |_: MouseEvent| show_actions.set(true))
	};
	let close_actions = {
		let show_actions = show_actions.clone();
		Callback::from(move |_: ()| show_actions.set(false))
	};
	// Meal choices land on the diary, where the add-food modal lives.
	let on_meal_chosen = {
		let navigator = navigator.clone();
		Callback::from(move |_meal| navigator.push(&Route::Diary))
	};

	html! {<>
		<main class="page">
			<Switch<Route> render={switch} />
		</main>
		<nav class="tab-bar">
			<Link<Route> classes="tab-button" to={Route::Diary}>{"Diary"}</Link<Route>>
			<Link<Route> classes="tab-button" to={Route::Progress}>{"Progress"}</Link<Route>>
			<button class="tab-action" onclick={open_actions}>{"+"}</button>
			<Link<Route> classes="tab-button" to={Route::Foods}>{"Library"}</Link<Route>>
			<Link<Route> classes="tab-button" to={Route::Profile}>{"Profile"}</Link<Route>>
		</nav>
		<ActionModal open={*show_actions} on_close={close_actions} {on_meal_chosen} />
		<AddWeightModal />
	</>}
}
