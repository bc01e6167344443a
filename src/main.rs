use yew::prelude::*;
use yewdux::prelude::*;

mod api;
mod cache;
mod components;
mod data;
mod hooks;
mod nutrition;
mod page;
mod query;
mod response;
mod session;
mod store;
mod util;

fn main() {
	#[cfg(target_family = "wasm")]
	{
		console_log::init_with_level(log::Level::Debug).ok();
		yew::Renderer::<App>::new().render();
	}
	// No renderer off-wasm; the native target only runs the test suite.
	#[cfg(not(target_family = "wasm"))]
	let _ = yew::Renderer::<App>::new;
}

#[function_component]
fn App() -> Html {
	let session = use_store_value::<session::Session>();
	html! {
		<cache::Provider>
			if session.is_authenticated() {
				<yew_router::BrowserRouter>
					<page::Layout />
				</yew_router::BrowserRouter>
			} else {
				<page::Login />
			}
		</cache::Provider>
	}
}
