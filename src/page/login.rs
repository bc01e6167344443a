use yew::prelude::*;

use crate::components::on_input;
use crate::query::{use_login_mutation, AuthSubmit};

/// Email/password entry, toggling between sign-in and registration. A
/// successful submit flips the session store, which swaps the whole view
/// set; failures stay local to this form.
#[function_component]
pub fn Login() -> Html {
	let register = use_state(|| false);
	let email = use_state(String::new);
	let password = use_state(String::new);
	let name = use_state(String::new);

	let login = use_login_mutation(*register);

	let toggle = {
		let register = register.clone();
		Callback::from(move |_: MouseEvent| register.set(!*register))
	};
	let submit = {
		let email = email.clone();
		let password = password.clone();
		let name = name.clone();
		let login = login.clone();
		Callback::from(move |_: MouseEvent| {
			login.run(AuthSubmit {
				email: (*email).clone(),
				password: (*password).clone(),
				name: (*name).clone(),
			});
		})
	};

	let incomplete = email.is_empty() || password.is_empty() || (*register && name.is_empty());

	html! {
		<div class="login-page">
			<h1 class="login-title">{if *register { "Create Account" } else { "Welcome Back" }}</h1>
			if *register {
				<label class="field-label">{"Name"}</label>
				<input
					class="field-input"
					value={(*name).clone()}
					oninput={on_input({
						let name = name.clone();
						move |value| name.set(value)
					})}
				/>
			}
			<label class="field-label">{"Email"}</label>
			<input
				class="field-input" type="email"
				value={(*email).clone()}
				oninput={on_input({
					let email = email.clone();
					move |value| email.set(value)
				})}
			/>
			<label class="field-label">{"Password"}</label>
			<input
				class="field-input" type="password"
				value={(*password).clone()}
				oninput={on_input({
					let password = password.clone();
					move |value| password.set(value)
				})}
			/>
			if let Some(error) = login.error() {
				<p class="form-error">{error.message_or("Authentication failed")}</p>
			}
			<button
				class="button-primary"
				disabled={incomplete || login.is_pending()}
				onclick={submit}
			>
				{match (*register, login.is_pending()) {
					(_, true) => "Please wait...",
					(true, false) => "Sign Up",
					(false, false) => "Sign In",
				}}
			</button>
			<button class="login-toggle" onclick={toggle}>
				{if *register {
					"Already have an account? Sign in"
				} else {
					"New here? Create an account"
				}}
			</button>
		</div>
	}
}
