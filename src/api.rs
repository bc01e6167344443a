//! Typed surface over the remote nutrition API. Each submodule covers one
//! resource group; every request goes through [`request`], which attaches
//! the bearer token read synchronously from local storage.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::response::Response;
use crate::session::{AuthToken, StoredValue};

pub mod auth;
pub mod foods;
pub mod logs;
pub mod users;
pub mod weight;

static API_URL: &str = "https://api-calorie-tracker.adam-aviv.com/api";

pub fn request<T>(method: Method, path: &str) -> Response<T>
where
	T: DeserializeOwned,
{
	let endpoint = format!("{API_URL}{path}");
	let mut builder: RequestBuilder = reqwest::Client::new().request(method, &endpoint);
	builder = builder.header("Content-Type", "application/json");
	if let Some(AuthToken(token)) = AuthToken::load() {
		builder = builder.header("Authorization", format!("Bearer {token}"));
	}
	Response::<T>::from(builder)
}

fn encode(segment: &str) -> String {
	urlencoding::encode(segment).into_owned()
}
