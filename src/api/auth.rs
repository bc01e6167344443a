use reqwest::Method;
use serde::Serialize;

use super::request;
use crate::data::AuthData;
use crate::response::ApiError;

pub async fn register(email: &str, password: &str, name: &str) -> Result<AuthData, ApiError> {
	#[derive(Serialize)]
	struct Body<'a> {
		email: &'a str,
		password: &'a str,
		name: &'a str,
	}
	request::<AuthData>(Method::POST, "/auth/register")
		.with_json(&Body { email, password, name })
		.send()
		.await
}

pub async fn login(email: &str, password: &str) -> Result<AuthData, ApiError> {
	#[derive(Serialize)]
	struct Body<'a> {
		email: &'a str,
		password: &'a str,
	}
	request::<AuthData>(Method::POST, "/auth/login")
		.with_json(&Body { email, password })
		.send()
		.await
}
