use reqwest::Method;

use super::request;
use crate::data::{ProfileUpdate, Tdee, User};
use crate::response::ApiError;

pub async fn get_profile() -> Result<Option<User>, ApiError> {
	request::<User>(Method::GET, "/users/profile").send_opt().await
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<User, ApiError> {
	request::<User>(Method::PUT, "/users/profile")
		.with_json(update)
		.send()
		.await
}

/// Server-side estimate from the stored body metrics; fails with a
/// validation message when weight/height/age/gender/activity are missing.
pub async fn calculate_tdee() -> Result<Tdee, ApiError> {
	request::<Tdee>(Method::GET, "/users/calculate-tdee").send().await
}
