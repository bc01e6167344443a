use reqwest::Method;

use super::{encode, request};
use crate::data::{CreateFoodLogInput, DailyData, FoodLog, FoodLogPatch};
use crate::response::ApiError;

pub async fn get_daily(date: &str) -> Result<Option<DailyData>, ApiError> {
	request::<DailyData>(Method::GET, &format!("/logs/daily/{}", encode(date)))
		.send_opt()
		.await
}

pub async fn create(input: &CreateFoodLogInput) -> Result<Option<FoodLog>, ApiError> {
	request::<FoodLog>(Method::POST, "/logs")
		.with_json(input)
		.send_opt()
		.await
}

pub async fn update(id: &str, patch: &FoodLogPatch) -> Result<Option<FoodLog>, ApiError> {
	request::<FoodLog>(Method::PUT, &format!("/logs/{}", encode(id)))
		.with_json(patch)
		.send_opt()
		.await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
	request::<serde_json::Value>(Method::DELETE, &format!("/logs/{}", encode(id)))
		.send_ok()
		.await
}
