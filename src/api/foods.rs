use reqwest::Method;

use super::{encode, request};
use crate::cache::key::FoodFilter;
use crate::data::{CreateFoodInput, Food, FoodPatch};
use crate::response::ApiError;

pub async fn get_all(filter: &FoodFilter) -> Result<Vec<Food>, ApiError> {
	let mut query = Vec::new();
	if !filter.search.is_empty() {
		query.push(("search", filter.search.clone()));
	}
	if !filter.category.is_empty() {
		query.push(("category", filter.category.clone()));
	}
	let foods = request::<Vec<Food>>(Method::GET, "/foods")
		.with_query(&query)
		.send_opt()
		.await?;
	Ok(foods.unwrap_or_default())
}

pub async fn get_by_id(id: &str) -> Result<Option<Food>, ApiError> {
	request::<Food>(Method::GET, &format!("/foods/{}", encode(id)))
		.send_opt()
		.await
}

pub async fn create(food: &CreateFoodInput) -> Result<Option<Food>, ApiError> {
	request::<Food>(Method::POST, "/foods")
		.with_json(food)
		.send_opt()
		.await
}

pub async fn update(id: &str, patch: &FoodPatch) -> Result<Option<Food>, ApiError> {
	request::<Food>(Method::PUT, &format!("/foods/{}", encode(id)))
		.with_json(patch)
		.send_opt()
		.await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
	request::<serde_json::Value>(Method::DELETE, &format!("/foods/{}", encode(id)))
		.send_ok()
		.await
}
