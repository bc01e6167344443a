use reqwest::Method;

use super::{encode, request};
use crate::data::{CreateWeightInput, WeightEntry, WeightPatch, WeightTrend};
use crate::response::ApiError;

/// Ordered newest-first by the server; the trend math relies on that.
pub async fn get_all() -> Result<Vec<WeightEntry>, ApiError> {
	let entries = request::<Vec<WeightEntry>>(Method::GET, "/weight").send_opt().await?;
	Ok(entries.unwrap_or_default())
}

pub async fn get_latest() -> Result<Option<WeightEntry>, ApiError> {
	request::<WeightEntry>(Method::GET, "/weight/latest").send_opt().await
}

pub async fn get_trend(days: u32) -> Result<WeightTrend, ApiError> {
	let trend = request::<WeightTrend>(Method::GET, &format!("/weight/trend/{days}"))
		.send_opt()
		.await?;
	Ok(trend.unwrap_or_default())
}

pub async fn create(input: &CreateWeightInput) -> Result<Option<WeightEntry>, ApiError> {
	request::<WeightEntry>(Method::POST, "/weight")
		.with_json(input)
		.send_opt()
		.await
}

pub async fn update(id: &str, patch: &WeightPatch) -> Result<Option<WeightEntry>, ApiError> {
	request::<WeightEntry>(Method::PUT, &format!("/weight/{}", encode(id)))
		.with_json(patch)
		.send_opt()
		.await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
	request::<serde_json::Value>(Method::DELETE, &format!("/weight/{}", encode(id)))
		.send_ok()
		.await
}
