use serde::{Deserialize, Serialize};

/// A reusable library item, independent of any specific day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
	#[serde(rename = "_id")]
	pub id: String,
	pub user_id: String,
	pub name: String,
	pub calories: f64,
	pub protein: f64,
	pub carbs: f64,
	pub fats: f64,
	pub serving_size: f64,
	pub serving_unit: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodInput {
	pub name: String,
	pub calories: f64,
	pub protein: f64,
	pub carbs: f64,
	pub fats: f64,
	pub serving_size: f64,
	pub serving_unit: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
}

/// Partial food payload for `PUT /foods/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub calories: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub protein: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub carbs: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fats: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub serving_size: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub serving_unit: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn food_decodes_server_field_names() {
		let food: Food = serde_json::from_str(
			r#"{
				"_id": "f1", "userId": "u1", "name": "Apple",
				"calories": 95, "protein": 0.5, "carbs": 25, "fats": 0.3,
				"servingSize": 1, "servingUnit": "piece",
				"category": "fruit", "createdAt": "2024-01-01T00:00:00Z"
			}"#,
		)
		.unwrap();
		assert_eq!(food.id, "f1");
		assert_eq!(food.serving_unit, "piece");
		assert_eq!(food.calories, 95.0);
	}
}
