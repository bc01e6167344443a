use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
	Breakfast,
	Lunch,
	Dinner,
	Snack,
}
impl MealType {
	pub fn all() -> [Self; 4] {
		[Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Breakfast => "Breakfast",
			Self::Lunch => "Lunch",
			Self::Dinner => "Dinner",
			Self::Snack => "Snack",
		}
	}

	pub fn value(&self) -> &'static str {
		match self {
			Self::Breakfast => "breakfast",
			Self::Lunch => "lunch",
			Self::Dinner => "dinner",
			Self::Snack => "snack",
		}
	}

	pub fn from_value(value: &str) -> Option<Self> {
		Self::all().into_iter().find(|meal| meal.value() == value)
	}
}

/// A food consumed on a specific date under a specific meal. The macro
/// totals are computed server-side from food x servings at create/update
/// time; editing the source food later does not change existing logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLog {
	#[serde(rename = "_id")]
	pub id: String,
	pub user_id: String,
	pub food_id: String,
	pub date: String,
	pub meal_type: MealType,
	pub servings: f64,
	pub calories: f64,
	pub protein: f64,
	pub carbs: f64,
	pub fats: f64,
	pub food_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodLogInput {
	pub food_id: String,
	pub date: String,
	pub meal_type: MealType,
	pub servings: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub servings: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meal_type: Option<MealType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MealTotals {
	#[serde(default)]
	pub calories: f64,
	#[serde(default)]
	pub protein: f64,
	#[serde(default)]
	pub carbs: f64,
	#[serde(default)]
	pub fats: f64,
	#[serde(default)]
	pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
	#[serde(default)]
	pub total_calories: f64,
	#[serde(default)]
	pub total_protein: f64,
	#[serde(default)]
	pub total_carbs: f64,
	#[serde(default)]
	pub total_fats: f64,
	#[serde(default)]
	pub meal_breakdown: HashMap<MealType, MealTotals>,
}

/// Per-date aggregate recomputed by the server on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyData {
	#[serde(default)]
	pub logs: Vec<FoodLog>,
	#[serde(default)]
	pub summary: DailySummary,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn meal_type_uses_lowercase_wire_names() {
		assert_eq!(serde_json::to_string(&MealType::Breakfast).unwrap(), "\"breakfast\"");
		let meal: MealType = serde_json::from_str("\"snack\"").unwrap();
		assert_eq!(meal, MealType::Snack);
	}

	#[test]
	fn daily_data_decodes_meal_breakdown() {
		let data: DailyData = serde_json::from_str(
			r#"{
				"logs": [{
					"_id": "l1", "userId": "u1", "foodId": "f1",
					"date": "2024-06-01", "mealType": "lunch", "servings": 2,
					"calories": 400, "protein": 2, "carbs": 50, "fats": 1,
					"foodName": "Rice"
				}],
				"summary": {
					"totalCalories": 400, "totalProtein": 2,
					"totalCarbs": 50, "totalFats": 1,
					"mealBreakdown": {
						"lunch": {"calories": 400, "protein": 2, "carbs": 50, "fats": 1, "count": 1}
					}
				}
			}"#,
		)
		.unwrap();
		assert_eq!(data.logs.len(), 1);
		assert_eq!(data.logs[0].meal_type, MealType::Lunch);
		assert_eq!(data.summary.total_calories, 400.0);
		let lunch = data.summary.meal_breakdown.get(&MealType::Lunch).unwrap();
		assert_eq!(lunch.count, 1);
	}

	#[test]
	fn patch_serializes_only_present_fields() {
		let patch = FoodLogPatch {
			servings: Some(1.5),
			meal_type: Some(MealType::Dinner),
			..Default::default()
		};
		let json = serde_json::to_value(&patch).unwrap();
		assert_eq!(json, serde_json::json!({"servings": 1.5, "mealType": "dinner"}));
	}
}
