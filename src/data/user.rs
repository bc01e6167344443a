use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
	Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
	Sedentary,
	Light,
	Moderate,
	Active,
	#[serde(rename = "very active")]
	VeryActive,
}
impl ActivityLevel {
	pub fn all() -> [Self; 5] {
		[Self::Sedentary, Self::Light, Self::Moderate, Self::Active, Self::VeryActive]
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Sedentary => "Sedentary",
			Self::Light => "Lightly Active",
			Self::Moderate => "Moderately Active",
			Self::Active => "Active",
			Self::VeryActive => "Very Active",
		}
	}

	pub fn value(&self) -> &'static str {
		match self {
			Self::Sedentary => "sedentary",
			Self::Light => "light",
			Self::Moderate => "moderate",
			Self::Active => "active",
			Self::VeryActive => "very active",
		}
	}

	pub fn from_value(value: &str) -> Option<Self> {
		Self::all().into_iter().find(|level| level.value() == value)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: String,
	pub email: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub current_weight: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub goal_weight: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub height: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub age: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gender: Option<Gender>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activity_level: Option<ActivityLevel>,
	pub daily_calorie_goal: f64,
	pub protein_goal: f64,
	pub carbs_goal: f64,
	pub fats_goal: f64,
}

impl User {
	/// The placeholder profile built from an auth response, used until the
	/// full profile fetch lands (or indefinitely when it fails).
	pub fn with_default_goals(id: String, email: String, name: String) -> Self {
		Self {
			id,
			email,
			name,
			current_weight: None,
			goal_weight: None,
			height: None,
			age: None,
			gender: None,
			activity_level: None,
			daily_calorie_goal: 2000.0,
			protein_goal: 150.0,
			carbs_goal: 250.0,
			fats_goal: 65.0,
		}
	}
}

/// Partial profile payload for `PUT /users/profile`. Absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_weight: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub goal_weight: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub age: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gender: Option<Gender>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub activity_level: Option<ActivityLevel>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub daily_calorie_goal: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub protein_goal: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub carbs_goal: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fats_goal: Option<f64>,
}

/// Payload of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
	pub id: String,
	pub name: String,
	pub email: String,
	pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tdee {
	pub tdee: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_goals_match_login_placeholders() {
		let user = User::with_default_goals("u1".into(), "a@b.c".into(), "A".into());
		assert_eq!(user.daily_calorie_goal, 2000.0);
		assert_eq!(user.protein_goal, 150.0);
		assert_eq!(user.carbs_goal, 250.0);
		assert_eq!(user.fats_goal, 65.0);
		assert!(user.activity_level.is_none());
	}

	#[test]
	fn activity_level_round_trips_through_wire_value() {
		for level in ActivityLevel::all() {
			assert_eq!(ActivityLevel::from_value(level.value()), Some(level));
		}
		let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
		assert_eq!(json, "\"very active\"");
	}

	#[test]
	fn profile_update_serializes_only_present_fields() {
		let update = ProfileUpdate {
			daily_calorie_goal: Some(1800.0),
			..Default::default()
		};
		let json = serde_json::to_value(&update).unwrap();
		assert_eq!(json, serde_json::json!({"dailyCalorieGoal": 1800.0}));
	}
}
