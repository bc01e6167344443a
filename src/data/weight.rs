use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
	#[serde(rename = "_id")]
	pub id: String,
	pub user_id: String,
	pub weight: f64,
	pub date: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWeightInput {
	pub weight: f64,
	pub date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weight: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// Server-computed view over the last `days` of entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeightTrend {
	#[serde(default)]
	pub entries: Vec<WeightEntry>,
	#[serde(default)]
	pub change: f64,
}
