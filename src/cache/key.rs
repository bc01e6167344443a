//! The key scheme for cached query results. Every key is a prefix-matchable
//! path of segments; two keys are equal iff their paths are structurally
//! equal, with filter segments comparing by field value.

use std::borrow::Cow;

/// Filter pair identifying a foods-list query. Both fields default to the
/// empty string so that an absent filter and `{search: "", category: ""}`
/// land on the same canonical "all foods" key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FoodFilter {
	pub search: String,
	pub category: String,
}
impl FoodFilter {
	pub fn new(search: Option<&str>, category: Option<&str>) -> Self {
		Self {
			search: search.unwrap_or_default().to_owned(),
			category: category.unwrap_or_default().to_owned(),
		}
	}
}

/// One step of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
	Name(Cow<'static, str>),
	Filter(FoodFilter),
	Days(u32),
}

/// Structured identifier for a cached query result, used for lookup and for
/// targeted invalidation by prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<Segment>);

impl QueryKey {
	/// True when `prefix`'s path is a leading subpath of this key's. Every
	/// key starts with itself, so an exact key doubles as its own prefix.
	pub fn starts_with(&self, prefix: &QueryKey) -> bool {
		self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
	}
}

fn name(value: impl Into<Cow<'static, str>>) -> Segment {
	Segment::Name(value.into())
}

pub fn me() -> QueryKey {
	QueryKey(vec![name("auth"), name("me")])
}

pub fn profile() -> QueryKey {
	QueryKey(vec![name("users"), name("profile")])
}

/// Prefix covering every foods key: the filtered lists and the by-id
/// entries. A food edit can change what any list shows.
pub fn all_foods() -> QueryKey {
	QueryKey(vec![name("foods")])
}

pub fn foods(filter: &FoodFilter) -> QueryKey {
	QueryKey(vec![name("foods"), Segment::Filter(filter.clone())])
}

pub fn food(id: &str) -> QueryKey {
	QueryKey(vec![name("foods"), name("byId"), name(id.to_owned())])
}

/// One entry per exact calendar date; mutations on a log invalidate only
/// that log's date.
pub fn daily(date: &str) -> QueryKey {
	QueryKey(vec![name("logs"), name("daily"), name(date.to_owned())])
}

/// Prefix covering the collection and its derived latest/trend views.
pub fn all_weight() -> QueryKey {
	QueryKey(vec![name("weight")])
}

pub fn weights() -> QueryKey {
	QueryKey(vec![name("weight"), name("all")])
}

pub fn weight_latest() -> QueryKey {
	QueryKey(vec![name("weight"), name("latest")])
}

pub fn weight_trend(days: u32) -> QueryKey {
	QueryKey(vec![name("weight"), name("trend"), Segment::Days(days)])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absent_filter_fields_canonicalize_to_empty_strings() {
		assert_eq!(FoodFilter::new(None, None), FoodFilter::default());
		assert_eq!(
			foods(&FoodFilter::new(None, None)),
			foods(&FoodFilter {
				search: String::new(),
				category: String::new(),
			})
		);
	}

	#[test]
	fn filter_fields_compare_by_value() {
		let a = foods(&FoodFilter::new(Some("a"), None));
		let b = foods(&FoodFilter::new(Some("a"), Some("snacks")));
		assert_ne!(a, b);
		assert_eq!(a, foods(&FoodFilter::new(Some("a"), Some(""))));
	}

	#[test]
	fn foods_prefix_covers_lists_and_by_id_but_not_logs() {
		let prefix = all_foods();
		assert!(foods(&FoodFilter::new(Some("x"), Some("y"))).starts_with(&prefix));
		assert!(food("123").starts_with(&prefix));
		assert!(!daily("2024-01-01").starts_with(&prefix));
	}

	#[test]
	fn daily_keys_are_isolated_per_date() {
		let march_5 = daily("2024-03-05");
		assert!(march_5.starts_with(&march_5));
		assert!(!daily("2024-03-06").starts_with(&march_5));
	}

	#[test]
	fn weight_prefix_covers_all_derived_views() {
		let prefix = all_weight();
		assert!(weights().starts_with(&prefix));
		assert!(weight_latest().starts_with(&prefix));
		assert!(weight_trend(30).starts_with(&prefix));
		assert!(!profile().starts_with(&prefix));
	}

	#[test]
	fn trend_keys_distinguish_day_windows() {
		assert_ne!(weight_trend(7), weight_trend(30));
		assert_eq!(weight_trend(30), weight_trend(30));
	}

	#[test]
	fn longer_keys_are_not_prefixes_of_shorter_ones() {
		assert!(!all_foods().starts_with(&food("123")));
	}
}
