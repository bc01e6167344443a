//! Stateless arithmetic behind the on-screen summaries. Everything here is
//! display math; the server owns the authoritative totals.

/// Rate locked in from a log's original totals. Yields NaN when servings is
/// zero; callers render that as a dash rather than crashing.
pub fn per_serving_rate(total: f64, servings: f64) -> f64 {
	total / servings
}

/// Projected total for a pending servings edit, from a locked per-serving
/// rate. Never re-derived from the live food record.
pub fn scaled_total(rate: f64, servings: f64) -> f64 {
	(rate * servings).round()
}

/// Calories still available against the daily goal, clamped at zero.
pub fn calories_remaining(goal: f64, consumed: f64) -> f64 {
	(goal - consumed).max(0.0)
}

/// Fill fraction for a progress indicator, as a percentage capped at 100.
/// A missing or zero goal reads as no progress, not a division by zero.
pub fn progress_percentage(current: f64, goal: f64) -> f64 {
	if goal > 0.0 {
		(current / goal * 100.0).min(100.0)
	} else {
		0.0
	}
}

/// Servings expressed in the food's serving unit.
pub fn servings_to_units(servings: f64, serving_size: f64) -> f64 {
	servings * serving_size
}

/// Inverse of [`servings_to_units`].
pub fn units_to_servings(units: f64, serving_size: f64) -> f64 {
	units / serving_size
}

/// Signed change between two chronologically adjacent weight entries.
pub fn weight_delta(latest: f64, previous: f64) -> f64 {
	latest - previous
}

/// Human label for a signed weight delta.
pub fn weight_delta_label(delta: f64) -> &'static str {
	if delta > 0.0 {
		"gain"
	} else if delta < 0.0 {
		"loss"
	} else {
		"no change"
	}
}

/// Delta magnitude rounded to one decimal, the way the history list shows it.
pub fn weight_delta_magnitude(delta: f64) -> f64 {
	(delta.abs() * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scaling_is_linear_in_servings() {
		// round(food.calories * servings) for any positive servings
		let rate = per_serving_rate(95.0, 1.0);
		assert_eq!(scaled_total(rate, 2.0), 190.0);
		assert_eq!(scaled_total(rate, 0.5), 48.0);
	}

	#[test]
	fn rate_is_locked_to_original_totals() {
		// A 2-serving log of a 200 kcal food stores 400 kcal; the rate the
		// edit modal uses comes from the stored totals, not the food record.
		let rate = per_serving_rate(400.0, 2.0);
		assert_eq!(rate, 200.0);
		// Rescaling to 3 servings multiplies the original rate.
		assert_eq!(scaled_total(rate, 3.0), 600.0);
	}

	#[test]
	fn zero_servings_yields_nan_not_a_panic() {
		assert!(per_serving_rate(400.0, 0.0).is_nan());
	}

	#[test]
	fn servings_and_units_round_trip() {
		let servings = 1.75;
		let serving_size = 30.0;
		let back = units_to_servings(servings_to_units(servings, serving_size), serving_size);
		assert!((back - servings).abs() < 1e-9);
	}

	#[test]
	fn calories_remaining_clamps_at_zero() {
		assert_eq!(calories_remaining(2000.0, 2500.0), 0.0);
		assert_eq!(calories_remaining(2000.0, 1500.0), 500.0);
	}

	#[test]
	fn progress_percentage_guards_zero_goal() {
		assert_eq!(progress_percentage(50.0, 0.0), 0.0);
		assert_eq!(progress_percentage(50.0, 200.0), 25.0);
		assert_eq!(progress_percentage(300.0, 200.0), 100.0);
	}

	#[test]
	fn weight_delta_sign_and_magnitude() {
		let delta = weight_delta(81.2, 82.57);
		assert_eq!(weight_delta_label(delta), "loss");
		assert_eq!(weight_delta_magnitude(delta), 1.4);
		assert_eq!(weight_delta_label(weight_delta(83.0, 82.0)), "gain");
		assert_eq!(weight_delta_label(0.0), "no change");
	}
}
