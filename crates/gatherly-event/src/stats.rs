//! Occupancy statistics derivation

use gatherly_types::types::EventStats;

/// Derive occupancy stats from an event's capacity and its live
/// registration count. Percentage is rounded to two decimal places;
/// zero capacity yields 0% (capacity validation makes that unreachable
/// through the API, but the math stays total).
pub fn compute(capacity: i32, total_registrations: i64) -> EventStats {
	let percentage_used = if capacity > 0 {
		#[allow(clippy::cast_precision_loss)]
		let raw = total_registrations as f64 / f64::from(capacity) * 100.0;
		(raw * 100.0).round() / 100.0
	} else {
		0.0
	};

	EventStats {
		total_registrations,
		remaining_capacity: i64::from(capacity) - total_registrations,
		percentage_used,
	}
}


// vim: ts=4
