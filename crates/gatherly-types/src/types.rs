//! Identifier newtypes and entity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database identifier of a user (`users.id`, bigserial)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Database identifier of an event (`events.id`, bigserial)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl std::fmt::Display for EventId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A registered user. Immutable after creation, no deletion path.
#[derive(Clone, Debug, Serialize)]
pub struct User {
	#[serde(rename = "id")]
	pub user_id: UserId,
	pub name: Box<str>,
	pub email: Box<str>,
}

/// An event with a bounded capacity. Immutable after creation.
#[derive(Clone, Debug, Serialize)]
pub struct Event {
	#[serde(rename = "id")]
	pub event_id: EventId,
	pub title: Box<str>,
	pub date: DateTime<Utc>,
	pub location: Box<str>,
	pub capacity: i32,
}

/// Event projection with the aggregated registrant list (point-in-time
/// snapshot, not protected against concurrent registration changes).
#[derive(Clone, Debug, Serialize)]
pub struct EventView {
	#[serde(flatten)]
	pub event: Event,
	pub registered_users: Vec<User>,
}

/// Occupancy statistics derived from capacity and the live registration
/// count. `percentage_used` is rounded to two decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EventStats {
	pub total_registrations: i64,
	pub remaining_capacity: i64,
	pub percentage_used: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserData {
	pub name: Box<str>,
	pub email: Box<str>,
}

/// Event creation input as handed to the store. `capacity` is already
/// validated at the HTTP boundary when this is constructed.
#[derive(Debug)]
pub struct CreateEventData {
	pub title: Box<str>,
	pub date: DateTime<Utc>,
	pub location: Box<str>,
	pub capacity: i64,
}

// vim: ts=4
