use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::stats;
use gatherly_types::types::{CreateEventData, Event, EventStats, EventView};

/// Event creation input. `capacity` arrives as a raw JSON number so a
/// fractional or out-of-range value gets the same 400 from the validator
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
	pub title: Box<str>,
	pub date: DateTime<Utc>,
	pub location: Box<str>,
	pub capacity: serde_json::Number,
}

/// Capacity must be an integer in 1..=1000. Integer-valued floats count
/// as integers.
pub fn validate_capacity(capacity: &serde_json::Number) -> GtResult<i64> {
	#[allow(clippy::cast_possible_truncation)]
	let n = capacity
		.as_i64()
		.or_else(|| capacity.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64));
	match n {
		Some(n) if (1..=1000).contains(&n) => Ok(n),
		_ => Err(Error::ValidationError(
			"Capacity must be a positive integer up to 1000.".to_string(),
		)),
	}
}

#[derive(Serialize)]
pub struct CreatedEvent {
	#[serde(rename = "eventId")]
	pub event_id: EventId,
}

pub async fn post_event(
	State(app): State<App>,
	Json(data): Json<CreateEventRequest>,
) -> GtResult<(StatusCode, Json<CreatedEvent>)> {
	let capacity = validate_capacity(&data.capacity)?;
	let data = CreateEventData {
		title: data.title,
		date: data.date,
		location: data.location,
		capacity,
	};

	let event_id = app.store_adapter.create_event(&data).await?;
	info!("Created event {} \"{}\" (capacity {})", event_id, data.title, data.capacity);

	Ok((StatusCode::CREATED, Json(CreatedEvent { event_id })))
}

pub async fn list_upcoming_events(State(app): State<App>) -> GtResult<Json<Vec<Event>>> {
	let events = app.store_adapter.list_upcoming_events().await?;
	Ok(Json(events))
}

pub async fn get_event(
	State(app): State<App>,
	Path(event_id): Path<i64>,
) -> GtResult<Json<EventView>> {
	let view = app.store_adapter.read_event_with_registrants(EventId(event_id)).await?;
	Ok(Json(view))
}

pub async fn get_event_stats(
	State(app): State<App>,
	Path(event_id): Path<i64>,
) -> GtResult<Json<EventStats>> {
	let event_id = EventId(event_id);

	// Independent reads, like the rest of the lookup path this is a
	// point-in-time snapshot
	let (capacity, total) = futures::join!(
		app.store_adapter.read_event_capacity(event_id),
		app.store_adapter.count_registrations(event_id),
	);

	Ok(Json(stats::compute(capacity?, total?)))
}


// vim: ts=4
