//! Event persistence operations
//!
//! Plain inserts and projections. The upcoming list and the registrant
//! aggregation are point-in-time reads with no locking.

use sqlx::{PgPool, Row, postgres::PgRow};

use crate::utils::{collect_res, map_db_err};
use gatherly::prelude::*;
use gatherly::types::{CreateEventData, Event, EventView, User};

fn event_from_row(row: &PgRow) -> Result<Event, sqlx::Error> {
	Ok(Event {
		event_id: EventId(row.try_get("id")?),
		title: row.try_get("title")?,
		date: row.try_get("date")?,
		location: row.try_get("location")?,
		capacity: row.try_get("capacity")?,
	})
}

pub(crate) async fn create(db: &PgPool, data: &CreateEventData) -> GtResult<EventId> {
	// Bounds are validated at the HTTP boundary; the narrowing here is a
	// type conversion, not a business rule
	let capacity = i32::try_from(data.capacity)
		.map_err(|_| Error::ValidationError("Capacity out of range.".to_string()))?;

	let (id,): (i64,) = sqlx::query_as(
		"INSERT INTO events (title, date, location, capacity) VALUES ($1, $2, $3, $4) RETURNING id",
	)
	.bind(&*data.title)
	.bind(data.date)
	.bind(&*data.location)
	.bind(capacity)
	.fetch_one(db)
	.await
	.map_err(map_db_err)?;

	Ok(EventId(id))
}

pub(crate) async fn list_upcoming(db: &PgPool) -> GtResult<Vec<Event>> {
	let rows = sqlx::query(
		"SELECT id, title, date, location, capacity FROM events
			WHERE date > now()
			ORDER BY date ASC, location ASC",
	)
	.fetch_all(db)
	.await
	.map_err(map_db_err)?;

	collect_res(rows.iter().map(event_from_row))
}

pub(crate) async fn read_with_registrants(db: &PgPool, event_id: EventId) -> GtResult<EventView> {
	let event = sqlx::query("SELECT id, title, date, location, capacity FROM events WHERE id = $1")
		.bind(event_id.0)
		.fetch_one(db)
		.await
		.map_err(map_db_err)
		.and_then(|row| event_from_row(&row).map_err(map_db_err))?;

	let rows = sqlx::query(
		"SELECT u.id, u.name, u.email FROM event_registrations er
			JOIN users u ON u.id = er.user_id
			WHERE er.event_id = $1
			ORDER BY u.id",
	)
	.bind(event_id.0)
	.fetch_all(db)
	.await
	.map_err(map_db_err)?;

	let registered_users = collect_res(rows.iter().map(|row| {
		Ok(User {
			user_id: UserId(row.try_get("id")?),
			name: row.try_get("name")?,
			email: row.try_get("email")?,
		})
	}))?;

	Ok(EventView { event, registered_users })
}

pub(crate) async fn read_capacity(db: &PgPool, event_id: EventId) -> GtResult<i32> {
	sqlx::query_scalar("SELECT capacity FROM events WHERE id = $1")
		.bind(event_id.0)
		.fetch_one(db)
		.await
		.map_err(map_db_err)
}

// vim: ts=4
