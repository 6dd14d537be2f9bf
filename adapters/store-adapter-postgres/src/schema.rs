//! Database schema bootstrap
//!
//! Creates the tables idempotently. The composite primary key on
//! `event_registrations` is the durable backstop for the one-registration-
//! per-pair invariant; the capacity invariant is enforced by the
//! registration transaction, not by the schema.

use sqlx::PgPool;

pub(crate) async fn init_db(db: &PgPool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Users //
	///////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
			id bigserial PRIMARY KEY,
			name text NOT NULL,
			email text NOT NULL
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Events //
	////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS events (
			id bigserial PRIMARY KEY,
			title text NOT NULL,
			date timestamptz NOT NULL,
			location text NOT NULL,
			capacity integer NOT NULL
		)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_events_date ON events(date)")
		.execute(&mut *tx)
		.await?;

	// Registrations //
	///////////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS event_registrations (
			user_id bigint NOT NULL REFERENCES users(id),
			event_id bigint NOT NULL REFERENCES events(id),
			created_at timestamptz NOT NULL DEFAULT now(),
			PRIMARY KEY (user_id, event_id)
		)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_event_registrations_event
			ON event_registrations(event_id)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
