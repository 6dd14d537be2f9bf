//! Registration persistence operations
//!
//! The pool-level functions cover reads and cancellation. The interesting
//! part is `RegistrationTxPostgres`: it wraps a sqlx transaction and locks
//! the event row with `SELECT ... FOR UPDATE`, so every check and the final
//! insert happen under the same exclusive lock. Dropping the value without
//! calling `commit` rolls the transaction back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::utils::map_db_err;
use gatherly::prelude::*;
use gatherly::store_adapter::{EventLock, RegistrationTx};

pub(crate) async fn count(db: &PgPool, event_id: EventId) -> GtResult<i64> {
	sqlx::query_scalar("SELECT COUNT(*) FROM event_registrations WHERE event_id = $1")
		.bind(event_id.0)
		.fetch_one(db)
		.await
		.map_err(map_db_err)
}

pub(crate) async fn delete(db: &PgPool, event_id: EventId, user_id: UserId) -> GtResult<()> {
	let res = sqlx::query("DELETE FROM event_registrations WHERE event_id = $1 AND user_id = $2")
		.bind(event_id.0)
		.bind(user_id.0)
		.execute(db)
		.await
		.map_err(map_db_err)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) struct RegistrationTxPostgres {
	tx: Transaction<'static, Postgres>,
}

impl RegistrationTxPostgres {
	pub(crate) async fn begin(db: &PgPool) -> GtResult<Self> {
		let tx = db.begin().await.map_err(map_db_err)?;
		Ok(Self { tx })
	}
}

#[async_trait]
impl RegistrationTx for RegistrationTxPostgres {
	async fn lock_event(&mut self, event_id: EventId) -> GtResult<Option<EventLock>> {
		let row = sqlx::query("SELECT date, capacity FROM events WHERE id = $1 FOR UPDATE")
			.bind(event_id.0)
			.fetch_optional(&mut *self.tx)
			.await
			.map_err(map_db_err)?;

		match row {
			Some(row) => {
				let date: DateTime<Utc> = row.try_get("date").map_err(map_db_err)?;
				let capacity: i32 = row.try_get("capacity").map_err(map_db_err)?;
				Ok(Some(EventLock { date, capacity }))
			}
			None => Ok(None),
		}
	}

	async fn registration_exists(&mut self, event_id: EventId, user_id: UserId) -> GtResult<bool> {
		sqlx::query_scalar(
			"SELECT EXISTS (
				SELECT 1 FROM event_registrations WHERE event_id = $1 AND user_id = $2
			)",
		)
		.bind(event_id.0)
		.bind(user_id.0)
		.fetch_one(&mut *self.tx)
		.await
		.map_err(map_db_err)
	}

	async fn count_registrations(&mut self, event_id: EventId) -> GtResult<i64> {
		sqlx::query_scalar("SELECT COUNT(*) FROM event_registrations WHERE event_id = $1")
			.bind(event_id.0)
			.fetch_one(&mut *self.tx)
			.await
			.map_err(map_db_err)
	}

	async fn insert_registration(&mut self, event_id: EventId, user_id: UserId) -> GtResult<()> {
		sqlx::query("INSERT INTO event_registrations (event_id, user_id) VALUES ($1, $2)")
			.bind(event_id.0)
			.bind(user_id.0)
			.execute(&mut *self.tx)
			.await
			.map_err(map_db_err)?;
		Ok(())
	}

	async fn commit(self: Box<Self>) -> GtResult<()> {
		self.tx.commit().await.map_err(map_db_err)
	}
}

// vim: ts=4
