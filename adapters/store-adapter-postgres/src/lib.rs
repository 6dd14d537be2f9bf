//! PostgreSQL-backed store adapter for Gatherly.
//!
//! Implements the `StoreAdapter` trait on a sqlx connection pool. The
//! schema is created idempotently on startup. The registration transaction
//! uses `SELECT ... FOR UPDATE` on the event row, so the capacity check
//! and the insert execute under an exclusive lock that is held until
//! commit or rollback. Correctness holds across multiple process instances
//! sharing the database.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use gatherly::prelude::*;
use gatherly::store_adapter::{RegistrationTx, StoreAdapter};
use gatherly::types::{CreateEventData, CreateUserData, Event, EventView};

mod event;
mod registration;
mod schema;
mod user;
mod utils;

#[derive(Debug)]
pub struct StoreAdapterPostgres {
	db: PgPool,
}

impl StoreAdapterPostgres {
	pub async fn new(url: &str) -> GtResult<Self> {
		let db = PgPoolOptions::new()
			.max_connections(5)
			.connect(url)
			.await
			.inspect_err(|err| warn!("DB connect: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB init: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterPostgres {
	// User management
	//*****************
	async fn create_user(&self, data: &CreateUserData) -> GtResult<UserId> {
		user::create(&self.db, data).await
	}

	// Event management
	//******************
	async fn create_event(&self, data: &CreateEventData) -> GtResult<EventId> {
		event::create(&self.db, data).await
	}

	async fn list_upcoming_events(&self) -> GtResult<Vec<Event>> {
		event::list_upcoming(&self.db).await
	}

	async fn read_event_with_registrants(&self, event_id: EventId) -> GtResult<EventView> {
		event::read_with_registrants(&self.db, event_id).await
	}

	async fn read_event_capacity(&self, event_id: EventId) -> GtResult<i32> {
		event::read_capacity(&self.db, event_id).await
	}

	// Registration management
	//*************************
	async fn count_registrations(&self, event_id: EventId) -> GtResult<i64> {
		registration::count(&self.db, event_id).await
	}

	async fn delete_registration(&self, event_id: EventId, user_id: UserId) -> GtResult<()> {
		registration::delete(&self.db, event_id, user_id).await
	}

	async fn begin_registration(&self) -> GtResult<Box<dyn RegistrationTx>> {
		Ok(Box::new(registration::RegistrationTxPostgres::begin(&self.db).await?))
	}
}

// vim: ts=4
