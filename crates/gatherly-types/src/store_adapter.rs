//! The store abstraction the service runs against.
//!
//! The store owns all durable state; the process itself holds none. The
//! registration protocol needs cross-statement consistency, so in addition
//! to the one-shot operations the adapter can open a [`RegistrationTx`]:
//! a scoped transaction object that holds an exclusive row lock on the
//! target event until it is committed or dropped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

use crate::error::GtResult;
use crate::types::{CreateEventData, CreateUserData, Event, EventId, EventView, UserId};

/// Snapshot of the event row read under `FOR UPDATE` at the start of a
/// registration transaction.
#[derive(Clone, Copy, Debug)]
pub struct EventLock {
	pub date: DateTime<Utc>,
	pub capacity: i32,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Users
	async fn create_user(&self, data: &CreateUserData) -> GtResult<UserId>;

	/// # Events
	async fn create_event(&self, data: &CreateEventData) -> GtResult<EventId>;
	/// Events with a date in the future, ordered by date, then location
	async fn list_upcoming_events(&self) -> GtResult<Vec<Event>>;
	/// Event row joined with its registrant list, `NotFound` if absent
	async fn read_event_with_registrants(&self, event_id: EventId) -> GtResult<EventView>;
	async fn read_event_capacity(&self, event_id: EventId) -> GtResult<i32>;

	/// # Registrations
	async fn count_registrations(&self, event_id: EventId) -> GtResult<i64>;
	/// Deletes the registration row for the pair, `NotFound` if no such
	/// row existed. Needs no locking: it only removes capacity pressure.
	async fn delete_registration(&self, event_id: EventId, user_id: UserId) -> GtResult<()>;
	/// Opens the transaction the registration protocol runs in
	async fn begin_registration(&self) -> GtResult<Box<dyn RegistrationTx>>;
}

/// One registration transaction.
///
/// All reads and the final insert observe a serial view of the event: the
/// row lock taken by [`lock_event`](Self::lock_event) blocks concurrent
/// registration attempts for the same event until this transaction
/// resolves. Dropping the object without calling `commit` rolls everything
/// back, so an early return on any protocol abort leaves no partial writes.
#[async_trait]
pub trait RegistrationTx: Send {
	/// Reads the event's date and capacity, acquiring an exclusive row
	/// lock. `None` if the event does not exist.
	async fn lock_event(&mut self, event_id: EventId) -> GtResult<Option<EventLock>>;
	async fn registration_exists(&mut self, event_id: EventId, user_id: UserId) -> GtResult<bool>;
	async fn count_registrations(&mut self, event_id: EventId) -> GtResult<i64>;
	async fn insert_registration(&mut self, event_id: EventId, user_id: UserId) -> GtResult<()>;
	async fn commit(self: Box<Self>) -> GtResult<()>;
}

// vim: ts=4
