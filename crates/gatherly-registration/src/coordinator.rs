//! Registration Coordinator
//!
//! Executes the registration and cancellation protocol against the store.
//! The coordinator is stateless per call: it caches nothing between
//! requests, and every cross-step consistency guarantee is delegated to
//! the store's transaction and row locking.

use chrono::Utc;

use crate::prelude::*;
use gatherly_types::store_adapter::StoreAdapter;

/// Register `user_id` for `event_id`.
///
/// Runs inside a single store transaction. The event row lock acquired by
/// `lock_event` is held until commit/rollback, so two concurrent calls for
/// the same event observe a strictly serial view of "registration count
/// vs. capacity": the second caller blocks on the lock and, once it
/// proceeds, sees the first caller's committed insert. Calls for different
/// events never block one another.
///
/// Every early return drops the transaction object, which rolls the
/// transaction back; no partial writes are ever observable.
pub async fn register(
	store: &dyn StoreAdapter,
	event_id: EventId,
	user_id: UserId,
) -> GtResult<()> {
	let mut tx = store.begin_registration().await?;

	let Some(event) = tx.lock_event(event_id).await? else {
		return Err(Error::Conflict(ConflictReason::EventNotFound));
	};
	if event.date <= Utc::now() {
		return Err(Error::Conflict(ConflictReason::EventInPast));
	}
	if tx.registration_exists(event_id, user_id).await? {
		return Err(Error::Conflict(ConflictReason::AlreadyRegistered));
	}
	if tx.count_registrations(event_id).await? >= i64::from(event.capacity) {
		return Err(Error::Conflict(ConflictReason::EventFull));
	}

	tx.insert_registration(event_id, user_id).await?;
	tx.commit().await?;

	debug!("Registered user {} for event {}", user_id, event_id);
	Ok(())
}

/// Cancel the registration of `user_id` for `event_id`.
///
/// A single delete; it only removes capacity pressure, so it needs no
/// locking beyond the statement's own atomicity. `NotFound` if no such
/// registration existed. Re-registering afterwards is permitted.
pub async fn cancel(store: &dyn StoreAdapter, event_id: EventId, user_id: UserId) -> GtResult<()> {
	store.delete_registration(event_id, user_id).await?;

	debug!("Cancelled registration of user {} for event {}", user_id, event_id);
	Ok(())
}

// vim: ts=4
