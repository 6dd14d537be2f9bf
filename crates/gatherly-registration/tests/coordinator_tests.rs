//! Registration protocol tests against an in-memory store.
//!
//! The mock models the store's row locking with an async mutex held from
//! `lock_event` until commit or drop. That is enough to observe the serial
//! view the protocol depends on: a concurrent registration attempt blocks
//! on the lock and then sees the first attempt's committed insert.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use gatherly_registration::coordinator;
use gatherly_types::error::{ConflictReason, Error, GtResult};
use gatherly_types::store_adapter::{EventLock, RegistrationTx, StoreAdapter};
use gatherly_types::types::{
	CreateEventData, CreateUserData, Event, EventId, EventView, UserId,
};

#[derive(Debug, Clone, Copy)]
struct EventRec {
	date: DateTime<Utc>,
	capacity: i32,
}

#[derive(Debug, Default)]
struct MemState {
	next_id: i64,
	events: HashMap<i64, EventRec>,
	registrations: HashSet<(i64, i64)>,
}

#[derive(Debug, Default)]
struct MemStore {
	state: Arc<Mutex<MemState>>,
}

impl MemStore {
	async fn add_event(&self, date: DateTime<Utc>, capacity: i32) -> EventId {
		let mut state = self.state.lock().await;
		state.next_id += 1;
		let id = state.next_id;
		state.events.insert(id, EventRec { date, capacity });
		EventId(id)
	}

	async fn registration_count(&self, event_id: EventId) -> i64 {
		let state = self.state.lock().await;
		state.registrations.iter().filter(|(e, _)| *e == event_id.0).count() as i64
	}
}

#[async_trait]
impl StoreAdapter for MemStore {
	async fn create_user(&self, _data: &CreateUserData) -> GtResult<UserId> {
		let mut state = self.state.lock().await;
		state.next_id += 1;
		Ok(UserId(state.next_id))
	}

	async fn create_event(&self, data: &CreateEventData) -> GtResult<EventId> {
		#[allow(clippy::cast_possible_truncation)]
		Ok(self.add_event(data.date, data.capacity as i32).await)
	}

	async fn list_upcoming_events(&self) -> GtResult<Vec<Event>> {
		Ok(vec![])
	}

	async fn read_event_with_registrants(&self, _event_id: EventId) -> GtResult<EventView> {
		Err(Error::NotFound)
	}

	async fn read_event_capacity(&self, event_id: EventId) -> GtResult<i32> {
		let state = self.state.lock().await;
		state.events.get(&event_id.0).map(|e| e.capacity).ok_or(Error::NotFound)
	}

	async fn count_registrations(&self, event_id: EventId) -> GtResult<i64> {
		Ok(self.registration_count(event_id).await)
	}

	async fn delete_registration(&self, event_id: EventId, user_id: UserId) -> GtResult<()> {
		let mut state = self.state.lock().await;
		if state.registrations.remove(&(event_id.0, user_id.0)) {
			Ok(())
		} else {
			Err(Error::NotFound)
		}
	}

	async fn begin_registration(&self) -> GtResult<Box<dyn RegistrationTx>> {
		Ok(Box::new(MemTx { state: self.state.clone(), guard: None, pending: None }))
	}
}

struct MemTx {
	state: Arc<Mutex<MemState>>,
	guard: Option<OwnedMutexGuard<MemState>>,
	pending: Option<(i64, i64)>,
}

impl MemTx {
	fn locked(&mut self) -> GtResult<&mut OwnedMutexGuard<MemState>> {
		self.guard.as_mut().ok_or_else(|| Error::Internal("no lock held".to_string()))
	}
}

#[async_trait]
impl RegistrationTx for MemTx {
	async fn lock_event(&mut self, event_id: EventId) -> GtResult<Option<EventLock>> {
		// Blocks until any other in-flight registration resolves
		let guard = self.state.clone().lock_owned().await;
		let info = guard
			.events
			.get(&event_id.0)
			.map(|e| EventLock { date: e.date, capacity: e.capacity });
		self.guard = Some(guard);
		Ok(info)
	}

	async fn registration_exists(&mut self, event_id: EventId, user_id: UserId) -> GtResult<bool> {
		Ok(self.locked()?.registrations.contains(&(event_id.0, user_id.0)))
	}

	async fn count_registrations(&mut self, event_id: EventId) -> GtResult<i64> {
		Ok(self.locked()?.registrations.iter().filter(|(e, _)| *e == event_id.0).count() as i64)
	}

	async fn insert_registration(&mut self, event_id: EventId, user_id: UserId) -> GtResult<()> {
		self.locked()?;
		// Buffered until commit; dropping the tx discards it (rollback)
		self.pending = Some((event_id.0, user_id.0));
		Ok(())
	}

	async fn commit(mut self: Box<Self>) -> GtResult<()> {
		let mut guard =
			self.guard.take().ok_or_else(|| Error::Internal("no lock held".to_string()))?;
		if let Some(pair) = self.pending.take() {
			guard.registrations.insert(pair);
		}
		Ok(())
	}
}

fn future_date() -> DateTime<Utc> {
	Utc::now() + Duration::hours(2)
}

#[tokio::test]
async fn test_register_success() {
	let store = MemStore::default();
	let event_id = store.add_event(future_date(), 2).await;

	coordinator::register(&store, event_id, UserId(1)).await.expect("should register");

	assert_eq!(store.registration_count(event_id).await, 1);
}

#[tokio::test]
async fn test_register_unknown_event() {
	let store = MemStore::default();

	let err = coordinator::register(&store, EventId(999), UserId(1)).await.unwrap_err();

	assert!(matches!(err, Error::Conflict(ConflictReason::EventNotFound)));
}

#[tokio::test]
async fn test_register_past_event() {
	let store = MemStore::default();
	// Plenty of capacity, but the date is gone
	let event_id = store.add_event(Utc::now() - Duration::hours(1), 1000).await;

	let err = coordinator::register(&store, event_id, UserId(1)).await.unwrap_err();

	assert!(matches!(err, Error::Conflict(ConflictReason::EventInPast)));
	assert_eq!(store.registration_count(event_id).await, 0);
}

#[tokio::test]
async fn test_register_twice() {
	let store = MemStore::default();
	let event_id = store.add_event(future_date(), 10).await;

	coordinator::register(&store, event_id, UserId(1)).await.expect("first should register");
	let err = coordinator::register(&store, event_id, UserId(1)).await.unwrap_err();

	assert!(matches!(err, Error::Conflict(ConflictReason::AlreadyRegistered)));
	assert_eq!(store.registration_count(event_id).await, 1);
}

#[tokio::test]
async fn test_register_full_event() {
	let store = MemStore::default();
	let event_id = store.add_event(future_date(), 1).await;

	coordinator::register(&store, event_id, UserId(1)).await.expect("should take the last slot");
	let err = coordinator::register(&store, event_id, UserId(2)).await.unwrap_err();

	assert!(matches!(err, Error::Conflict(ConflictReason::EventFull)));
	assert_eq!(store.registration_count(event_id).await, 1);
}

#[tokio::test]
async fn test_abort_leaves_no_partial_writes() {
	let store = MemStore::default();
	let event_id = store.add_event(future_date(), 1).await;

	coordinator::register(&store, event_id, UserId(1)).await.expect("should register");
	let _ = coordinator::register(&store, event_id, UserId(2)).await.unwrap_err();

	// The failed attempt's transaction rolled back and released the lock
	assert_eq!(store.registration_count(event_id).await, 1);
	let mut tx = store.begin_registration().await.expect("should begin");
	assert!(tx.lock_event(event_id).await.expect("lock should be free again").is_some());
	assert!(!tx.registration_exists(event_id, UserId(2)).await.expect("should query"));
}

#[tokio::test]
async fn test_concurrent_registrations_capacity_one() {
	let store = Arc::new(MemStore::default());
	let event_id = store.add_event(future_date(), 1).await;

	let a = {
		let store = store.clone();
		tokio::spawn(async move { coordinator::register(store.as_ref(), event_id, UserId(1)).await })
	};
	let b = {
		let store = store.clone();
		tokio::spawn(async move { coordinator::register(store.as_ref(), event_id, UserId(2)).await })
	};

	let (a, b) = (a.await.expect("task"), b.await.expect("task"));

	// Exactly one wins, the other sees the committed insert and aborts
	assert_eq!(u32::from(a.is_ok()) + u32::from(b.is_ok()), 1);
	assert!(matches!(
		a.and(b).unwrap_err(),
		Error::Conflict(ConflictReason::EventFull)
	));
	assert_eq!(store.registration_count(event_id).await, 1);
}

#[tokio::test]
async fn test_register_after_cancel() {
	let store = MemStore::default();
	let event_id = store.add_event(future_date(), 1).await;

	coordinator::register(&store, event_id, UserId(1)).await.expect("should register");
	coordinator::cancel(&store, event_id, UserId(1)).await.expect("should cancel");

	assert_eq!(store.registration_count(event_id).await, 0);

	// The slot is free again, and for the same user too
	coordinator::register(&store, event_id, UserId(1)).await.expect("should re-register");
	assert_eq!(store.registration_count(event_id).await, 1);
}

#[tokio::test]
async fn test_cancel_nonexistent_registration() {
	let store = MemStore::default();
	let event_id = store.add_event(future_date(), 5).await;
	coordinator::register(&store, event_id, UserId(1)).await.expect("should register");

	let err = coordinator::cancel(&store, event_id, UserId(2)).await.unwrap_err();

	assert!(matches!(err, Error::NotFound));
	assert_eq!(store.registration_count(event_id).await, 1);
}

// vim: ts=4
