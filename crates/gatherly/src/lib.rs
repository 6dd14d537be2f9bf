//! Gatherly is a small, self-hosted event registration service.
//!
//! # Features
//!
//! - Users and events with capacity limits
//! - Concurrency-safe registration
//!     - row-locking transaction in the store
//!     - capacity can never be oversubscribed, even across instances
//! - Upcoming event listing and per-event statistics
//! - Pluggable storage behind the `StoreAdapter` trait

// Re-export shared types and the adapter trait from gatherly-types
pub use gatherly_types::error;
pub use gatherly_types::store_adapter;
pub use gatherly_types::types;

// Feature crate re-exports
pub use gatherly_event as event;
pub use gatherly_registration as registration;
pub use gatherly_user as user;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
