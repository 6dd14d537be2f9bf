//! The capacity-safe registration protocol and its HTTP handlers.
//!
//! This is the one part of the service with real concurrency content: the
//! coordinator runs a read-check-write sequence inside a single store
//! transaction, serialized per event by an exclusive row lock, so an event
//! never accepts more registrants than its capacity and no user registers
//! twice.

pub mod coordinator;
pub mod handler;

mod prelude;

// vim: ts=4
