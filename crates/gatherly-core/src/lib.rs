//! Core infrastructure for the Gatherly event-registration service.
//!
//! This crate contains the shared application state used by the server
//! crate and the feature crates. Extracting it into a separate crate keeps
//! the feature crates independent of each other.

pub mod app;
pub mod prelude;

pub use app::{App, AppBuilderOpts, AppState};

// vim: ts=4
