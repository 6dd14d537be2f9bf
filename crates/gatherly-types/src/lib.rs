//! Shared types, adapter traits, and error types for Gatherly.
//!
//! This crate contains the foundational types that are shared between the
//! server crate, the feature crates, and the store adapter implementations.
//! Extracting these into a separate crate allows adapter crates to compile
//! in parallel with the feature crates.

pub mod error;
pub mod prelude;
pub mod store_adapter;
pub mod types;

// vim: ts=4
