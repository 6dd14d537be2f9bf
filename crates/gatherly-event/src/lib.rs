//! Event management: creation, upcoming-events listing, event lookup with
//! its registrant list, and occupancy statistics.
//!
//! These are plain reads and inserts; the capacity-safe registration
//! protocol lives in the `gatherly-registration` crate.

pub mod handler;
pub mod stats;

mod prelude;

// vim: ts=4
