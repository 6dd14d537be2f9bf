//! User management handlers

pub mod handler;

mod prelude;

// vim: ts=4
