//! Shared utilities for the PostgreSQL adapter
//!
//! Error mapping helpers used across all domain modules. Driver errors are
//! logged here and never forwarded verbatim.

use gatherly::prelude::*;

// PostgreSQL SQLSTATE codes the protocol cares about
const DEADLOCK_DETECTED: &str = "40P01";
const LOCK_NOT_AVAILABLE: &str = "55P03";
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Translate a sqlx error into the service error taxonomy.
///
/// Deadlocks and lock wait timeouts become a retryable conflict, surfaced
/// to the caller instead of being retried internally (the write may not be
/// idempotent). A unique violation can only come from the registration
/// pair key and is mapped accordingly as a backstop; the protocol normally
/// catches duplicates before the insert.
pub(crate) fn map_db_err(err: sqlx::Error) -> Error {
	if let sqlx::Error::RowNotFound = err {
		return Error::NotFound;
	}
	if let sqlx::Error::Database(db_err) = &err {
		match db_err.code().as_deref() {
			Some(DEADLOCK_DETECTED | LOCK_NOT_AVAILABLE) => {
				inspect(&err);
				return Error::TxConflict;
			}
			Some(UNIQUE_VIOLATION) => {
				return Error::Conflict(ConflictReason::AlreadyRegistered);
			}
			// The event row is locked before the registration insert, so a
			// foreign key violation can only be the user reference
			Some(FOREIGN_KEY_VIOLATION) => {
				return Error::Conflict(ConflictReason::UserNotFound);
			}
			_ => {}
		}
	}
	inspect(&err);
	Error::DbError
}

/// Collect an iterator of row-mapping results, translating errors
pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> GtResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.map_err(map_db_err)?);
	}
	Ok(items)
}

// vim: ts=4
