//! Error types shared by the whole workspace.
//!
//! Every fallible operation returns [`GtResult`]. The HTTP layer relies on
//! the [`IntoResponse`] impl, so handlers can simply propagate errors with
//! `?` and get a correct status code and JSON body.

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type GtResult<T> = std::result::Result<T, Error>;

/// Reason a registration attempt was rejected inside the transaction.
///
/// The protocol aborts with exactly one of these; the `Display` strings are
/// the messages clients see in the 409 response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictReason {
	EventNotFound,
	UserNotFound,
	EventInPast,
	AlreadyRegistered,
	EventFull,
}

impl std::fmt::Display for ConflictReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConflictReason::EventNotFound => write!(f, "Event not found."),
			ConflictReason::UserNotFound => write!(f, "User not found."),
			ConflictReason::EventInPast => write!(f, "Cannot register for a past event."),
			ConflictReason::AlreadyRegistered => {
				write!(f, "User is already registered for this event.")
			}
			ConflictReason::EventFull => write!(f, "Event is full."),
		}
	}
}

#[derive(Debug)]
pub enum Error {
	/// Bad input shape or range (HTTP 400)
	ValidationError(String),
	/// Referenced entity does not exist (HTTP 404)
	NotFound,
	/// Registration protocol abort (HTTP 409)
	Conflict(ConflictReason),
	/// The store reported a deadlock or lock wait timeout. The write did
	/// not happen; the caller may retry (HTTP 409).
	TxConflict,
	/// Unexpected store failure, details are logged server side (HTTP 500)
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::NotFound => write!(f, "Not found."),
			Error::Conflict(reason) => write!(f, "{}", reason),
			Error::TxConflict => write!(f, "Transaction conflict, please retry."),
			Error::DbError => write!(f, "An internal server error occurred."),
			Error::Internal(msg) => write!(f, "Internal error: {}", msg),
			Error::Io(err) => write!(f, "IO error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match &self {
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::Conflict(_) | Error::TxConflict => StatusCode::CONFLICT,
			Error::DbError | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		};
		// Never leak internals to the client
		let msg = match &self {
			Error::Internal(_) | Error::Io(_) => "An internal server error occurred.".to_string(),
			other => other.to_string(),
		};
		(status, Json(serde_json::json!({ "error": msg }))).into_response()
	}
}


// vim: ts=4
