pub use crate::app::{App, AppState};
pub use gatherly_types::error::{ConflictReason, Error, GtResult};
pub use gatherly_types::types::{EventId, UserId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
