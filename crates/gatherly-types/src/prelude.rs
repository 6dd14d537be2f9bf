pub use crate::error::{ConflictReason, Error, GtResult};
pub use crate::types::{EventId, UserId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
