pub use gatherly_core::prelude::*;

// vim: ts=4
