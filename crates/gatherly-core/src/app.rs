//! App state type

use std::sync::Arc;

use gatherly_types::store_adapter::StoreAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state.
///
/// The coordinator and the read paths are stateless per call; everything
/// authoritative lives behind the store adapter. The adapter handle is
/// injected here once at startup and passed to handlers through axum's
/// `State` extractor.
pub struct AppState {
	pub opts: AppBuilderOpts,
	pub store_adapter: Arc<dyn StoreAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

// vim: ts=4
