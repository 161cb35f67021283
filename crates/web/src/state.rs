use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The pool is constructed once at startup and injected here; nothing in
/// the codebase holds a global database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: larder_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
