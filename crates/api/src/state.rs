use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store handle and config are both behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the on-disk track store.
    pub store: melodex_db::FileStore,
    /// Server configuration (upload limits are read by handlers).
    pub config: Arc<ServerConfig>,
}
