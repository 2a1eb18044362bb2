use std::sync::Arc;

use aimterior_notify::Dispatcher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Content database connection pool.
    pub pool: aimterior_db::DbPool,
    /// Server configuration (cache policy is read per request).
    pub config: Arc<ServerConfig>,
    /// Formats and sends form notifications.
    pub dispatcher: Arc<Dispatcher>,
}
