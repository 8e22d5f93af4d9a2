use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Storage handle, opened once at startup and shared by every request.
    pub pool: pocket_ledger_db::DbPool,
    /// Server configuration (auth token, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}
