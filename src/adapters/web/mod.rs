//! Web server adapter.
//!
//! Axum server exposing the decision pipeline as a JSON endpoint. The host
//! owns snapshot acquisition through [`SnapshotPort`]; the engine stays
//! stateless so requests need no cross-request locking.

mod error;
mod handlers;

pub use error::{status_from_error, WebError};
pub use handlers::*;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::domain::config::SignalConfig;
use crate::ports::snapshot_port::SnapshotPort;

pub struct AppState {
    pub snapshot_port: Arc<dyn SnapshotPort + Send + Sync>,
    pub config: SignalConfig,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/signal", get(handlers::get_signal))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}
