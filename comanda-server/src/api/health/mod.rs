//! Health check route
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /health | GET | Liveness probe |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Liveness response
#[derive(Serialize)]
pub struct HealthResponse {
    /// "ok" while the process serves requests
    status: &'static str,
    version: &'static str,
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
