//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`raw_materials`] - inventory CRUD and soft deletion
//! - [`products`] - catalog CRUD and availability checks
//! - [`orders`] - order placement and history
//! - [`dashboard`] - aggregate statistics
//!
//! Each resource exposes a `router()` merged here; success responses are the
//! plain JSON payload, errors render through the shared envelope.

pub mod dashboard;
pub mod health;
pub mod orders;
pub mod products;
pub mod raw_materials;

use axum::extract::Request;
use axum::response::Response;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP request log middleware, one line per request with latency
async fn log_request(request: Request, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        "{} {} {} ({}ms)",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );
    response
}

/// Build the router without state
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(raw_materials::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(dashboard::router())
}

/// Build the complete application: routes, state, middleware
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}
