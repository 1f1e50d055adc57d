//! Dashboard API handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::DashboardStats;

/// GET /api/dashboard - aggregate statistics
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.reports.dashboard()?))
}
