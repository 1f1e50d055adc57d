//! Order API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Order, OrderCreate};

/// POST /api/orders - place an order (all-or-nothing)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.orders.place(payload)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders - order history, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list()?))
}

/// GET /api/orders/:id - one order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(&id)?))
}
