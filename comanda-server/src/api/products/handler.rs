//! Product API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{
    AvailabilityCheck, DeleteResponse, Product, ProductCreate, ProductUpdate, ProductView,
};

/// GET /api/products - live products annotated with sellable units
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductView>>> {
    Ok(Json(state.catalog.list()?))
}

/// GET /api/products/:id - one live product with sellable units
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ProductView>> {
    Ok(Json(state.catalog.get(id)?))
}

/// GET /api/products/:id/availability - detailed availability verdict
pub async fn check_availability(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<AvailabilityCheck>> {
    Ok(Json(state.catalog.check_availability(id)?))
}

/// POST /api/products - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.catalog.create(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /api/products/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    Ok(Json(state.catalog.update(id, payload)?))
}

/// DELETE /api/products/:id - soft delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<DeleteResponse>> {
    Ok(Json(state.catalog.soft_delete(id)?))
}
