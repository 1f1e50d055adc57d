//! Raw material API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{MaterialDeleteResult, RawMaterial, RawMaterialCreate, RawMaterialUpdate};

/// GET /api/raw-materials - all live materials
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RawMaterial>>> {
    Ok(Json(state.inventory.list()?))
}

/// GET /api/raw-materials/:id - one live material
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<RawMaterial>> {
    Ok(Json(state.inventory.get(id)?))
}

/// POST /api/raw-materials - create a material
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RawMaterialCreate>,
) -> AppResult<(StatusCode, Json<RawMaterial>)> {
    let material = state.inventory.create(payload)?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// PATCH /api/raw-materials/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<RawMaterialUpdate>,
) -> AppResult<Json<RawMaterial>> {
    Ok(Json(state.inventory.update(id, payload)?))
}

/// DELETE /api/raw-materials/:id - soft delete with product cascade
///
/// The optional `x-operator` header carries the acting user (verified
/// upstream) into `deleted_by`.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> AppResult<Json<MaterialDeleteResult>> {
    let deleted_by = headers
        .get("x-operator")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Ok(Json(state.inventory.soft_delete(id, deleted_by)?))
}
