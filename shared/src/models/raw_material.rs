//! Raw Material Model

use serde::{Deserialize, Serialize};

/// Raw material entity (inventory ledger row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    pub id: u64,
    /// Unique name (case-sensitive)
    pub name: String,
    /// Free-text unit label (e.g. "kg", "g", "pcs")
    pub unit: String,
    /// Current stock in `unit`, never negative
    pub quantity: f64,
    /// Low-stock alert threshold
    pub min_stock_level: f64,
    pub is_deleted: bool,
    /// Unix millis, set when soft-deleted
    pub deleted_at: Option<i64>,
    /// Acting user who deleted the material
    pub deleted_by: Option<String>,
}

/// Create raw material payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialCreate {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub min_stock_level: Option<f64>,
}

/// Update raw material payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<f64>,
    pub min_stock_level: Option<f64>,
}

/// Result of a material soft delete, reporting the cascade
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDeleteResult {
    /// Number of products flagged unavailable by this deletion
    pub affected_products: usize,
    pub affected_product_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
