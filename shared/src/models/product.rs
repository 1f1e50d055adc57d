//! Product Model

use serde::{Deserialize, Serialize};

/// One recipe entry: how much of a material one unit of the product consumes
///
/// Wire names are `material` and `quantity`; the Rust names spell out what
/// the numbers mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Raw material reference
    #[serde(rename = "material")]
    pub material_id: u64,
    /// Amount consumed per product unit, in the material's own unit
    #[serde(rename = "quantity")]
    pub quantity_per_unit: f64,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    /// Unique name
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    /// Free-text category used for UI filtering
    pub category: String,
    /// Image URL (produced by the external image store)
    pub image: Option<String>,
    pub recipe: Vec<RecipeItem>,
    /// Forced false when an ingredient is deleted
    pub is_available: bool,
    pub unavailable_reason: Option<String>,
    pub is_deleted: bool,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    /// Defaults to "Hot Dishes"
    pub category: Option<String>,
    pub image: Option<String>,
    pub recipe: Option<Vec<RecipeItem>>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub recipe: Option<Vec<RecipeItem>>,
}

/// Product as served by the catalog API: the entity plus its computed
/// availability (never stored, recomputed per read)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    /// Whole units makeable right now, limited by the scarcest ingredient
    pub available_quantity: u32,
}

/// Detailed availability check result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCheck {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_materials: Option<Vec<String>>,
}

impl AvailabilityCheck {
    /// Negative verdict with a reason
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            reason: Some(reason.into()),
            max_quantity: None,
            missing_materials: None,
        }
    }
}

/// Simple acknowledgement for destructive operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
