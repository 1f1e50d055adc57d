//! Dashboard report types

use serde::{Deserialize, Serialize};

use super::raw_material::RawMaterial;

/// Top-selling product summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    /// Image URL, empty when the product has none
    pub image: String,
    /// Total units sold across all orders
    pub count: u64,
}

/// Per-type order count, with the chart color the UI expects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTypeCount {
    /// Display label ("Dine In", "To Go", "Delivery")
    #[serde(rename = "type")]
    pub order_type: String,
    pub count: u64,
    pub color: String,
}

/// Catalog/ledger size summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStatus {
    pub total_materials: u64,
    pub total_products: u64,
}

/// Aggregate dashboard statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of order totals, in currency unit
    pub total_revenue: f64,
    pub total_orders: u64,
    /// Distinct customers are not tracked here; the order count stands in
    pub total_customers: u64,
    /// Count of live materials at or below their low-stock threshold
    pub low_stock_materials: u64,
    pub low_stock_details: Vec<RawMaterial>,
    /// Top 5 products by units sold
    pub most_ordered: Vec<TopProduct>,
    pub order_type_distribution: Vec<OrderTypeCount>,
    pub inventory_status: InventoryStatus,
}
