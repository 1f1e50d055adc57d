//! Order Model

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Completed,
    Cancelled,
}

/// Order fulfilment type
///
/// Serialized with the display spelling ("Dine In") because clients send and
/// receive these labels verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    #[default]
    #[serde(rename = "Dine In")]
    DineIn,
    #[serde(rename = "To Go")]
    ToGo,
    Delivery,
}

impl OrderType {
    /// Display label used on receipts and dashboard charts
    pub fn label(&self) -> &'static str {
        match self {
            Self::DineIn => "Dine In",
            Self::ToGo => "To Go",
            Self::Delivery => "Delivery",
        }
    }

    /// All variants, in display order
    pub const ALL: [OrderType; 3] = [Self::DineIn, Self::ToGo, Self::Delivery];
}

/// Order line (embedded value object, snapshotted at placement)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product reference
    #[serde(rename = "product")]
    pub product_id: u64,
    /// Product name at placement time
    pub name: String,
    pub quantity: u32,
    /// Unit price captured when the order was placed; authoritative even if
    /// the product's price changes later
    #[serde(rename = "priceAtTimeOfSale")]
    pub price_at_sale: f64,
}

/// Order entity (append-only, immutable once committed)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit, computed at creation and never
    /// recomputed
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Free-text payment label; no gateway integration
    pub payment_method: Option<String>,
    /// Unix millis
    pub created_at: i64,
}

/// One requested cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    #[serde(rename = "product")]
    pub product_id: u64,
    pub quantity: u32,
}

/// Place order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Vec<OrderItemInput>,
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    pub payment_method: Option<String>,
}
