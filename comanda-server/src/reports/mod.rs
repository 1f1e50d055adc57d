//! Read-only reporting
//!
//! Aggregates the dashboard statistics from plain table scans. Nothing here
//! writes; stale-by-a-moment numbers are acceptable for a status screen.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::AppResult;
use shared::models::{
    DashboardStats, InventoryStatus, OrderType, OrderTypeCount, RawMaterial, TopProduct,
};

use crate::orders::money;
use crate::store::Store;

/// Chart colors the dashboard UI expects, in [`OrderType::ALL`] order
const ORDER_TYPE_COLORS: [&str; 3] = ["#FF7CA3", "#FFB572", "#65B0F6"];

/// How many products the best-seller list shows
const MOST_ORDERED_LIMIT: usize = 5;

/// Dashboard service
#[derive(Clone)]
pub struct ReportService {
    store: Store,
}

impl ReportService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Aggregate statistics for the dashboard screen
    ///
    /// Revenue and the best-seller list cover every order ever placed, and
    /// product names resolve through deleted rows too so history stays
    /// readable. Stock alerts and the inventory summary count live rows
    /// only.
    pub fn dashboard(&self) -> AppResult<DashboardStats> {
        let orders = self.store.list_orders()?;
        let materials = self.store.list_materials()?;
        // Deleted products stay in here so order history keeps its names.
        let products = self.store.list_products_any()?;

        let mut revenue = Decimal::ZERO;
        for order in &orders {
            revenue += money::to_decimal(order.total_amount);
        }
        let total_orders = orders.len() as u64;

        let low_stock_details: Vec<RawMaterial> = materials
            .iter()
            .filter(|m| m.quantity <= m.min_stock_level)
            .cloned()
            .collect();

        // Units sold per product id, then resolved to names. Ties sort by
        // ascending id because the map iterates in id order.
        let mut sold: BTreeMap<u64, u64> = BTreeMap::new();
        for order in &orders {
            for item in &order.items {
                *sold.entry(item.product_id).or_insert(0) += u64::from(item.quantity);
            }
        }
        let mut most_ordered: Vec<TopProduct> = sold
            .iter()
            .map(|(&product_id, &count)| {
                let product = products.iter().find(|p| p.id == product_id);
                TopProduct {
                    name: product
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    image: product.and_then(|p| p.image.clone()).unwrap_or_default(),
                    count,
                }
            })
            .collect();
        most_ordered.sort_by(|a, b| b.count.cmp(&a.count));
        most_ordered.truncate(MOST_ORDERED_LIMIT);

        let order_type_distribution = OrderType::ALL
            .iter()
            .zip(ORDER_TYPE_COLORS)
            .map(|(&order_type, color)| OrderTypeCount {
                order_type: order_type.label().to_string(),
                count: orders.iter().filter(|o| o.order_type == order_type).count() as u64,
                color: color.to_string(),
            })
            .collect();

        let live_materials = materials.len() as u64;
        let live_products = products.iter().filter(|p| !p.is_deleted).count() as u64;

        Ok(DashboardStats {
            total_revenue: money::to_f64(revenue),
            total_orders,
            // No user store here; the order count stands in.
            total_customers: total_orders,
            low_stock_materials: low_stock_details.len() as u64,
            low_stock_details,
            most_ordered,
            order_type_distribution,
            inventory_status: InventoryStatus {
                total_materials: live_materials,
                total_products: live_products,
            },
        })
    }
}
