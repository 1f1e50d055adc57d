//! Order placement and history
//!
//! The coordinator of the system: one write transaction covers product
//! lookup, stock verification, stock deduction, and order persistence.
//! Dropping the transaction on any failure is the rollback, so a rejected
//! order leaves no trace. Committed orders are immutable.

pub mod money;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::{Order, OrderCreate, OrderItem, OrderStatus};
use shared::{AppError, AppResult, ErrorCode};

use crate::catalog::CatalogService;
use crate::inventory::InventoryService;
use crate::store::Store;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_optional_text};

/// Order service
#[derive(Clone)]
pub struct OrderService {
    store: Store,
    catalog: CatalogService,
    inventory: InventoryService,
}

impl OrderService {
    pub fn new(store: Store, catalog: CatalogService, inventory: InventoryService) -> Self {
        Self {
            store,
            catalog,
            inventory,
        }
    }

    /// Place an order, all-or-nothing
    ///
    /// Requirements are consolidated per material across every cart line
    /// before any check runs, so two lines of the same product jointly
    /// overdrawing a material fail even when each line alone would pass.
    /// Prices and names are snapshotted onto the order lines at this moment.
    pub fn place(&self, input: OrderCreate) -> AppResult<Order> {
        if input.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        for line in &input.items {
            money::validate_quantity(line.quantity, "quantity")?;
        }
        validate_optional_text(&input.payment_method, "paymentMethod", MAX_SHORT_TEXT_LEN)?;

        let txn = self.store.begin_write()?;

        let mut requirements: BTreeMap<u64, f64> = BTreeMap::new();
        let mut items = Vec::with_capacity(input.items.len());
        let mut total = Decimal::ZERO;
        for line in &input.items {
            let product = self.catalog.load_for_sale(&txn, line.product_id)?;
            for entry in &product.recipe {
                *requirements.entry(entry.material_id).or_insert(0.0) +=
                    entry.quantity_per_unit * f64::from(line.quantity);
            }
            total += money::to_decimal(product.price) * Decimal::from(line.quantity);
            items.push(OrderItem {
                product_id: product.id,
                name: product.name,
                quantity: line.quantity,
                price_at_sale: product.price,
            });
        }

        self.inventory.check_and_reserve(&txn, &requirements)?;

        let order = Order {
            id: uuid::Uuid::new_v4().to_string(),
            items,
            total_amount: money::to_f64(total),
            status: OrderStatus::Completed,
            order_type: input.order_type.unwrap_or_default(),
            payment_method: input.payment_method,
            created_at: shared::util::now_millis(),
        };
        self.store.insert_order(&txn, &order)?;
        self.store.commit(txn)?;

        tracing::info!(
            order_id = %order.id,
            total = order.total_amount,
            items = order.items.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// Order history, newest first
    pub fn list(&self) -> AppResult<Vec<Order>> {
        let mut orders = self.store.list_orders()?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Look up one order
    pub fn get(&self, id: &str) -> AppResult<Order> {
        match self.store.get_order(id)? {
            Some(order) => Ok(order),
            None => Err(AppError::order_not_found(id)),
        }
    }
}
