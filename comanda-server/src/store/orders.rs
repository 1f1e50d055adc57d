//! Order rows, written once at checkout and never mutated.

use redb::{ReadableDatabase, ReadableTable, WriteTransaction};
use shared::models::Order;

use super::{ORDERS_TABLE, Store, StorageResult};

impl Store {
    /// Insert an order row (within transaction)
    ///
    /// Shares the transaction with the stock deduction so an order is only
    /// ever persisted together with the stock it consumed.
    pub fn insert_order(&self, txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(order)?;
        table.insert(order.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get an order by UUID
    pub fn get_order(&self, id: &str) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All orders, in storage key order
    ///
    /// Keys are UUIDs, so callers sort by `created_at` themselves.
    pub fn list_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            orders.push(serde_json::from_slice(value.value())?);
        }
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderItem, OrderStatus, OrderType};

    fn order(id: &str, created_at: i64) -> Order {
        Order {
            id: id.to_string(),
            items: vec![OrderItem {
                product_id: 1,
                name: "Margherita".to_string(),
                quantity: 2,
                price_at_sale: 8.5,
            }],
            total_amount: 17.0,
            status: OrderStatus::Completed,
            order_type: OrderType::DineIn,
            payment_method: Some("cash".to_string()),
            created_at,
        }
    }

    #[test]
    fn test_insert_and_get_order() {
        let store = Store::open_in_memory().unwrap();

        let txn = store.begin_write().unwrap();
        store.insert_order(&txn, &order("a1b2", 1000)).unwrap();
        txn.commit().unwrap();

        let stored = store.get_order("a1b2").unwrap().unwrap();
        assert_eq!(stored.total_amount, 17.0);
        assert_eq!(stored.items[0].name, "Margherita");

        assert!(store.get_order("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_orders_returns_all_rows() {
        let store = Store::open_in_memory().unwrap();

        let txn = store.begin_write().unwrap();
        store.insert_order(&txn, &order("a", 1000)).unwrap();
        store.insert_order(&txn, &order("b", 3000)).unwrap();
        store.insert_order(&txn, &order("c", 2000)).unwrap();
        txn.commit().unwrap();

        let orders = store.list_orders().unwrap();
        assert_eq!(orders.len(), 3);
    }

    #[test]
    fn test_uncommitted_order_is_invisible() {
        let store = Store::open_in_memory().unwrap();

        let txn = store.begin_write().unwrap();
        store.insert_order(&txn, &order("pending", 1000)).unwrap();
        drop(txn);

        assert!(store.get_order("pending").unwrap().is_none());
    }
}
