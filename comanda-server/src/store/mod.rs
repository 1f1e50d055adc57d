//! redb-based storage layer for inventory, catalog and orders
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `raw_materials` | `u64` | `RawMaterial` | Material rows (live and soft-deleted) |
//! | `raw_material_names` | `&str` | `u64` | Name uniqueness index |
//! | `products` | `u64` | `Product` | Product rows (live and soft-deleted) |
//! | `product_names` | `&str` | `u64` | Name uniqueness index |
//! | `orders` | `&str` | `Order` | Completed orders keyed by UUID |
//! | `counters` | `&str` | `u64` | Numeric id sequences |
//!
//! Values are JSON-serialized model structs. Name index entries are kept for
//! soft-deleted rows so a deleted name still blocks re-creation.
//!
//! Material and product accessors come in live/`_any` pairs: `get_material`
//! and `list_products` return live rows only, while `get_material_any` and
//! `list_products_any` include soft-deleted rows. The soft-delete filter
//! lives here and nowhere else; services reach for an `_any` accessor only
//! when they mean to (audit reads, delete-twice detection, historical name
//! resolution).
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns the
//! data has reached disk, and a transaction dropped without commit leaves no
//! trace. The order write path relies on this for all-or-nothing stock
//! deduction.

mod materials;
mod orders;
mod products;

use redb::{Database, ReadableTable, TableDefinition, WriteTransaction};
use shared::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Material rows: key = material id, value = JSON-serialized RawMaterial
const MATERIALS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("raw_materials");

/// Material name index: key = name, value = material id
const MATERIAL_NAMES_TABLE: TableDefinition<&str, u64> =
    TableDefinition::new("raw_material_names");

/// Product rows: key = product id, value = JSON-serialized Product
const PRODUCTS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("products");

/// Product name index: key = name, value = product id
const PRODUCT_NAMES_TABLE: TableDefinition<&str, u64> = TableDefinition::new("product_names");

/// Order rows: key = order UUID, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Id sequences: key = counter name, value = last issued id
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const MATERIAL_ID_KEY: &str = "material_id";
const PRODUCT_ID_KEY: &str = "product_id";

/// Failures bubbling out of redb or row (de)serialization
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database: {0}")]
    Database(#[from] redb::DatabaseError),
    #[error("transaction: {0}")]
    Transaction(#[from] redb::TransactionError),
    #[error("table: {0}")]
    Table(#[from] redb::TableError),
    #[error("storage: {0}")]
    Storage(#[from] redb::StorageError),
    #[error("commit: {0}")]
    Commit(#[from] redb::CommitError),
    #[error("row serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::database(err.to_string())
    }
}

/// Restaurant data store backed by redb
#[derive(Clone)]
pub struct Store {
    db: Arc<Database>,
}

impl Store {
    /// Open or create the database at the given path
    ///
    /// Creates all tables up front so read transactions never race table
    /// creation. Counters start at zero; the first issued id is 1.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    fn init_tables(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(MATERIALS_TABLE)?;
            let _ = write_txn.open_table(MATERIAL_NAMES_TABLE)?;
            let _ = write_txn.open_table(PRODUCTS_TABLE)?;
            let _ = write_txn.open_table(PRODUCT_NAMES_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;

            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            if counters.get(MATERIAL_ID_KEY)?.is_none() {
                counters.insert(MATERIAL_ID_KEY, 0u64)?;
            }
            if counters.get(PRODUCT_ID_KEY)?.is_none() {
                counters.insert(PRODUCT_ID_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction
    ///
    /// redb allows a single writer at a time, so every mutation composed on
    /// one transaction commits atomically or rolls back when the transaction
    /// is dropped.
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Commit a write transaction
    pub fn commit(&self, txn: WriteTransaction) -> StorageResult<()> {
        Ok(txn.commit()?)
    }

    /// Increment and return the next id for a counter key
    fn next_id(&self, txn: &WriteTransaction, key: &str) -> StorageResult<u64> {
        let mut table = txn.open_table(COUNTERS_TABLE)?;
        let current = table.get(key)?.map(|guard| guard.value()).unwrap_or(0);
        let next = current + 1;
        table.insert(key, next)?;
        Ok(next)
    }
}
