//! Product rows and the name uniqueness index.
//!
//! Same live/`_any` accessor split as the material side: plain accessors
//! exclude soft-deleted rows, `_any` variants include them.

use redb::{ReadableDatabase, ReadableTable, WriteTransaction};
use shared::models::Product;

use super::{PRODUCT_ID_KEY, PRODUCT_NAMES_TABLE, PRODUCTS_TABLE, Store, StorageResult};

impl Store {
    /// Issue the next product id (within transaction)
    pub fn next_product_id(&self, txn: &WriteTransaction) -> StorageResult<u64> {
        self.next_id(txn, PRODUCT_ID_KEY)
    }

    /// Insert a new product row and its name index entry
    pub fn insert_product(&self, txn: &WriteTransaction, product: &Product) -> StorageResult<()> {
        let mut rows = txn.open_table(PRODUCTS_TABLE)?;
        let value = serde_json::to_vec(product)?;
        rows.insert(product.id, value.as_slice())?;

        let mut names = txn.open_table(PRODUCT_NAMES_TABLE)?;
        names.insert(product.name.as_str(), product.id)?;
        Ok(())
    }

    /// Overwrite a product row, moving its name index entry when renamed
    pub fn update_product(&self, txn: &WriteTransaction, product: &Product) -> StorageResult<()> {
        let previous = self.get_product_any_txn(txn, product.id)?;

        let mut rows = txn.open_table(PRODUCTS_TABLE)?;
        let value = serde_json::to_vec(product)?;
        rows.insert(product.id, value.as_slice())?;
        drop(rows);

        if let Some(previous) = previous
            && previous.name != product.name
        {
            let mut names = txn.open_table(PRODUCT_NAMES_TABLE)?;
            names.remove(previous.name.as_str())?;
            names.insert(product.name.as_str(), product.id)?;
        }
        Ok(())
    }

    /// Get a live product row by id
    pub fn get_product(&self, id: u64) -> StorageResult<Option<Product>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;

        match table.get(id)? {
            Some(value) => {
                let product: Product = serde_json::from_slice(value.value())?;
                Ok((!product.is_deleted).then_some(product))
            }
            None => Ok(None),
        }
    }

    /// Get a live product row by id (within transaction)
    pub fn get_product_txn(
        &self,
        txn: &WriteTransaction,
        id: u64,
    ) -> StorageResult<Option<Product>> {
        Ok(self.get_product_any_txn(txn, id)?.filter(|p| !p.is_deleted))
    }

    /// Get a product row by id, soft-deleted rows included (within transaction)
    pub fn get_product_any_txn(
        &self,
        txn: &WriteTransaction,
        id: u64,
    ) -> StorageResult<Option<Product>> {
        let table = txn.open_table(PRODUCTS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All live product rows in ascending id order
    pub fn list_products(&self) -> StorageResult<Vec<Product>> {
        Ok(self
            .list_products_any()?
            .into_iter()
            .filter(|p| !p.is_deleted)
            .collect())
    }

    /// All product rows, soft-deleted rows included
    ///
    /// The dashboard resolves product names for order history through this,
    /// so a deleted product keeps its name in the numbers.
    pub fn list_products_any(&self) -> StorageResult<Vec<Product>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;

        let mut products = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            products.push(serde_json::from_slice(value.value())?);
        }
        Ok(products)
    }

    /// All live product rows (within transaction)
    ///
    /// The material delete cascade scans products inside its own write
    /// transaction so the rows it marks unavailable are the rows it saw.
    pub fn list_products_txn(&self, txn: &WriteTransaction) -> StorageResult<Vec<Product>> {
        let table = txn.open_table(PRODUCTS_TABLE)?;

        let mut products = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let product: Product = serde_json::from_slice(value.value())?;
            if !product.is_deleted {
                products.push(product);
            }
        }
        Ok(products)
    }

    /// Look up the id registered for a product name (within transaction)
    ///
    /// The index covers soft-deleted rows, so a deleted name still resolves.
    pub fn product_id_by_name(
        &self,
        txn: &WriteTransaction,
        name: &str,
    ) -> StorageResult<Option<u64>> {
        let table = txn.open_table(PRODUCT_NAMES_TABLE)?;
        Ok(table.get(name)?.map(|guard| guard.value()))
    }
}
