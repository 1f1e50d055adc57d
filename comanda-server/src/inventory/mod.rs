//! Inventory ledger
//!
//! Owns raw material stock: CRUD, soft deletion with its product cascade,
//! and the reserve-and-deduct step of order placement. Materials are never
//! hard-deleted; a deleted row keeps its name registered so the name cannot
//! be reused, and stays addressable for audit.

use std::collections::BTreeMap;

use redb::WriteTransaction;
use shared::models::{MaterialDeleteResult, RawMaterial, RawMaterialCreate, RawMaterialUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::catalog::CatalogService;
use crate::orders::money;
use crate::store::Store;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// Domain event raised when a material is soft-deleted
///
/// Consumed synchronously by the catalog within the same write transaction,
/// so dependent products never claim availability they no longer have.
#[derive(Debug, Clone)]
pub struct MaterialDeleted {
    pub material_id: u64,
    pub material_name: String,
}

/// Raw material service
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
    catalog: CatalogService,
}

impl InventoryService {
    pub fn new(store: Store, catalog: CatalogService) -> Self {
        Self { store, catalog }
    }

    /// All live materials, ascending id order
    pub fn list(&self) -> AppResult<Vec<RawMaterial>> {
        Ok(self.store.list_materials()?)
    }

    /// Look up a live material
    pub fn get(&self, id: u64) -> AppResult<RawMaterial> {
        self.store
            .get_material(id)?
            .ok_or_else(|| AppError::material_not_found(id))
    }

    /// Create a material with a unique name
    pub fn create(&self, input: RawMaterialCreate) -> AppResult<RawMaterial> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&input.unit, "unit", MAX_SHORT_TEXT_LEN)?;
        validate_stock(input.quantity, "quantity")?;
        let min_stock_level = input.min_stock_level.unwrap_or(0.0);
        validate_stock(min_stock_level, "minStockLevel")?;

        let txn = self.store.begin_write()?;
        if self.store.material_id_by_name(&txn, &input.name)?.is_some() {
            return Err(AppError::new(ErrorCode::MaterialNameExists));
        }

        let id = self.store.next_material_id(&txn)?;
        let material = RawMaterial {
            id,
            name: input.name,
            unit: input.unit,
            quantity: input.quantity,
            min_stock_level,
            is_deleted: false,
            deleted_at: None,
            deleted_by: None,
        };
        self.store.insert_material(&txn, &material)?;
        self.store.commit(txn)?;

        tracing::info!(material_id = id, name = %material.name, "Raw material created");
        Ok(material)
    }

    /// Apply a partial update to a live material
    pub fn update(&self, id: u64, input: RawMaterialUpdate) -> AppResult<RawMaterial> {
        if let Some(ref name) = input.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(ref unit) = input.unit {
            validate_required_text(unit, "unit", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(quantity) = input.quantity {
            validate_stock(quantity, "quantity")?;
        }
        if let Some(min) = input.min_stock_level {
            validate_stock(min, "minStockLevel")?;
        }

        let txn = self.store.begin_write()?;
        let mut material = match self.store.get_material_txn(&txn, id)? {
            Some(material) => material,
            None => return Err(AppError::material_not_found(id)),
        };

        if let Some(name) = input.name
            && name != material.name
        {
            if self.store.material_id_by_name(&txn, &name)?.is_some() {
                return Err(AppError::new(ErrorCode::MaterialNameExists));
            }
            material.name = name;
        }
        if let Some(unit) = input.unit {
            material.unit = unit;
        }
        if let Some(quantity) = input.quantity {
            material.quantity = quantity;
        }
        if let Some(min) = input.min_stock_level {
            material.min_stock_level = min;
        }

        self.store.update_material(&txn, &material)?;
        self.store.commit(txn)?;
        Ok(material)
    }

    /// Soft-delete a material and cascade to dependent products
    ///
    /// Marks the row deleted, then raises [`MaterialDeleted`] into the
    /// catalog within the same transaction: every live product whose recipe
    /// references the material is flagged unavailable with a reason naming
    /// it. Either the whole cascade commits or none of it does.
    pub fn soft_delete(
        &self,
        id: u64,
        deleted_by: Option<String>,
    ) -> AppResult<MaterialDeleteResult> {
        let txn = self.store.begin_write()?;
        let mut material = match self.store.get_material_any_txn(&txn, id)? {
            Some(material) => material,
            None => return Err(AppError::material_not_found(id)),
        };
        if material.is_deleted {
            return Err(AppError::new(ErrorCode::MaterialAlreadyDeleted));
        }

        material.is_deleted = true;
        material.deleted_at = Some(shared::util::now_millis());
        material.deleted_by = deleted_by;
        self.store.update_material(&txn, &material)?;

        let event = MaterialDeleted {
            material_id: material.id,
            material_name: material.name.clone(),
        };
        let affected_product_names = self.catalog.apply_material_deleted(&txn, &event)?;
        self.store.commit(txn)?;

        let affected_products = affected_product_names.len();
        tracing::info!(
            material_id = id,
            name = %material.name,
            affected_products,
            "Raw material soft-deleted"
        );

        let warning = (affected_products > 0).then(|| {
            format!(
                "This material is used by {} product(s), which are now marked unavailable",
                affected_products
            )
        });
        Ok(MaterialDeleteResult {
            affected_products,
            affected_product_names,
            warning,
        })
    }

    /// Verify and deduct the accumulated stock requirements, all-or-nothing
    ///
    /// Runs inside the caller's write transaction. Requirements are keyed by
    /// material id in a `BTreeMap`, so the scan order is deterministic and a
    /// shortfall always reports the lowest affected id. A missing or
    /// soft-deleted material counts as zero stock.
    pub fn check_and_reserve(
        &self,
        txn: &WriteTransaction,
        requirements: &BTreeMap<u64, f64>,
    ) -> AppResult<()> {
        for (&material_id, &required) in requirements {
            match self.store.get_material_any_txn(txn, material_id)? {
                Some(mut material) if !material.is_deleted => {
                    if material.quantity < required {
                        return Err(AppError::insufficient_stock(
                            material.name,
                            required,
                            material.quantity,
                        ));
                    }
                    material.quantity -= required;
                    self.store.update_material(txn, &material)?;
                }
                Some(material) => {
                    return Err(AppError::insufficient_stock(material.name, required, 0.0));
                }
                None => {
                    return Err(AppError::insufficient_stock("Unknown", required, 0.0));
                }
            }
        }
        Ok(())
    }
}

/// Stock amounts must be finite and non-negative
fn validate_stock(value: f64, field: &str) -> AppResult<()> {
    money::require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
