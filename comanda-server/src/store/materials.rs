//! Raw material rows and the name uniqueness index.
//!
//! Accessors come in pairs: the plain name returns live rows only, the
//! `_any` variant includes soft-deleted rows. A caller that never asks for
//! `_any` cannot leak a deleted row.

use redb::{ReadableDatabase, ReadableTable, WriteTransaction};
use shared::models::RawMaterial;

use super::{MATERIAL_ID_KEY, MATERIAL_NAMES_TABLE, MATERIALS_TABLE, Store, StorageResult};

impl Store {
    /// Issue the next material id (within transaction)
    pub fn next_material_id(&self, txn: &WriteTransaction) -> StorageResult<u64> {
        self.next_id(txn, MATERIAL_ID_KEY)
    }

    /// Insert a new material row and its name index entry
    pub fn insert_material(
        &self,
        txn: &WriteTransaction,
        material: &RawMaterial,
    ) -> StorageResult<()> {
        let mut rows = txn.open_table(MATERIALS_TABLE)?;
        let value = serde_json::to_vec(material)?;
        rows.insert(material.id, value.as_slice())?;

        let mut names = txn.open_table(MATERIAL_NAMES_TABLE)?;
        names.insert(material.name.as_str(), material.id)?;
        Ok(())
    }

    /// Overwrite a material row, moving its name index entry when renamed
    ///
    /// Soft deletes go through here too; the index entry stays so the name
    /// keeps blocking re-creation.
    pub fn update_material(
        &self,
        txn: &WriteTransaction,
        material: &RawMaterial,
    ) -> StorageResult<()> {
        let previous = self.get_material_any_txn(txn, material.id)?;

        let mut rows = txn.open_table(MATERIALS_TABLE)?;
        let value = serde_json::to_vec(material)?;
        rows.insert(material.id, value.as_slice())?;
        drop(rows);

        if let Some(previous) = previous
            && previous.name != material.name
        {
            let mut names = txn.open_table(MATERIAL_NAMES_TABLE)?;
            names.remove(previous.name.as_str())?;
            names.insert(material.name.as_str(), material.id)?;
        }
        Ok(())
    }

    /// Get a live material row by id
    pub fn get_material(&self, id: u64) -> StorageResult<Option<RawMaterial>> {
        Ok(self.get_material_any(id)?.filter(|m| !m.is_deleted))
    }

    /// Get a material row by id, soft-deleted rows included
    pub fn get_material_any(&self, id: u64) -> StorageResult<Option<RawMaterial>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MATERIALS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get a live material row by id (within transaction)
    pub fn get_material_txn(
        &self,
        txn: &WriteTransaction,
        id: u64,
    ) -> StorageResult<Option<RawMaterial>> {
        Ok(self.get_material_any_txn(txn, id)?.filter(|m| !m.is_deleted))
    }

    /// Get a material row by id, soft-deleted rows included (within transaction)
    pub fn get_material_any_txn(
        &self,
        txn: &WriteTransaction,
        id: u64,
    ) -> StorageResult<Option<RawMaterial>> {
        let table = txn.open_table(MATERIALS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All live material rows in ascending id order
    pub fn list_materials(&self) -> StorageResult<Vec<RawMaterial>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MATERIALS_TABLE)?;

        let mut materials = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let material: RawMaterial = serde_json::from_slice(value.value())?;
            if !material.is_deleted {
                materials.push(material);
            }
        }
        Ok(materials)
    }

    /// Look up the id registered for a material name (within transaction)
    ///
    /// The index covers soft-deleted rows, so a deleted name still resolves.
    pub fn material_id_by_name(
        &self,
        txn: &WriteTransaction,
        name: &str,
    ) -> StorageResult<Option<u64>> {
        let table = txn.open_table(MATERIAL_NAMES_TABLE)?;
        Ok(table.get(name)?.map(|guard| guard.value()))
    }
}
