//! redb-based cart persistence
//!
//! One table, one slot: key `"cart-items"`, value = JSON array of cart
//! lines. No versioning or migration.
//!
//! # Recovery
//!
//! `load` distinguishes the payload failure modes the store recovers from:
//! a missing slot and a parseable-but-not-an-array payload come back as
//! `Ok(None)` (the slot is left alone); an unreadable or unparseable payload
//! comes back as `Err(_)` and the caller discards the slot.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::CartLine;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table holding the persisted cart: key = slot name, value = JSON bytes
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

/// Slot key for the persisted line list
pub const CART_ITEMS_KEY: &str = "cart-items";

/// Storage errors
#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, CartStorageError>;

/// Cart storage backed by redb
#[derive(Clone)]
pub struct CartStorage {
    db: Arc<Database>,
}

impl CartStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Persist the line list, overwriting the slot
    pub fn save(&self, lines: &[CartLine]) -> StorageResult<()> {
        let value = serde_json::to_vec(lines)?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CART_TABLE)?;
            table.insert(CART_ITEMS_KEY, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Load the stored line list.
    ///
    /// Returns `Ok(None)` when the slot is empty or holds JSON of the wrong
    /// shape (logged and ignored). Read and parse failures surface as
    /// `Err(_)` so the caller can discard the slot.
    pub fn load(&self) -> StorageResult<Option<Vec<CartLine>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;

        let Some(guard) = table.get(CART_ITEMS_KEY)? else {
            return Ok(None);
        };

        let value: serde_json::Value = serde_json::from_slice(guard.value())?;
        if !value.is_array() {
            tracing::warn!("stored cart is not an array, ignoring");
            return Ok(None);
        }

        let lines: Vec<CartLine> = serde_json::from_value(value)?;
        Ok(Some(lines))
    }

    /// Delete the slot (corrupt-data recovery)
    pub fn discard(&self) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CART_TABLE)?;
            table.remove(CART_ITEMS_KEY)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Write raw bytes into the slot (test fixture for corrupt payloads)
    #[cfg(test)]
    pub fn save_raw(&self, bytes: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CART_TABLE)?;
            table.insert(CART_ITEMS_KEY, bytes)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Whether the slot currently holds a value
    pub fn has_slot(&self) -> StorageResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;
        Ok(table.get(CART_ITEMS_KEY)?.is_some())
    }
}
