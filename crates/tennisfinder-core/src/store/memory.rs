// Rust guideline compliant 2026-10-13

//! In-memory record store.

use crate::schema::{TableSchema, SCHEMAS};
use crate::store::{RecordStore, Tables};
use crate::Error;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory store backed by [`Tables`] behind a [`parking_lot::RwLock`].
///
/// Reads share the lock; a transaction holds the write lock for the whole
/// closure and rolls back its journaled writes if the closure fails.
///
/// Cloning is cheap: all clones share the same tables.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store with every application table declared.
    #[must_use]
    pub fn new() -> Self {
        Self::with_schemas(SCHEMAS)
    }

    /// Creates an empty store for a custom set of tables.
    #[must_use]
    pub fn with_schemas(schemas: &'static [TableSchema]) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new(schemas))),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn read<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Tables) -> Result<T, E>,
        E: From<Error>,
    {
        let tables = self.tables.read();
        f(&tables)
    }

    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Tables) -> Result<T, E>,
        E: From<Error>,
    {
        let mut tables = self.tables.write();
        tables.begin();
        match f(&mut tables) {
            Ok(value) => {
                tables.commit();
                Ok(value)
            }
            Err(err) => {
                tables.rollback();
                Err(err)
            }
        }
    }
}
