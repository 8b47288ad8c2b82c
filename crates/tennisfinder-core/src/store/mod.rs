// Rust guideline compliant 2026-10-13

//! Record store capability and its implementations.
//!
//! The store maps record ids to documents, maintains the secondary indexes
//! declared in [`crate::schema`], and runs multi-step work atomically:
//!
//! - [`MemoryStore`] keeps tables in process behind a read/write lock
//! - [`JsonlStore`] persists tables to a JSONL file with file locking and
//!   atomic rewrites
//!
//! Services depend only on the [`RecordStore`] trait.

mod index;
mod jsonl;
mod memory;
mod tables;

pub use index::IndexValue;
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use tables::Tables;

use crate::models::RecordId;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Direction of an ordered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Oldest / smallest first.
    #[default]
    Asc,
    /// Newest / largest first.
    Desc,
}

/// A stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned id.
    pub id: RecordId,
    /// Owning table.
    pub table: String,
    /// Insertion sequence within the table; never reused.
    pub seq: u64,
    /// Field set, excluding `id`.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Returns a field value, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Decodes the document (fields plus `id`) into a typed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields do not match the target type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.to_string()));
        serde_json::from_value(Value::Object(fields)).map_err(|err| {
            Error::InvalidRecord(format!("{} {}: {}", self.table, self.id, err))
        })
    }
}

/// Serializes a value into a document field set.
///
/// # Errors
///
/// Returns an error if the value does not serialize to a JSON object.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidRecord(format!(
            "Expected an object of fields, got {other}"
        ))),
    }
}

/// Persistent, indexed document storage.
///
/// Implementations provide two primitives: [`read`](RecordStore::read) runs a
/// closure against a consistent snapshot, and
/// [`transaction`](RecordStore::transaction) runs a closure with exclusive
/// access, committing its writes only if it returns `Ok`. The single-step
/// operations are built on those.
///
/// A read-check-write sequence inside one `transaction` closure is atomic
/// with respect to every other transaction on the same store.
pub trait RecordStore: Send + Sync {
    /// Runs `f` against a point-in-time view of the tables.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or a store error converted into `E`.
    fn read<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Tables) -> std::result::Result<T, E>,
        E: From<Error>;

    /// Runs `f` with exclusive access; writes are discarded if it fails.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or a store error converted into `E`.
    fn transaction<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Tables) -> std::result::Result<T, E>,
        E: From<Error>;

    /// Fetches a document by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or the store is unreadable.
    fn get(&self, table: &str, id: &RecordId) -> Result<Option<Document>> {
        self.read(|tables| Ok(tables.get(table, id)?.cloned()))
    }

    /// Inserts a document and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or the write fails.
    fn insert(&self, table: &str, fields: Map<String, Value>) -> Result<RecordId> {
        self.transaction(|tables| tables.insert(table, fields))
    }

    /// Merges fields into an existing document.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is missing or the write fails.
    fn patch(&self, table: &str, id: &RecordId, fields: Map<String, Value>) -> Result<()> {
        self.transaction(|tables| tables.patch(table, id, fields))
    }

    /// Permanently deletes a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is missing or the write fails.
    fn delete(&self, table: &str, id: &RecordId) -> Result<()> {
        self.transaction(|tables| tables.delete(table, id))
    }

    /// Looks up documents by an equality prefix on a named index.
    ///
    /// # Errors
    ///
    /// Returns an error if the table or index is unknown.
    fn query_by_index(
        &self,
        table: &str,
        index: &str,
        prefix: &[IndexValue],
        order: Order,
    ) -> Result<Vec<Document>> {
        self.read(|tables| tables.query_by_index(table, index, prefix, order))
    }

    /// Returns every document in a table, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown.
    fn query_all(&self, table: &str, order: Order) -> Result<Vec<Document>> {
        self.read(|tables| tables.query_all(table, order))
    }
}
