// Rust guideline compliant 2026-10-12

//! Error types for the TennisFinder core library.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The named table is not declared in the schema.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// The named index is not declared on the table.
    #[error("Unknown index {index} on table {table}")]
    UnknownIndex {
        /// Table the lookup targeted.
        table: String,
        /// Requested index name.
        index: String,
    },

    /// A stored document could not be interpreted as a record.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Input failed field validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A store-level patch or delete referenced a missing id.
    #[error("Record not found in {table}: {id}")]
    RecordNotFound {
        /// Table that was searched.
        table: String,
        /// Missing record id.
        id: String,
    },

    /// Configuration file or environment override is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The store lock could not be acquired.
    #[error("Store is locked: {0}")]
    Lock(String),
}
