// Rust guideline compliant 2026-10-14

//! Error handling for TennisFinder application services.

use serde::Serialize;
use tennisfinder_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for CLI and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No caller identity was resolved.
    Unauthenticated,
    /// The requested record does not exist.
    NotFound,
    /// The caller does not own the record.
    Forbidden,
    /// Input validation failed.
    ValidationError,
    /// IO failure while reading or writing the data directory.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The record store rejected the operation.
    StoreError,
    /// Configuration is missing or invalid.
    ConfigError,
}

/// Application-level errors with stable mapping to error codes.
///
/// The three authorization outcomes are checked in a fixed order:
/// `Unauthenticated`, then `NotFound`, then `Forbidden`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The operation needs a caller identity and none was resolved.
    #[error("Authentication required")]
    Unauthenticated,

    /// The target record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind, e.g. `Listing`.
        kind: &'static str,
        /// Requested id.
        id: String,
    },

    /// The caller is authenticated but may not perform the operation.
    #[error("Not authorized to modify {kind} {id}")]
    Forbidden {
        /// Record kind, e.g. `Listing`.
        kind: &'static str,
        /// Target id.
        id: String,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => AppError::InvalidInput(message),
            other => AppError::Core(other),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Core(CoreError::Json(err))
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthenticated => ErrorCode::Unauthenticated,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::InvalidInput(_) => ErrorCode::ValidationError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::RecordNotFound { .. } => ErrorCode::NotFound,
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::UnknownTable(_)
                | CoreError::UnknownIndex { .. }
                | CoreError::InvalidRecord(_)
                | CoreError::Lock(_) => ErrorCode::StoreError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotFound { kind, id } | AppError::Forbidden { kind, id } => {
                Some(serde_json::json!({
                    "kind": kind,
                    "id": id,
                }))
            }
            AppError::Core(CoreError::RecordNotFound { table, id }) => Some(serde_json::json!({
                "table": table,
                "id": id,
            })),
            AppError::Core(CoreError::UnknownIndex { table, index }) => {
                Some(serde_json::json!({
                    "table": table,
                    "index": index,
                }))
            }
            _ => None,
        }
    }

    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn forbidden(kind: &'static str, id: impl ToString) -> Self {
        AppError::Forbidden {
            kind,
            id: id.to_string(),
        }
    }
}
