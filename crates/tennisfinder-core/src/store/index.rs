// Rust guideline compliant 2026-10-13

//! Ordered index values and key extraction.

use crate::models::{ListingStatus, UserId};
use crate::schema::IndexDef;
use crate::store::Document;
use crate::{Error, Result};
use serde_json::Value;
use std::cmp::Ordering;

/// A single component of an index key.
///
/// Values of different kinds order as `Null < Bool < Number < String`.
/// Numbers use IEEE total ordering so every key is comparable.
#[derive(Debug, Clone)]
pub enum IndexValue {
    /// Missing or null field.
    Null,
    /// Boolean field.
    Bool(bool),
    /// Numeric field, widened to `f64`.
    Number(f64),
    /// String field.
    String(String),
}

impl IndexValue {
    fn rank(&self) -> u8 {
        match self {
            IndexValue::Null => 0,
            IndexValue::Bool(_) => 1,
            IndexValue::Number(_) => 2,
            IndexValue::String(_) => 3,
        }
    }

    /// Converts a stored field value into an index component.
    ///
    /// # Arguments
    ///
    /// * `field` - Field name, for error reporting
    /// * `value` - The stored value, or `None` if the field is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the value is an array or object.
    pub fn from_field(field: &str, value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(IndexValue::Null),
            Some(Value::Bool(b)) => Ok(IndexValue::Bool(*b)),
            Some(Value::Number(n)) => n.as_f64().map(IndexValue::Number).ok_or_else(|| {
                Error::InvalidRecord(format!("Field {field} is not representable as f64"))
            }),
            Some(Value::String(s)) => Ok(IndexValue::String(s.clone())),
            Some(_) => Err(Error::InvalidRecord(format!(
                "Field {field} is not indexable"
            ))),
        }
    }
}

impl Ord for IndexValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (IndexValue::Null, IndexValue::Null) => Ordering::Equal,
            (IndexValue::Bool(a), IndexValue::Bool(b)) => a.cmp(b),
            (IndexValue::Number(a), IndexValue::Number(b)) => a.total_cmp(b),
            (IndexValue::String(a), IndexValue::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for IndexValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for IndexValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IndexValue {}

impl From<&str> for IndexValue {
    fn from(value: &str) -> Self {
        IndexValue::String(value.to_string())
    }
}

impl From<String> for IndexValue {
    fn from(value: String) -> Self {
        IndexValue::String(value)
    }
}

impl From<bool> for IndexValue {
    fn from(value: bool) -> Self {
        IndexValue::Bool(value)
    }
}

impl From<i64> for IndexValue {
    fn from(value: i64) -> Self {
        IndexValue::Number(value as f64)
    }
}

impl From<f64> for IndexValue {
    fn from(value: f64) -> Self {
        IndexValue::Number(value)
    }
}

impl From<ListingStatus> for IndexValue {
    fn from(value: ListingStatus) -> Self {
        IndexValue::String(value.as_str().to_string())
    }
}

impl From<&UserId> for IndexValue {
    fn from(value: &UserId) -> Self {
        IndexValue::String(value.as_str().to_string())
    }
}

/// Extracts the field values an index keys a document by.
///
/// # Errors
///
/// Returns an error if an indexed field holds a non-scalar value.
pub(crate) fn key_for(index: &IndexDef, document: &Document) -> Result<Vec<IndexValue>> {
    index
        .fields
        .iter()
        .map(|field| IndexValue::from_field(field, document.fields.get(*field)))
        .collect()
}
