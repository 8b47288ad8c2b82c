// Rust guideline compliant 2026-10-12

//! Table declarations, secondary indexes, and the typed resource binding.

use crate::guard::Owned;
use crate::store::Document;
use crate::{Court, Error, Listing, Result};
use serde::de::DeserializeOwned;

/// A secondary index over an ordered list of fields.
///
/// Keys implicitly end in the insertion sequence, so rows with equal field
/// values come back in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    /// Index name used by lookups.
    pub name: &'static str,
    /// Indexed fields, most significant first.
    pub fields: &'static [&'static str],
}

/// Declaration of a table and its indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name.
    pub name: &'static str,
    /// Prefix for generated record ids.
    pub id_prefix: &'static str,
    /// Secondary indexes maintained on every write.
    pub indexes: &'static [IndexDef],
}

impl TableSchema {
    /// Looks up an index by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the table declares no such index.
    pub fn index(&self, name: &str) -> Result<&'static IndexDef> {
        self.indexes
            .iter()
            .find(|index| index.name == name)
            .ok_or_else(|| Error::UnknownIndex {
                table: self.name.to_string(),
                index: name.to_string(),
            })
    }
}

/// Marketplace listings.
pub const LISTINGS: TableSchema = TableSchema {
    name: "listings",
    id_prefix: "lst",
    indexes: &[
        IndexDef {
            name: "by_owner",
            fields: &["owner_id", "created_at"],
        },
        IndexDef {
            name: "by_status_and_created_at",
            fields: &["status", "created_at"],
        },
    ],
};

/// User profiles.
pub const USERS: TableSchema = TableSchema {
    name: "users",
    id_prefix: "usr",
    indexes: &[IndexDef {
        name: "by_email",
        fields: &["email"],
    }],
};

/// Courts listed by court owners.
pub const COURTS: TableSchema = TableSchema {
    name: "courts",
    id_prefix: "crt",
    indexes: &[IndexDef {
        name: "by_owner",
        fields: &["owner_id", "created_at"],
    }],
};

/// Every table the application declares.
pub const SCHEMAS: &[TableSchema] = &[LISTINGS, USERS, COURTS];

/// Finds a schema by table name.
///
/// # Errors
///
/// Returns an error if no schema in `schemas` has that name.
pub fn find_schema(schemas: &'static [TableSchema], table: &str) -> Result<&'static TableSchema> {
    schemas
        .iter()
        .find(|schema| schema.name == table)
        .ok_or_else(|| Error::UnknownTable(table.to_string()))
}

/// An owned record type stored in a single table.
pub trait Resource: Owned + DeserializeOwned {
    /// Table holding the records.
    const TABLE: &'static str;
    /// Human-readable kind used in error messages.
    const KIND: &'static str;

    /// Decodes a stored document into the record type.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fields do not match the type.
    fn from_document(document: &Document) -> Result<Self> {
        document.decode()
    }
}

impl Resource for Listing {
    const TABLE: &'static str = LISTINGS.name;
    const KIND: &'static str = "Listing";
}

impl Resource for Court {
    const TABLE: &'static str = COURTS.name;
    const KIND: &'static str = "Court";
}
