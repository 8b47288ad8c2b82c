// Rust guideline compliant 2026-10-13

//! In-memory table state shared by every store implementation.
//!
//! [`Tables`] owns the rows of every declared table together with their
//! secondary indexes. Stores hand it to transaction closures; all reads and
//! writes a closure performs go through the methods here, which keep rows,
//! the insertion-order map and every index consistent.

use crate::identity::generate_record_id;
use crate::models::RecordId;
use crate::schema::{find_schema, TableSchema};
use crate::store::index::{key_for, IndexValue};
use crate::store::{Document, Order};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Index key: the indexed field values followed by the insertion sequence.
type IndexKey = (Vec<IndexValue>, u64);

#[derive(Debug, Clone)]
struct TableState {
    schema: &'static TableSchema,
    rows: HashMap<RecordId, Document>,
    by_seq: BTreeMap<u64, RecordId>,
    indexes: HashMap<&'static str, BTreeMap<IndexKey, RecordId>>,
    next_seq: u64,
}

impl TableState {
    fn new(schema: &'static TableSchema) -> Self {
        Self {
            schema,
            rows: HashMap::new(),
            by_seq: BTreeMap::new(),
            indexes: schema
                .indexes
                .iter()
                .map(|index| (index.name, BTreeMap::new()))
                .collect(),
            next_seq: 0,
        }
    }

    fn index_keys(&self, document: &Document) -> Result<Vec<(&'static str, IndexKey)>> {
        self.schema
            .indexes
            .iter()
            .map(|index| Ok((index.name, (key_for(index, document)?, document.seq))))
            .collect()
    }

    /// Inserts or replaces a document, re-indexing it.
    fn put(&mut self, document: Document) -> Result<()> {
        // Keys are computed up front so an unindexable value leaves no partial state.
        let keys = self.index_keys(&document)?;
        self.remove(&document.id);

        for (name, key) in keys {
            self.indexes
                .entry(name)
                .or_default()
                .insert(key, document.id.clone());
        }
        self.by_seq.insert(document.seq, document.id.clone());
        self.next_seq = self.next_seq.max(document.seq.saturating_add(1));
        self.rows.insert(document.id.clone(), document);
        Ok(())
    }

    fn remove(&mut self, id: &RecordId) -> Option<Document> {
        let document = self.rows.remove(id)?;
        self.by_seq.remove(&document.seq);
        for index in self.schema.indexes {
            if let (Ok(values), Some(entries)) =
                (key_for(index, &document), self.indexes.get_mut(index.name))
            {
                entries.remove(&(values, document.seq));
            }
        }
        Some(document)
    }

    fn resolve(&self, ids: Vec<&RecordId>, order: Order) -> Result<Vec<Document>> {
        let mut documents = ids
            .into_iter()
            .map(|id| {
                self.rows.get(id).cloned().ok_or_else(|| {
                    Error::InvalidRecord(format!(
                        "Index on {} references missing row {}",
                        self.schema.name, id
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if order == Order::Desc {
            documents.reverse();
        }
        Ok(documents)
    }
}

/// Undo entry recorded while a transaction is open.
#[derive(Debug)]
enum Undo {
    Remove { table: &'static str, id: RecordId },
    Restore(Document),
}

/// Rows and indexes for every declared table.
#[derive(Debug)]
pub struct Tables {
    schemas: &'static [TableSchema],
    tables: BTreeMap<&'static str, TableState>,
    journal: Option<Vec<Undo>>,
}

impl Tables {
    /// Creates empty tables for the given schemas.
    #[must_use]
    pub fn new(schemas: &'static [TableSchema]) -> Self {
        Self {
            schemas,
            tables: schemas
                .iter()
                .map(|schema| (schema.name, TableState::new(schema)))
                .collect(),
            journal: None,
        }
    }

    fn table(&self, name: &str) -> Result<&TableState> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::UnknownTable(name.to_string()))
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut TableState> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::UnknownTable(name.to_string()))
    }

    fn record(&mut self, undo: Undo) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(undo);
        }
    }

    /// Returns the schema of a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared.
    pub fn schema(&self, table: &str) -> Result<&'static TableSchema> {
        find_schema(self.schemas, table)
    }

    /// Fetches a document by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared.
    pub fn get(&self, table: &str, id: &RecordId) -> Result<Option<&Document>> {
        Ok(self.table(table)?.rows.get(id))
    }

    /// Inserts a new document and returns its freshly assigned id.
    ///
    /// # Arguments
    ///
    /// * `table` - Target table
    /// * `fields` - Field set to store; must not contain `id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table is not declared
    /// - `fields` contains the store-assigned `id`
    /// - An indexed field holds a non-scalar value
    pub fn insert(&mut self, table: &str, fields: Map<String, Value>) -> Result<RecordId> {
        if fields.contains_key("id") {
            return Err(Error::InvalidRecord("id is assigned by the store".to_string()));
        }

        let state = self.table_mut(table)?;
        let schema = state.schema;
        let seq = state.next_seq;
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();

        let mut nonce = 0u32;
        let id = loop {
            let candidate = RecordId::new(generate_record_id(
                schema.id_prefix,
                schema.name,
                seq,
                nanos,
                nonce,
            ));
            if !state.rows.contains_key(&candidate) {
                break candidate;
            }
            nonce = nonce.saturating_add(1);
        };

        state.put(Document {
            id: id.clone(),
            table: schema.name.to_string(),
            seq,
            fields,
        })?;

        self.record(Undo::Remove {
            table: schema.name,
            id: id.clone(),
        });
        Ok(id)
    }

    /// Merges `fields` into an existing document.
    ///
    /// A `null` value removes the field.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table is not declared
    /// - No document has the id
    /// - `fields` contains `id`
    /// - An indexed field would hold a non-scalar value
    pub fn patch(&mut self, table: &str, id: &RecordId, fields: Map<String, Value>) -> Result<()> {
        if fields.contains_key("id") {
            return Err(Error::InvalidRecord("id cannot be patched".to_string()));
        }

        let state = self.table_mut(table)?;
        let before = state
            .rows
            .get(id)
            .cloned()
            .ok_or_else(|| Error::RecordNotFound {
                table: table.to_string(),
                id: id.to_string(),
            })?;

        let mut after = before.clone();
        for (key, value) in fields {
            if value.is_null() {
                after.fields.remove(&key);
            } else {
                after.fields.insert(key, value);
            }
        }
        state.put(after)?;

        self.record(Undo::Restore(before));
        Ok(())
    }

    /// Permanently removes a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared or the id is missing.
    pub fn delete(&mut self, table: &str, id: &RecordId) -> Result<()> {
        let removed = self
            .table_mut(table)?
            .remove(id)
            .ok_or_else(|| Error::RecordNotFound {
                table: table.to_string(),
                id: id.to_string(),
            })?;

        self.record(Undo::Restore(removed));
        Ok(())
    }

    /// Returns documents whose leading index fields equal `prefix`.
    ///
    /// Results are ordered by the remaining index fields and then by
    /// insertion sequence; [`Order::Desc`] reverses the whole sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the table or index is not declared, or if the
    /// prefix is longer than the index.
    pub fn query_by_index(
        &self,
        table: &str,
        index: &str,
        prefix: &[IndexValue],
        order: Order,
    ) -> Result<Vec<Document>> {
        let state = self.table(table)?;
        let index = state.schema.index(index)?;
        if prefix.len() > index.fields.len() {
            return Err(Error::InvalidRecord(format!(
                "Prefix has {} values but index {} has {} fields",
                prefix.len(),
                index.name,
                index.fields.len()
            )));
        }

        let ids: Vec<&RecordId> = match state.indexes.get(index.name) {
            Some(entries) => entries
                .range((prefix.to_vec(), 0)..)
                .take_while(|((values, _), _)| values.starts_with(prefix))
                .map(|(_, id)| id)
                .collect(),
            None => Vec::new(),
        };

        state.resolve(ids, order)
    }

    /// Returns every document of a table in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared.
    pub fn query_all(&self, table: &str, order: Order) -> Result<Vec<Document>> {
        let state = self.table(table)?;
        state.resolve(state.by_seq.values().collect(), order)
    }

    /// Returns the most recently inserted document still present.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared.
    pub fn last_inserted(&self, table: &str) -> Result<Option<&Document>> {
        let state = self.table(table)?;
        Ok(state
            .by_seq
            .values()
            .next_back()
            .and_then(|id| state.rows.get(id)))
    }

    /// Returns the number of documents in a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared.
    pub fn len(&self, table: &str) -> Result<usize> {
        Ok(self.table(table)?.rows.len())
    }

    /// Returns the sequence number the next insert into `table` will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not declared.
    pub fn next_seq(&self, table: &str) -> Result<u64> {
        Ok(self.table(table)?.next_seq)
    }

    /// Iterates every table name with its next sequence number.
    pub(crate) fn sequences(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.tables
            .iter()
            .map(|(name, state)| (*name, state.next_seq))
    }

    /// Iterates every document, table by table, in insertion order.
    pub(crate) fn documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.tables.values().flat_map(|state| {
            state
                .by_seq
                .values()
                .filter_map(move |id| state.rows.get(id))
        })
    }

    /// Restores a persisted document verbatim, keeping its id and sequence.
    pub(crate) fn load_document(&mut self, document: Document) -> Result<()> {
        let table = document.table.clone();
        self.table_mut(&table)?.put(document)
    }

    /// Raises a table's sequence counter so deleted sequence numbers stay retired.
    pub(crate) fn restore_sequence(&mut self, table: &str, next_seq: u64) -> Result<()> {
        let state = self.table_mut(table)?;
        state.next_seq = state.next_seq.max(next_seq);
        Ok(())
    }

    pub(crate) fn begin(&mut self) {
        self.journal = Some(Vec::new());
    }

    pub(crate) fn commit(&mut self) {
        self.journal = None;
    }

    /// Undoes every write recorded since [`begin`](Self::begin).
    pub(crate) fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };

        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Remove { table, id } => {
                    if let Some(state) = self.tables.get_mut(table) {
                        state.remove(&id);
                    }
                }
                Undo::Restore(document) => {
                    let Some(state) = self.tables.get_mut(document.table.as_str()) else {
                        continue;
                    };
                    if let Err(err) = state.put(document) {
                        tracing::error!(error = %err, "failed to restore document during rollback");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SCHEMAS;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_rollback_restores_patched_and_deleted_rows() {
        let mut tables = Tables::new(SCHEMAS);
        let keep = tables
            .insert("users", fields(json!({ "email": "a@example.com" })))
            .expect("insert");

        tables.begin();
        tables
            .patch("users", &keep, fields(json!({ "email": "b@example.com" })))
            .expect("patch");
        let added = tables
            .insert("users", fields(json!({ "email": "c@example.com" })))
            .expect("insert");
        tables.delete("users", &keep).expect("delete");
        tables.rollback();

        let restored = tables.get("users", &keep).expect("get").expect("present");
        assert_eq!(restored.fields["email"], json!("a@example.com"));
        assert!(tables.get("users", &added).expect("get").is_none());

        let by_email = tables
            .query_by_index("users", "by_email", &["a@example.com".into()], Order::Asc)
            .expect("query");
        assert_eq!(by_email.len(), 1);
        let stale = tables
            .query_by_index("users", "by_email", &["b@example.com".into()], Order::Asc)
            .expect("query");
        assert!(stale.is_empty());
    }

    #[test]
    fn test_sequence_is_not_reused_after_delete() {
        let mut tables = Tables::new(SCHEMAS);
        let first = tables
            .insert("users", fields(json!({ "email": "a@example.com" })))
            .expect("insert");
        tables.delete("users", &first).expect("delete");
        assert_eq!(tables.next_seq("users").expect("seq"), 1);
    }

    #[test]
    fn test_insert_rejects_client_id() {
        let mut tables = Tables::new(SCHEMAS);
        let result = tables.insert("users", fields(json!({ "id": "usr_x", "email": "a" })));
        assert!(matches!(result, Err(Error::InvalidRecord(_))));
    }
}
