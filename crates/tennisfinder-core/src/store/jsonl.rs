// Rust guideline compliant 2026-10-13

//! JSONL-backed record store.
//!
//! The file holds one JSON object per line. Sequence lines record each
//! table's next insertion number; document lines hold rows:
//!
//! ```text
//! {"kind":"sequence","table":"listings","next_seq":3}
//! {"kind":"document","id":"lst_…","table":"listings","seq":0,"fields":{…}}
//! ```
//!
//! Transactions block on an exclusive lock on a sibling `.lock` file, reload
//! the file, run the closure, and replace the file atomically (temp file +
//! rename) only if the closure succeeds. Reads need no lock: the rename
//! guarantees they observe a complete snapshot.
//!
//! Lines that cannot be parsed are never dropped. Reads skip them, and a
//! committed transaction writes them back unchanged after the parsed rows.

use crate::schema::{TableSchema, SCHEMAS};
use crate::store::{Document, RecordStore, Tables};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used inside a data directory.
pub const RECORDS_FILE: &str = "records.jsonl";

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Line {
    Sequence { table: String, next_seq: u64 },
    Document(Document),
}

/// Record store persisted to a JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    /// Path to the JSONL file.
    path: PathBuf,
    /// Declared tables.
    schemas: &'static [TableSchema],
}

impl JsonlStore {
    /// Creates a store for the given JSONL file.
    ///
    /// The file is created lazily on the first committed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self {
            path,
            schemas: SCHEMAS,
        })
    }

    /// Opens the store inside a data directory, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open_in(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Self::new(data_dir.join(RECORDS_FILE))
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every table from the file.
    ///
    /// Malformed lines are skipped with a warning; a well-formed line that
    /// names an undeclared table is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a document cannot be
    /// placed in its table.
    pub fn load(&self) -> Result<Tables> {
        self.load_preserving().map(|(tables, _)| tables)
    }

    /// Loads every table and returns the raw text of unparsed lines.
    fn load_preserving(&self) -> Result<(Tables, Vec<String>)> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let mut tables = Tables::new(self.schemas);
        let mut unparsed = Vec::new();

        if !self.path.exists() {
            return Ok((tables, unparsed));
        }

        let reader = BufReader::new(File::open(&self.path)?);
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Line>(&line) {
                Ok(Line::Sequence { table, next_seq }) => {
                    tables.restore_sequence(&table, next_seq)?;
                }
                Ok(Line::Document(document)) => {
                    tables.load_document(document)?;
                }
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        error = %err,
                        "skipping malformed JSONL line"
                    );
                    unparsed.push(line);
                }
            }
        }

        Ok((tables, unparsed))
    }

    /// Writes every table to the file atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the temp file cannot be written or renamed.
    pub fn save_all(&self, tables: &Tables) -> Result<()> {
        self.write_file(tables, &[])
    }

    fn write_file(&self, tables: &Tables, unparsed: &[String]) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);

            for (table, next_seq) in tables.sequences() {
                let line = Line::Sequence {
                    table: table.to_string(),
                    next_seq,
                };
                serde_json::to_writer(&mut writer, &line)?;
                writer.write_all(b"\n")?;
            }

            for document in tables.documents() {
                serde_json::to_writer(&mut writer, &Line::Document(document.clone()))?;
                writer.write_all(b"\n")?;
            }

            for line in unparsed {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
            }

            let file = writer
                .into_inner()
                .map_err(|err| Error::Io(err.into_error()))?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Executes a closure with an exclusive lock on the store file.
    ///
    /// Waits while another process or thread holds the lock, so concurrent
    /// transactions are serialized rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock file cannot be opened or locked
    /// - The closure returns an error
    pub fn with_lock<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: From<Error>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(Error::Io)?;

        lock_file
            .lock_exclusive()
            .map_err(|err| Error::Lock(format!("{}: {}", lock_path.display(), err)))?;

        let result = f();

        // Released even if the closure failed.
        let _ = lock_file.unlock();

        result
    }
}

impl RecordStore for JsonlStore {
    fn read<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Tables) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let tables = self.load()?;
        f(&tables)
    }

    fn transaction<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Tables) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        self.with_lock(|| {
            let (mut tables, unparsed) = self.load_preserving()?;
            let value = f(&mut tables)?;
            self.write_file(&tables, &unparsed)?;
            tracing::debug!(path = %self.path.display(), "committed transaction");
            Ok(value)
        })
    }
}
