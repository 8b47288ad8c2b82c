// Rust guideline compliant 2026-10-14

//! Data directory discovery and service wiring.

use crate::courts::CourtService;
use crate::error::Result;
use crate::listings::ListingManager;
use crate::queries::ListingQueries;
use crate::seed::{seed_demo_data, SeedReport};
use crate::time::SystemClock;
use crate::users::UserDirectory;
use std::path::{Path, PathBuf};
use tennisfinder_core::{Config, JsonlStore};

/// A TennisFinder data directory with its configuration and store.
#[derive(Debug, Clone)]
pub struct DataContext {
    data_dir: PathBuf,
    config: Config,
    store: JsonlStore,
}

impl DataContext {
    /// Opens a data directory, creating it if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Directory holding `records.jsonl` and `config.toml`
    /// * `config_path` - Optional config file used instead of `<data_dir>/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be created
    /// - The configuration cannot be loaded or is invalid
    pub fn open(data_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let store = JsonlStore::open_in(data_dir)?;
        let config = match config_path {
            Some(path) => Config::load_file(path)?,
            None => Config::load(data_dir)?,
        };

        tracing::debug!(
            data_dir = %data_dir.display(),
            environment = ?config.environment,
            "opened data directory"
        );

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            store,
        })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the record store.
    #[must_use]
    pub fn store(&self) -> &JsonlStore {
        &self.store
    }

    /// Returns a listing lifecycle manager bound to this directory.
    #[must_use]
    pub fn listings(&self) -> ListingManager<JsonlStore> {
        ListingManager::new(self.store.clone())
    }

    /// Returns a listing query service bound to this directory.
    #[must_use]
    pub fn queries(&self) -> ListingQueries<JsonlStore> {
        ListingQueries::new(self.store.clone(), &self.config)
    }

    /// Returns the user directory bound to this directory.
    #[must_use]
    pub fn users(&self) -> UserDirectory<JsonlStore> {
        UserDirectory::new(self.store.clone(), &self.config)
    }

    /// Returns the court service bound to this directory.
    #[must_use]
    pub fn courts(&self) -> CourtService<JsonlStore> {
        CourtService::new(self.store.clone())
    }

    /// Seeds demo courts into this directory.
    ///
    /// # Errors
    ///
    /// Returns an error in production or if the store write fails.
    pub fn seed(&self) -> Result<SeedReport> {
        seed_demo_data(&self.store, &SystemClock, &self.config)
    }
}
