// Rust guideline compliant 2026-10-14

//! Configuration management for TennisFinder.

use crate::{Error, Result, Role};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside a data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Automated tests.
    Test,
    /// Live deployment.
    Production,
}

impl Environment {
    /// Parses an environment name.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `development`, `test` or `production`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(Error::InvalidConfig(format!(
                "environment must be development, test, or production, got {value}"
            ))),
        }
    }
}

/// Configuration for TennisFinder behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Deployment environment.
    #[serde(default)]
    pub environment: Environment,

    /// Whether the unrestricted listing view is limited to admins.
    #[serde(default = "default_list_all_requires_admin")]
    pub list_all_requires_admin: bool,

    /// Role stamped on newly registered users that did not pick one.
    #[serde(default)]
    pub default_role: Role,

    /// Minimum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_list_all_requires_admin() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            list_all_requires_admin: default_list_all_requires_admin(),
            default_role: Role::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/config.toml`
    /// 3. Environment variables with `TENNISFINDER_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_file(&data_dir.join(CONFIG_FILE))
    }

    /// Loads configuration from an explicit file path, then applies env overrides.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or any value is invalid.
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TENNISFINDER_ENV` - development/test/production
    /// - `TENNISFINDER_LIST_ALL_REQUIRES_ADMIN` - true/false
    /// - `TENNISFINDER_DEFAULT_ROLE` - player/court_owner/admin
    /// - `TENNISFINDER_LOG_LEVEL` - error/warn/info/debug/trace
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value is invalid.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a looked-up value is invalid.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TENNISFINDER_ENV") {
            self.environment = Environment::parse(&val)?;
        }

        if let Some(val) = lookup("TENNISFINDER_LIST_ALL_REQUIRES_ADMIN") {
            self.list_all_requires_admin = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "TENNISFINDER_LIST_ALL_REQUIRES_ADMIN must be true or false".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("TENNISFINDER_DEFAULT_ROLE") {
            self.default_role = Role::parse(&val).map_err(|_| {
                Error::InvalidConfig(
                    "TENNISFINDER_DEFAULT_ROLE must be player, court_owner, or admin".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("TENNISFINDER_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a known level.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    /// Returns true when demo seeding is permitted.
    #[must_use]
    pub fn allows_seeding(&self) -> bool {
        self.environment != Environment::Production
    }

    /// Saves the configuration to `<data_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(data_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                ("TENNISFINDER_ENV", "production"),
                ("TENNISFINDER_LIST_ALL_REQUIRES_ADMIN", "false"),
                ("TENNISFINDER_DEFAULT_ROLE", "court_owner"),
            ]))
            .expect("overrides should apply");

        assert_eq!(config.environment, Environment::Production);
        assert!(!config.list_all_requires_admin);
        assert_eq!(config.default_role, Role::CourtOwner);
        assert!(!config.allows_seeding());
    }

    #[test]
    fn test_invalid_bool_override_rejected() {
        let mut config = Config::default();
        let result =
            config.apply_overrides(lookup(&[("TENNISFINDER_LIST_ALL_REQUIRES_ADMIN", "maybe")]));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_log_level_fails_validation() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
