// Rust guideline compliant 2026-10-14

//! User registration and post-registration defaults.

use crate::error::{AppError, Result};
use crate::time::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tennisfinder_core::schema::USERS;
use tennisfinder_core::store::to_fields;
use tennisfinder_core::{Config, Order, RecordId, RecordStore, Role, Tables, UserId, UserProfile};

/// Fields supplied when registering a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Requested role; the configured default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// User directory service.
#[derive(Debug, Clone)]
pub struct UserDirectory<S, C = SystemClock> {
    store: S,
    clock: C,
    default_role: Role,
}

impl<S: RecordStore> UserDirectory<S> {
    /// Creates a directory using the system clock.
    #[must_use]
    pub fn new(store: S, config: &Config) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> UserDirectory<S, C> {
    /// Creates a directory with an explicit clock.
    #[must_use]
    pub fn with_clock(store: S, config: &Config, clock: C) -> Self {
        Self {
            store,
            clock,
            default_role: config.default_role,
        }
    }

    /// Registers a new user and applies role and join-time defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the email is malformed or already
    /// registered, or a store error.
    pub fn register(&self, user: &NewUser) -> Result<UserProfile> {
        validate_email(&user.email)?;
        let now = self.clock.now_millis();
        let role = user.role.unwrap_or(self.default_role);

        let profile = self.store.transaction(|tables| {
            let id = insert_profile(tables, user)?;
            ensure_defaults_in(tables, &id, role, now)?
                .ok_or_else(|| AppError::not_found("User", &id))
        })?;

        tracing::info!(id = %profile.id, email = %profile.email, "registered user");
        Ok(profile)
    }

    /// Fills in `role` and `joined_at` when they are unset.
    ///
    /// Fields that already hold a value are never overwritten, so calling
    /// this repeatedly is harmless. A missing user is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn ensure_defaults(&self, id: &UserId) -> Result<Option<UserProfile>> {
        let now = self.clock.now_millis();
        self.store
            .transaction(|tables| ensure_defaults_in(tables, id, self.default_role, now))
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get(&self, id: &UserId) -> Result<Option<UserProfile>> {
        match self.store.get(USERS.name, &RecordId::from(id.clone()))? {
            Some(document) => Ok(Some(document.decode()?)),
            None => Ok(None),
        }
    }

    /// Looks up a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        let documents = self
            .store
            .query_by_index(USERS.name, "by_email", &[email.into()], Order::Asc)?;
        match documents.first() {
            Some(document) => Ok(Some(document.decode()?)),
            None => Ok(None),
        }
    }
}

fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') || trimmed.len() != email.len() {
        return Err(AppError::InvalidInput(format!("Invalid email address: {email:?}")));
    }
    Ok(())
}

/// Inserts a profile row, rejecting a duplicate email.
pub(crate) fn insert_profile(tables: &mut Tables, user: &NewUser) -> Result<UserId> {
    let email = user.email.as_str();
    let existing = tables.query_by_index(USERS.name, "by_email", &[email.into()], Order::Asc)?;
    if !existing.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Email already registered: {}",
            user.email
        )));
    }

    let mut fields = to_fields(user)?;
    // Role is applied by the defaults step so the same rule covers every path.
    fields.remove("role");
    Ok(tables.insert(USERS.name, fields)?.into())
}

/// Applies default role and join time to a profile inside a transaction.
pub(crate) fn ensure_defaults_in(
    tables: &mut Tables,
    id: &UserId,
    role: Role,
    now: i64,
) -> Result<Option<UserProfile>> {
    let record_id = RecordId::from(id.clone());
    let Some(document) = tables.get(USERS.name, &record_id)? else {
        return Ok(None);
    };
    let profile: UserProfile = document.decode()?;

    let mut fields = Map::new();
    if profile.role.is_none() {
        fields.insert("role".to_string(), serde_json::to_value(role)?);
    }
    if profile.joined_at.is_none() {
        fields.insert("joined_at".to_string(), Value::from(now));
    }

    if fields.is_empty() {
        return Ok(Some(profile));
    }

    tables.patch(USERS.name, &record_id, fields)?;
    match tables.get(USERS.name, &record_id)? {
        Some(document) => Ok(Some(document.decode()?)),
        None => Ok(None),
    }
}
