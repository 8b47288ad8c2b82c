// Rust guideline compliant 2026-10-12

//! Core data models for TennisFinder.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, store-assigned record identifier (format: `<prefix>_XXXXXXXXXXXXXXXX`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps a raw identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Stable identifier of an authenticated principal.
///
/// Registered users are identified by the record id of their profile row,
/// so a `UserId` converts losslessly to and from [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps a raw subject string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<RecordId> for UserId {
    fn from(value: RecordId) -> Self {
        Self(value.0)
    }
}

impl From<UserId> for RecordId {
    fn from(value: UserId) -> Self {
        Self(value.0)
    }
}

/// Geographic point used for map integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Platform role attached to a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular player.
    #[default]
    Player,
    /// Owns and lists courts.
    CourtOwner,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Parses a role from user input, accepting snake, kebab and upper case.
    ///
    /// # Errors
    ///
    /// Returns an error if the value names no role.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "player" => Ok(Role::Player),
            "court_owner" => Ok(Role::CourtOwner),
            "admin" => Ok(Role::Admin),
            _ => Err(Error::Validation(format!("Invalid role: {value}"))),
        }
    }
}

/// Availability of a marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    /// The item can be bought.
    Available,
    /// The item has been sold.
    Sold,
}

impl ListingStatus {
    /// Returns the stored string form, as used in index keys.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "Available",
            ListingStatus::Sold => "Sold",
        }
    }
}

/// A marketplace listing for a used piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Creating user; never changes after creation.
    pub owner_id: UserId,
    /// Short headline.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Equipment category (racket, shoes, ...).
    pub category: String,
    /// Seller-described condition.
    pub condition: String,
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Known defects.
    pub flaw: String,
    /// Age of the item in months.
    pub age_months: u32,
    /// Price when new.
    pub original_price: f64,
    /// Asking price set by the seller.
    pub user_price: f64,
    /// Resale price estimated by the evaluator, once available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_sold_price: Option<f64>,
    /// Quality label assigned by the evaluator, once available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_label: Option<String>,
    /// Opaque image reference handles, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Current availability.
    pub status: ListingStatus,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

/// Caller-supplied fields for a new listing.
///
/// Owner, status and creation time are derived by the lifecycle manager
/// and have no representation here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub brand: String,
    pub model: String,
    pub flaw: String,
    pub age_months: u32,
    pub original_price: f64,
    pub user_price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ListingInput {
    /// Validates numeric fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        validate_amount("original_price", self.original_price)?;
        validate_amount("user_price", self.user_price)?;
        Ok(())
    }
}

/// Partial update for a listing. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flaw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_sold_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ListingPatch {
    /// Returns true if the patch sets no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates the numeric fields that are present.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided price is negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.original_price {
            validate_amount("original_price", price)?;
        }
        if let Some(price) = self.user_price {
            validate_amount("user_price", price)?;
        }
        if let Some(price) = self.predicted_sold_price {
            validate_amount("predicted_sold_price", price)?;
        }
        Ok(())
    }
}

/// Profile row for a registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile id, which doubles as the caller identity.
    pub id: UserId,
    /// Login email.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Platform role; unset until defaults are applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Join time in epoch milliseconds; unset until defaults are applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<i64>,
}

impl UserProfile {
    /// Returns true if the profile carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Rejects negative and non-finite monetary amounts.
pub(crate) fn validate_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(Error::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}
