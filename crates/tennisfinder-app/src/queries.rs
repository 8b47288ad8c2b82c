// Rust guideline compliant 2026-10-14

//! Read-only listing projections.

use crate::error::{AppError, Result};
use crate::identity::{require_caller, IdentityProvider};
use tennisfinder_core::schema::USERS;
use tennisfinder_core::{
    Config, Document, IndexValue, Listing, ListingStatus, Order, RecordId, RecordStore, Resource,
    UserProfile,
};

/// Listing query service.
#[derive(Debug, Clone)]
pub struct ListingQueries<S> {
    store: S,
    list_all_requires_admin: bool,
}

impl<S: RecordStore> ListingQueries<S> {
    /// Creates a query service honoring `config.list_all_requires_admin`.
    #[must_use]
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            list_all_requires_admin: config.list_all_requires_admin,
        }
    }

    /// Returns every available listing, newest first.
    ///
    /// Safe to call without a caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_available(&self) -> Result<Vec<Listing>> {
        let documents = self.store.query_by_index(
            Listing::TABLE,
            "by_status_and_created_at",
            &[ListingStatus::Available.into()],
            Order::Desc,
        )?;
        decode_all(&documents)
    }

    /// Returns the caller's own listings, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` without a caller, or a store error.
    pub fn list_mine(&self, identity: &dyn IdentityProvider) -> Result<Vec<Listing>> {
        let caller = require_caller(identity)?;
        let documents = self.store.query_by_index(
            Listing::TABLE,
            "by_owner",
            &[IndexValue::from(&caller)],
            Order::Desc,
        )?;
        decode_all(&documents)
    }

    /// Returns every listing regardless of status or owner, newest first.
    ///
    /// Unless `list_all_requires_admin` is disabled, only callers whose
    /// profile carries the admin role may use this view.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` without a caller, `Forbidden` for a
    /// non-admin caller, or a store error.
    pub fn list_all(&self, identity: &dyn IdentityProvider) -> Result<Vec<Listing>> {
        if self.list_all_requires_admin {
            let caller = require_caller(identity)?;
            let profile = match self.store.get(USERS.name, &RecordId::from(caller.clone()))? {
                Some(document) => Some(document.decode::<UserProfile>()?),
                None => None,
            };
            if !profile.is_some_and(|profile| profile.is_admin()) {
                tracing::warn!(caller = %caller, "rejected unrestricted listing view");
                return Err(AppError::forbidden(Listing::KIND, "*"));
            }
        }

        let documents = self.store.query_all(Listing::TABLE, Order::Desc)?;
        let mut listings: Vec<Listing> = decode_all(&documents)?;
        // Stable sort keeps later insertions first among equal timestamps.
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    /// Looks up a listing by id.
    ///
    /// A missing or malformed id yields `None`, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store cannot be read.
    pub fn get_by_id(&self, id: &RecordId) -> Result<Option<Listing>> {
        self.store
            .get(Listing::TABLE, id)?
            .map(|document| Listing::from_document(&document))
            .transpose()
            .map_err(AppError::from)
    }
}

fn decode_all<R: Resource>(documents: &[Document]) -> Result<Vec<R>> {
    documents
        .iter()
        .map(|document| R::from_document(document).map_err(AppError::from))
        .collect()
}
