// Rust guideline compliant 2026-10-14

//! Listing lifecycle manager.
//!
//! Every mutation runs as one store transaction. Derived fields (owner,
//! status, creation time) are assigned here and cannot be supplied by the
//! caller: [`ListingInput`] and [`ListingPatch`] have no slot for them.

use crate::error::Result;
use crate::identity::{require_caller, IdentityProvider};
use crate::ownership::authorize_then_mutate;
use crate::time::{monotonic_created_at, Clock, SystemClock};
use serde::Serialize;
use serde_json::{Map, Value};
use tennisfinder_core::store::to_fields;
use tennisfinder_core::{
    Listing, ListingInput, ListingPatch, ListingStatus, RecordId, RecordStore, Resource, Tables,
    UserId,
};

/// Field set written for a new listing.
#[derive(Serialize)]
struct NewListing<'a> {
    owner_id: &'a UserId,
    #[serde(flatten)]
    input: &'a ListingInput,
    status: ListingStatus,
    created_at: i64,
}

/// Creates, updates, deletes and toggles listings on behalf of a caller.
#[derive(Debug, Clone)]
pub struct ListingManager<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: RecordStore> ListingManager<S> {
    /// Creates a manager stamping listings with the system clock.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> ListingManager<S, C> {
    /// Creates a manager with an explicit clock.
    #[must_use]
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a listing owned by the caller.
    ///
    /// The new listing is `Available`, owned by the caller, and stamped with
    /// the current time. Identical inputs always produce distinct listings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No caller is resolved
    /// - A price is negative or not finite
    /// - The store write fails
    pub fn create(
        &self,
        identity: &dyn IdentityProvider,
        input: &ListingInput,
    ) -> Result<RecordId> {
        let owner = require_caller(identity)?;
        input.validate()?;
        let now = self.clock.now_millis();

        let id = self.store.transaction(|tables| {
            let record = NewListing {
                owner_id: &owner,
                input,
                status: ListingStatus::Available,
                created_at: monotonic_created_at(tables, Listing::TABLE, now)?,
            };
            Ok::<_, crate::AppError>(tables.insert(Listing::TABLE, to_fields(&record)?)?)
        })?;

        tracing::info!(id = %id, owner = %owner, "created listing");
        Ok(id)
    }

    /// Applies a partial update to a listing the caller owns.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence: `Unauthenticated`, `NotFound`,
    /// `Forbidden`, then `InvalidInput` for out-of-range numbers.
    pub fn update(
        &self,
        identity: &dyn IdentityProvider,
        id: &RecordId,
        patch: &ListingPatch,
    ) -> Result<()> {
        let caller = identity.current_caller();
        authorize_then_mutate::<Listing, _, _, _>(&self.store, caller.as_ref(), id, |tables, _| {
            patch.validate()?;
            if patch.is_empty() {
                return Ok(());
            }
            tables.patch(Listing::TABLE, id, to_fields(patch)?)?;
            Ok(())
        })?;

        tracing::debug!(id = %id, "updated listing");
        Ok(())
    }

    /// Permanently deletes a listing the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated`, `NotFound` or `Forbidden`, in that order.
    pub fn delete(&self, identity: &dyn IdentityProvider, id: &RecordId) -> Result<()> {
        let caller = identity.current_caller();
        authorize_then_mutate::<Listing, _, _, _>(&self.store, caller.as_ref(), id, |tables, _| {
            tables.delete(Listing::TABLE, id)?;
            Ok(())
        })?;

        tracing::info!(id = %id, "deleted listing");
        Ok(())
    }

    /// Flips a listing the caller owns between `Available` and `Sold`.
    ///
    /// Toggling twice restores the original status.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated`, `NotFound` or `Forbidden`, in that order.
    pub fn toggle_status(&self, identity: &dyn IdentityProvider, id: &RecordId) -> Result<()> {
        let caller = identity.current_caller();
        let flip = |tables: &mut Tables, listing: Listing| -> Result<ListingStatus> {
            let next = listing.status.toggled();

            let mut fields = Map::new();
            fields.insert("status".to_string(), Value::String(next.as_str().to_string()));
            tables.patch(Listing::TABLE, id, fields)?;
            Ok(next)
        };
        let status = authorize_then_mutate(&self.store, caller.as_ref(), id, flip)?;

        tracing::info!(id = %id, status = status.as_str(), "toggled listing status");
        Ok(())
    }
}
