// Rust guideline compliant 2026-10-14

//! Court management, built on the same ownership rules as listings.

use crate::error::{AppError, Result};
use crate::identity::{require_caller, IdentityProvider};
use crate::ownership::authorize_then_mutate;
use crate::time::{monotonic_created_at, Clock, SystemClock};
use serde::Serialize;
use tennisfinder_core::store::to_fields;
use tennisfinder_core::{
    Court, CourtInput, CourtPatch, IndexValue, Order, RecordId, RecordStore, Resource, Tables,
    UserId,
};

#[derive(Serialize)]
struct NewCourt<'a> {
    owner_id: &'a UserId,
    #[serde(flatten)]
    input: &'a CourtInput,
    created_at: i64,
}

/// Inserts a court row inside an open transaction.
pub(crate) fn insert_court(
    tables: &mut Tables,
    owner: &UserId,
    input: &CourtInput,
    now: i64,
) -> Result<RecordId> {
    let record = NewCourt {
        owner_id: owner,
        input,
        created_at: monotonic_created_at(tables, Court::TABLE, now)?,
    };
    Ok(tables.insert(Court::TABLE, to_fields(&record)?)?)
}

/// Court service.
#[derive(Debug, Clone)]
pub struct CourtService<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: RecordStore> CourtService<S> {
    /// Creates a service using the system clock.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> CourtService<S, C> {
    /// Creates a service with an explicit clock.
    #[must_use]
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Lists a new court owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` without a caller, `InvalidInput` for an
    /// out-of-range price, rating or schedule, or a store error.
    pub fn create(&self, identity: &dyn IdentityProvider, input: &CourtInput) -> Result<RecordId> {
        let owner = require_caller(identity)?;
        input.validate()?;
        let now = self.clock.now_millis();

        let id = self
            .store
            .transaction(|tables| insert_court(tables, &owner, input, now))?;

        tracing::info!(id = %id, owner = %owner, "created court");
        Ok(id)
    }

    /// Applies a partial update to a court the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated`, `NotFound`, `Forbidden`, then
    /// `InvalidInput`, in that order.
    pub fn update(
        &self,
        identity: &dyn IdentityProvider,
        id: &RecordId,
        patch: &CourtPatch,
    ) -> Result<()> {
        let caller = identity.current_caller();
        authorize_then_mutate::<Court, _, _, _>(&self.store, caller.as_ref(), id, |tables, _| {
            patch.validate()?;
            let fields = to_fields(patch)?;
            if !fields.is_empty() {
                tables.patch(Court::TABLE, id, fields)?;
            }
            Ok(())
        })
    }

    /// Permanently deletes a court the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated`, `NotFound` or `Forbidden`, in that order.
    pub fn delete(&self, identity: &dyn IdentityProvider, id: &RecordId) -> Result<()> {
        let caller = identity.current_caller();
        authorize_then_mutate::<Court, _, _, _>(&self.store, caller.as_ref(), id, |tables, _| {
            tables.delete(Court::TABLE, id)?;
            Ok(())
        })?;

        tracing::info!(id = %id, "deleted court");
        Ok(())
    }

    /// Looks up a court by id; a missing id yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store cannot be read.
    pub fn get(&self, id: &RecordId) -> Result<Option<Court>> {
        match self.store.get(Court::TABLE, id)? {
            Some(document) => Ok(Some(Court::from_document(&document)?)),
            None => Ok(None),
        }
    }

    /// Returns the caller's courts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` without a caller, or a store error.
    pub fn list_mine(&self, identity: &dyn IdentityProvider) -> Result<Vec<Court>> {
        let caller = require_caller(identity)?;
        let documents = self.store.query_by_index(
            Court::TABLE,
            "by_owner",
            &[IndexValue::from(&caller)],
            Order::Desc,
        )?;
        documents
            .iter()
            .map(|document| Court::from_document(document).map_err(AppError::from))
            .collect()
    }

    /// Returns every court, newest first. Courts are public.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_all(&self) -> Result<Vec<Court>> {
        let documents = self.store.query_all(Court::TABLE, Order::Desc)?;
        let mut courts = documents
            .iter()
            .map(|document| Court::from_document(document).map_err(AppError::from))
            .collect::<Result<Vec<_>>>()?;
        courts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(courts)
    }
}
