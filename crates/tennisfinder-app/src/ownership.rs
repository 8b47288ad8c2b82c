// Rust guideline compliant 2026-10-14

//! Generic authorize-then-mutate helper shared by every owned resource.

use crate::error::{AppError, Result};
use tennisfinder_core::{
    authorize, Decision, DenyReason, RecordId, RecordStore, Resource, Tables, UserId,
};

/// Loads a record, checks ownership, and runs `mutate` in one transaction.
///
/// Checks run in a fixed order: a missing caller fails with
/// [`AppError::Unauthenticated`] before the store is touched, then a missing
/// record fails with [`AppError::NotFound`], then a caller who does not own
/// the record fails with [`AppError::Forbidden`]. `mutate` only runs once
/// all three pass, and any write it makes is discarded if it returns an
/// error.
///
/// # Arguments
///
/// * `store` - Record store holding `R::TABLE`
/// * `caller` - Resolved caller identity, if any
/// * `id` - Target record id
/// * `mutate` - Work to perform with the loaded record
///
/// # Errors
///
/// Returns the first failing check, or the error returned by `mutate`.
pub fn authorize_then_mutate<R, S, T, F>(
    store: &S,
    caller: Option<&UserId>,
    id: &RecordId,
    mutate: F,
) -> Result<T>
where
    R: Resource,
    S: RecordStore,
    F: FnOnce(&mut Tables, R) -> Result<T>,
{
    let caller = caller.ok_or(AppError::Unauthenticated)?;

    store.transaction(|tables| {
        let record = match tables.get(R::TABLE, id)? {
            Some(document) => R::from_document(document)?,
            None => return Err(AppError::not_found(R::KIND, id)),
        };

        match authorize(Some(caller), &record) {
            Decision::Allowed => {}
            Decision::Denied(DenyReason::Unauthenticated) => {
                return Err(AppError::Unauthenticated);
            }
            Decision::Denied(DenyReason::NotOwner) => {
                tracing::warn!(
                    kind = R::KIND,
                    id = %id,
                    caller = %caller,
                    "rejected mutation by non-owner"
                );
                return Err(AppError::forbidden(R::KIND, id));
            }
        }

        mutate(tables, record)
    })
}
