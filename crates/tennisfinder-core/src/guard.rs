// Rust guideline compliant 2026-10-12

//! Ownership guard for mutating operations.
//!
//! The guard is a pure decision function: it never touches the store and
//! never logs. Callers turn a [`Decision::Denied`] into a hard failure.

use crate::models::UserId;

/// Records that belong to exactly one user.
pub trait Owned {
    /// Returns the owning user's identity.
    fn owner_id(&self) -> &UserId;
}

/// Why the guard refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No caller identity was resolved.
    Unauthenticated,
    /// The caller does not own the record.
    NotOwner,
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The caller may mutate the record.
    Allowed,
    /// The caller may not mutate the record.
    Denied(DenyReason),
}

/// Decides whether `caller` may mutate `record`.
///
/// # Arguments
///
/// * `caller` - The resolved caller identity, if any
/// * `record` - The record being mutated
///
/// # Returns
///
/// [`Decision::Allowed`] only when the caller is present and owns the record.
pub fn authorize<R: Owned + ?Sized>(caller: Option<&UserId>, record: &R) -> Decision {
    match caller {
        None => Decision::Denied(DenyReason::Unauthenticated),
        Some(id) if id == record.owner_id() => Decision::Allowed,
        Some(_) => Decision::Denied(DenyReason::NotOwner),
    }
}

impl Owned for crate::Listing {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

impl Owned for crate::Court {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}
