// Rust guideline compliant 2026-10-14

//! Caller identity resolution.
//!
//! Authentication happens outside this crate. Services only ask an
//! [`IdentityProvider`] who is calling; `None` means anonymous.

use crate::error::{AppError, Result};
use tennisfinder_core::UserId;

/// Resolves the calling principal.
pub trait IdentityProvider {
    /// Returns the caller's stable identity, or `None` when unauthenticated.
    fn current_caller(&self) -> Option<UserId>;
}

/// A resolved caller is its own provider.
impl IdentityProvider for UserId {
    fn current_caller(&self) -> Option<UserId> {
        Some(self.clone())
    }
}

impl IdentityProvider for Option<UserId> {
    fn current_caller(&self) -> Option<UserId> {
        self.clone()
    }
}

/// A provider that never resolves a caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_caller(&self) -> Option<UserId> {
        None
    }
}

/// Returns the caller or fails with [`AppError::Unauthenticated`].
///
/// # Errors
///
/// Returns an error if the provider resolves no caller.
pub fn require_caller(identity: &dyn IdentityProvider) -> Result<UserId> {
    identity.current_caller().ok_or(AppError::Unauthenticated)
}
