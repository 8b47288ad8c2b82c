// Rust guideline compliant 2026-10-12

//! Finite State Machine module for listing status transitions.
//!
//! A listing has two states and a single, unparameterized transition:
//!
//! - Available → Sold
//! - Sold → Available
//!
//! There is no terminal state. [`ListingStatus::toggled`] is the only way
//! the lifecycle manager computes a new status, so toggling twice always
//! restores the original value.

use crate::ListingStatus;

impl ListingStatus {
    /// Returns the status a toggle moves to.
    #[must_use]
    pub fn toggled(self) -> ListingStatus {
        match self {
            ListingStatus::Available => ListingStatus::Sold,
            ListingStatus::Sold => ListingStatus::Available,
        }
    }
}
