// Rust guideline compliant 2026-10-12

//! TennisFinder Core Library
//!
//! This crate provides the foundational components for the TennisFinder marketplace:
//! - Data models (Listing, UserProfile, Court, identifiers)
//! - Record store capability with in-memory and JSONL implementations
//! - Secondary indexes with ordered equality-prefix lookup
//! - Ownership guard for mutating operations
//! - Listing status state machine
//! - Configuration and error types

pub mod config;
pub mod court;
pub mod error;
pub mod fsm;
pub mod guard;
pub mod identity;
pub mod models;
pub mod schema;
pub mod store;

pub use config::{Config, Environment};
pub use court::{
    AvailabilityWindow, Court, CourtInput, CourtPatch, SurfaceType, Weekday, WeeklySchedule,
};
pub use error::{Error, Result};
pub use guard::{authorize, Decision, DenyReason, Owned};
pub use models::{
    Listing, ListingInput, ListingPatch, ListingStatus, Location, RecordId, Role, UserId,
    UserProfile,
};
pub use schema::{IndexDef, Resource, TableSchema, SCHEMAS};
pub use store::{
    Document, IndexValue, JsonlStore, MemoryStore, Order, RecordStore, Tables,
};
