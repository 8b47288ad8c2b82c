// Rust guideline compliant 2026-10-14

//! Application services for TennisFinder.
//!
//! This crate layers caller identity, ownership checks and derived fields
//! over the core record store: the listing lifecycle manager and query
//! service, the user directory, the court service, demo seeding, and
//! standardized response envelopes.

pub mod context;
pub mod courts;
pub mod error;
pub mod identity;
pub mod listings;
pub mod ownership;
pub mod queries;
pub mod response;
pub mod seed;
pub mod time;
pub mod users;

pub use context::DataContext;
pub use courts::CourtService;
pub use error::{AppError, ErrorCode, Result};
pub use identity::{require_caller, Anonymous, IdentityProvider};
pub use listings::ListingManager;
pub use ownership::authorize_then_mutate;
pub use queries::ListingQueries;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use seed::{seed_demo_data, SeedReport, DEMO_OWNER_EMAIL};
pub use time::{Clock, ManualClock, SystemClock};
pub use users::{NewUser, UserDirectory};
