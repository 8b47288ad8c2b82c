// Rust guideline compliant 2026-10-14

//! Demo data for local development.

use crate::courts::insert_court;
use crate::error::{AppError, Result};
use crate::time::Clock;
use crate::users::{ensure_defaults_in, insert_profile, NewUser};
use serde::Serialize;
use tennisfinder_core::schema::USERS;
use tennisfinder_core::{
    Config, Court, CourtInput, IndexValue, Location, Order, RecordId, RecordStore, Resource, Role,
    SurfaceType, UserId,
};

/// Email of the demo court owner.
pub const DEMO_OWNER_EMAIL: &str = "owner@tennisfinder.com";

/// What [`seed_demo_data`] wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// The demo court owner.
    pub owner_id: UserId,
    /// Number of courts removed before seeding.
    pub removed_courts: usize,
    /// The inserted demo courts, in insertion order.
    pub court_ids: Vec<RecordId>,
}

fn demo_courts() -> Vec<CourtInput> {
    let court = |name: &str, address: &str, lat: f64, lng: f64, surface, price| CourtInput {
        name: name.to_string(),
        address: address.to_string(),
        location: Location { lat, lng },
        surface_type: surface,
        price_per_hour: price,
        amenities: Vec::new(),
        availability: None,
        rating: Some(5.0),
    };

    vec![
        court(
            "Center Court - Clay",
            "123 Tennis Lane, Cairo",
            30.0444,
            31.2357,
            SurfaceType::Clay,
            200.0,
        ),
        court(
            "Grand Slam Arena",
            "456 Padel St, Giza",
            29.9765,
            31.1313,
            SurfaceType::Hard,
            350.0,
        ),
        court(
            "Riverside Grass Court",
            "789 Zamalek Dr, Cairo",
            30.0595,
            31.2219,
            SurfaceType::Grass,
            500.0,
        ),
    ]
}

/// Replaces every court with a fixed set of demo courts.
///
/// All existing courts are deleted, the demo court owner is registered
/// (or reused if that email already exists), and three demo courts owned by
/// it are inserted. Everything happens in one transaction.
///
/// # Errors
///
/// Returns `InvalidInput` when the configured environment is production, or
/// a store error.
pub fn seed_demo_data<S, C>(store: &S, clock: &C, config: &Config) -> Result<SeedReport>
where
    S: RecordStore,
    C: Clock + ?Sized,
{
    if !config.allows_seeding() {
        return Err(AppError::InvalidInput(
            "Seeding is disabled in the production environment".to_string(),
        ));
    }

    let now = clock.now_millis();
    let report = store.transaction(|tables| {
        let existing = tables.query_all(Court::TABLE, Order::Asc)?;
        for document in &existing {
            tables.delete(Court::TABLE, &document.id)?;
        }

        let owner_email = IndexValue::from(DEMO_OWNER_EMAIL);
        let owners = tables.query_by_index(USERS.name, "by_email", &[owner_email], Order::Asc)?;
        let owner_id = match owners.first() {
            Some(document) => UserId::from(document.id.clone()),
            None => insert_profile(
                tables,
                &NewUser {
                    email: DEMO_OWNER_EMAIL.to_string(),
                    first_name: Some("Admin".to_string()),
                    last_name: Some("Owner".to_string()),
                    phone: None,
                    role: Some(Role::CourtOwner),
                },
            )?,
        };
        ensure_defaults_in(tables, &owner_id, Role::CourtOwner, now)?;

        let court_ids = demo_courts()
            .iter()
            .map(|input| insert_court(tables, &owner_id, input, now))
            .collect::<Result<Vec<_>>>()?;

        Ok::<_, AppError>(SeedReport {
            owner_id,
            removed_courts: existing.len(),
            court_ids,
        })
    })?;

    tracing::info!(
        owner = %report.owner_id,
        courts = report.court_ids.len(),
        removed = report.removed_courts,
        "seeded demo data"
    );
    Ok(report)
}
