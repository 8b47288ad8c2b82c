// Rust guideline compliant 2026-10-16

//! Implementation of the `tennisfinder court` commands.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tennisfinder_app::{AppError, DataContext, IdentityProvider};
use tennisfinder_core::{
    Court, CourtInput, CourtPatch, Location, RecordId, SurfaceType, WeeklySchedule,
};

/// Fields for `court create`.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Court name
    #[arg(long)]
    pub name: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Surface (clay, hard, grass, carpet)
    #[arg(long)]
    pub surface: String,

    /// Hourly price
    #[arg(long)]
    pub price_per_hour: f64,

    /// Amenity (can be specified multiple times)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// Initial rating between 0 and 5
    #[arg(long)]
    pub rating: Option<f64>,

    /// JSON file holding the weekly opening schedule
    #[arg(long)]
    pub schedule_file: Option<PathBuf>,
}

impl CreateArgs {
    /// Converts the flags into service input.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown surface or an unreadable schedule file.
    pub fn into_input(self) -> Result<CourtInput> {
        Ok(CourtInput {
            name: self.name,
            address: self.address,
            location: Location {
                lat: self.lat,
                lng: self.lng,
            },
            surface_type: parse_surface(&self.surface)?,
            price_per_hour: self.price_per_hour,
            amenities: self.amenities,
            availability: self.schedule_file.as_deref().map(read_schedule).transpose()?,
            rating: self.rating,
        })
    }
}

/// Optional fields for `court update`.
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New address
    #[arg(long)]
    pub address: Option<String>,

    /// New latitude; requires --lng
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// New longitude; requires --lat
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// New surface
    #[arg(long)]
    pub surface: Option<String>,

    /// New hourly price
    #[arg(long)]
    pub price_per_hour: Option<f64>,

    /// Replace amenities (can be specified multiple times)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// New rating
    #[arg(long)]
    pub rating: Option<f64>,

    /// JSON file holding the new weekly schedule
    #[arg(long)]
    pub schedule_file: Option<PathBuf>,
}

impl UpdateArgs {
    /// Converts the flags into a partial update.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown surface or an unreadable schedule file.
    pub fn into_patch(self) -> Result<CourtPatch> {
        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        };

        Ok(CourtPatch {
            name: self.name,
            address: self.address,
            location,
            surface_type: self.surface.as_deref().map(parse_surface).transpose()?,
            price_per_hour: self.price_per_hour,
            amenities: (!self.amenities.is_empty()).then_some(self.amenities),
            availability: self.schedule_file.as_deref().map(read_schedule).transpose()?,
            rating: self.rating,
        })
    }
}

/// Lists a new court owned by the caller and prints it.
///
/// # Errors
///
/// Returns `Unauthenticated` without a caller, `InvalidInput` for bad
/// flags or out-of-range values, or a store error.
pub fn create(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    args: CreateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let input = args.into_input()?;
    let id = ctx.courts().create(identity, &input)?;
    let court = load(ctx, &id)?;
    println!("{}", formatter.format_court(&court));
    Ok(())
}

/// Applies a partial update to a court the caller owns.
///
/// # Errors
///
/// Returns `Unauthenticated`, `NotFound`, `Forbidden` or `InvalidInput`,
/// in that order of precedence.
pub fn update(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    id: String,
    args: UpdateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = RecordId::new(id);
    let patch = args.into_patch()?;
    ctx.courts().update(identity, &id, &patch)?;
    let court = load(ctx, &id)?;
    println!("{}", formatter.format_court(&court));
    Ok(())
}

/// Permanently deletes a court the caller owns.
///
/// # Errors
///
/// Returns `Unauthenticated`, `NotFound` or `Forbidden`, in that order.
pub fn delete(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    id: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let id = RecordId::new(id);
    ctx.courts().delete(identity, &id)?;
    println!("{}", formatter.format_ack("deleted", "court", &id));
    Ok(())
}

/// Shows a single court.
///
/// # Errors
///
/// Returns `NotFound` if no court has the id.
pub fn show(ctx: &DataContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let court = load(ctx, &RecordId::new(id))?;
    println!("{}", formatter.format_court(&court));
    Ok(())
}

/// Lists every court, or only the caller's with `mine`.
///
/// # Errors
///
/// Returns `Unauthenticated` for `mine` without a caller.
pub fn list(
    ctx: &DataContext,
    identity: &dyn IdentityProvider,
    mine: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let courts = if mine {
        ctx.courts().list_mine(identity)?
    } else {
        ctx.courts().list_all()?
    };
    println!("{}", formatter.format_courts(&courts));
    Ok(())
}

fn load(ctx: &DataContext, id: &RecordId) -> Result<Court> {
    let court = ctx.courts().get(id)?.ok_or_else(|| AppError::NotFound {
        kind: "Court",
        id: id.to_string(),
    })?;
    Ok(court)
}

fn parse_surface(value: &str) -> Result<SurfaceType> {
    Ok(SurfaceType::parse(value).map_err(AppError::from)?)
}

fn read_schedule(path: &Path) -> Result<WeeklySchedule> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file {}", path.display()))?;
    let schedule = serde_json::from_str(&content).map_err(|e| {
        AppError::InvalidInput(format!("Invalid schedule file {}: {e}", path.display()))
    })?;
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tennisfinder_core::Weekday;

    #[test]
    fn test_update_without_coordinates_leaves_location() {
        let patch = UpdateArgs {
            name: Some("Renamed".to_string()),
            ..UpdateArgs::default()
        }
        .into_patch()
        .expect("patch");
        assert_eq!(patch.location, None);
        assert_eq!(patch.amenities, None);
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_unknown_surface_is_invalid_input() {
        let error = UpdateArgs {
            surface: Some("ice".to_string()),
            ..UpdateArgs::default()
        }
        .into_patch()
        .expect_err("ice is not a surface");
        assert!(matches!(
            error.downcast_ref::<AppError>(),
            Some(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_schedule_file_is_read() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("schedule.json");
        fs::write(
            &path,
            r#"{"schema_version":1,"windows":[{"weekday":"monday","open_minute":480,"close_minute":1320}]}"#,
        )
        .expect("write schedule");

        let schedule = read_schedule(&path).expect("schedule");
        assert_eq!(schedule.windows.len(), 1);
        assert_eq!(schedule.windows[0].weekday, Weekday::Monday);
    }
}
