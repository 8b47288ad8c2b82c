// Rust guideline compliant 2026-10-13

//! Court records and their typed availability schedule.

use crate::models::{validate_amount, Location, RecordId, UserId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Current version of the [`WeeklySchedule`] layout.
pub const SCHEDULE_SCHEMA_VERSION: u16 = 1;

/// Minutes in a day; the exclusive upper bound for schedule windows.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// Playing surface of a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    Clay,
    Hard,
    Grass,
    Carpet,
}

impl SurfaceType {
    /// Parses a surface name case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a known surface.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "clay" => Ok(SurfaceType::Clay),
            "hard" => Ok(SurfaceType::Hard),
            "grass" => Ok(SurfaceType::Grass),
            "carpet" => Ok(SurfaceType::Carpet),
            _ => Err(Error::Validation(format!("Invalid surface type: {value}"))),
        }
    }
}

/// Day of the week for schedule windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A bookable window on one weekday, in minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub weekday: Weekday,
    pub open_minute: u16,
    pub close_minute: u16,
}

/// Versioned weekly opening schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Layout version; only [`SCHEDULE_SCHEMA_VERSION`] is accepted.
    pub schema_version: u16,
    /// Opening windows, in any order.
    #[serde(default)]
    pub windows: Vec<AvailabilityWindow>,
}

impl WeeklySchedule {
    /// Creates a schedule at the current layout version.
    #[must_use]
    pub fn new(windows: Vec<AvailabilityWindow>) -> Self {
        Self {
            schema_version: SCHEDULE_SCHEMA_VERSION,
            windows,
        }
    }

    /// Validates the layout version and every window.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schema version is unsupported
    /// - A window closes at or before it opens
    /// - A window extends past midnight
    /// - Two windows on the same day overlap
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEDULE_SCHEMA_VERSION {
            return Err(Error::Validation(format!(
                "Unsupported schedule schema version {}",
                self.schema_version
            )));
        }

        for window in &self.windows {
            if window.open_minute >= window.close_minute {
                return Err(Error::Validation(format!(
                    "Window on {:?} must close after it opens",
                    window.weekday
                )));
            }
            if window.close_minute > MINUTES_PER_DAY {
                return Err(Error::Validation(format!(
                    "Window on {:?} extends past midnight",
                    window.weekday
                )));
            }
        }

        let mut sorted = self.windows.clone();
        sorted.sort_by_key(|w| (w.weekday, w.open_minute));
        for pair in sorted.windows(2) {
            if pair[0].weekday == pair[1].weekday && pair[1].open_minute < pair[0].close_minute {
                return Err(Error::Validation(format!(
                    "Overlapping windows on {:?}",
                    pair[0].weekday
                )));
            }
        }

        Ok(())
    }
}

/// A court listed by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: RecordId,
    pub owner_id: UserId,
    pub name: String,
    pub address: String,
    pub location: Location,
    pub surface_type: SurfaceType,
    pub price_per_hour: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<WeeklySchedule>,
    /// Average review score; new courts have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub created_at: i64,
}

/// Caller-supplied fields for a new court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtInput {
    pub name: String,
    pub address: String,
    pub location: Location,
    pub surface_type: SurfaceType,
    pub price_per_hour: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub availability: Option<WeeklySchedule>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl CourtInput {
    /// Validates price, rating and schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is out of range.
    pub fn validate(&self) -> Result<()> {
        validate_amount("price_per_hour", self.price_per_hour)?;
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(schedule) = &self.availability {
            schedule.validate()?;
        }
        Ok(())
    }
}

/// Partial update for a court.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourtPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_type: Option<SurfaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<WeeklySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl CourtPatch {
    /// Validates the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns an error if any provided field is out of range.
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.price_per_hour {
            validate_amount("price_per_hour", price)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(schedule) = &self.availability {
            schedule.validate()?;
        }
        Ok(())
    }
}

fn validate_rating(rating: f64) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(Error::Validation(format!(
            "rating must be between 0 and 5, got {rating}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(weekday: Weekday, open: u16, close: u16) -> AvailabilityWindow {
        AvailabilityWindow {
            weekday,
            open_minute: open,
            close_minute: close,
        }
    }

    #[test]
    fn test_schedule_rejects_overlap_on_same_day() {
        let schedule = WeeklySchedule::new(vec![
            window(Weekday::Monday, 480, 720),
            window(Weekday::Monday, 700, 900),
        ]);
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_schedule_allows_same_hours_on_different_days() {
        let schedule = WeeklySchedule::new(vec![
            window(Weekday::Monday, 480, 720),
            window(Weekday::Tuesday, 480, 720),
        ]);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_schedule_rejects_unknown_version() {
        let schedule = WeeklySchedule {
            schema_version: 2,
            windows: Vec::new(),
        };
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_surface_parse_is_case_insensitive() {
        assert_eq!(SurfaceType::parse("CLAY").ok(), Some(SurfaceType::Clay));
        assert!(SurfaceType::parse("ice").is_err());
    }
}
