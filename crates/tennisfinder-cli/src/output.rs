// Rust guideline compliant 2026-10-16

//! Output formatting module for the TennisFinder CLI.
//!
//! This module renders listings, courts and users in three output formats:
//! JSON envelopes for machine consumption, tables, and plain text.

use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use tennisfinder_app::{AppError, ErrorEnvelope, SeedReport, SuccessEnvelope};
use tennisfinder_core::{Court, Listing, RecordId, UserProfile};

/// Output formatter trait.
///
/// Every method returns the full text to print on stdout.
pub trait OutputFormatter {
    /// Formats a single listing.
    fn format_listing(&self, listing: &Listing) -> String;

    /// Formats a list of listings in the order given.
    fn format_listings(&self, listings: &[Listing]) -> String;

    /// Formats a single court.
    fn format_court(&self, court: &Court) -> String;

    /// Formats a list of courts in the order given.
    fn format_courts(&self, courts: &[Court]) -> String;

    /// Formats a user profile.
    fn format_user(&self, user: &UserProfile) -> String;

    /// Formats the outcome of demo seeding.
    fn format_seed(&self, report: &SeedReport) -> String;

    /// Formats the acknowledgement of a mutation that returns no record.
    ///
    /// # Arguments
    /// * `action` - Past-tense verb, e.g. `deleted`
    /// * `kind` - Record kind, e.g. `listing`
    /// * `id` - The affected record
    fn format_ack(&self, action: &str, kind: &str, id: &RecordId) -> String;

    /// Formats an error.
    fn format_error(&self, error: &AppError) -> String;
}

/// JSON output formatter.
///
/// Wraps every result in the standard success envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result)).unwrap_or_else(|_| {
            json!({
                "status": "error",
                "code": "json_error",
                "message": "Failed to serialize result",
            })
            .to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, listing: &Listing) -> String {
        Self::envelope(listing)
    }

    fn format_listings(&self, listings: &[Listing]) -> String {
        Self::envelope(json!({
            "listings": listings,
            "total": listings.len(),
        }))
    }

    fn format_court(&self, court: &Court) -> String {
        Self::envelope(court)
    }

    fn format_courts(&self, courts: &[Court]) -> String {
        Self::envelope(json!({
            "courts": courts,
            "total": courts.len(),
        }))
    }

    fn format_user(&self, user: &UserProfile) -> String {
        Self::envelope(user)
    }

    fn format_seed(&self, report: &SeedReport) -> String {
        Self::envelope(report)
    }

    fn format_ack(&self, action: &str, kind: &str, id: &RecordId) -> String {
        Self::envelope(json!({ "action": action, "kind": kind, "id": id }))
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() }).to_string())
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_listing(&self, listing: &Listing) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", listing.id));
        output.push_str(&format!("Title:       {}\n", listing.title));
        output.push_str(&format!("Status:      {}\n", listing.status.as_str()));
        output.push_str(&format!("Owner:       {}\n", listing.owner_id));
        output.push_str(&format!("Price:       {}\n", format_price(listing.user_price)));
        output.push_str(&format!("Original:    {}\n", format_price(listing.original_price)));
        output.push_str(&format!("Brand:       {} {}\n", listing.brand, listing.model));
        output.push_str(&format!("Category:    {}\n", listing.category));
        output.push_str(&format!("Condition:   {}\n", listing.condition));
        output.push_str(&format!("Age:         {} months\n", listing.age_months));
        output.push_str(&format!("Created:     {}\n", format_timestamp(listing.created_at)));

        if !listing.flaw.is_empty() {
            output.push_str(&format!("Flaw:        {}\n", listing.flaw));
        }
        if !listing.description.is_empty() {
            output.push_str(&format!("Description: {}\n", listing.description));
        }
        if let Some(price) = listing.predicted_sold_price {
            output.push_str(&format!("Predicted:   {}\n", format_price(price)));
        }
        if let Some(label) = &listing.ai_label {
            output.push_str(&format!("AI label:    {label}\n"));
        }
        if !listing.images.is_empty() {
            output.push_str(&format!("Images:      {}\n", listing.images.join(", ")));
        }

        output
    }

    fn format_listings(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return "No listings found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Price", "Title", "Owner", "Created"]);

        for listing in listings {
            builder.push_record(vec![
                listing.id.to_string(),
                listing.status.as_str().to_string(),
                format_price(listing.user_price),
                listing.title.clone(),
                listing.owner_id.to_string(),
                format_timestamp(listing.created_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_court(&self, court: &Court) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:        {}\n", court.id));
        output.push_str(&format!("Name:      {}\n", court.name));
        output.push_str(&format!("Address:   {}\n", court.address));
        output.push_str(&format!(
            "Location:  {:.4}, {:.4}\n",
            court.location.lat, court.location.lng
        ));
        output.push_str(&format!("Surface:   {:?}\n", court.surface_type));
        output.push_str(&format!("Per hour:  {}\n", format_price(court.price_per_hour)));
        output.push_str(&format!("Owner:     {}\n", court.owner_id));

        if let Some(rating) = court.rating {
            output.push_str(&format!("Rating:    {rating:.1}\n"));
        }
        if !court.amenities.is_empty() {
            output.push_str(&format!("Amenities: {}\n", court.amenities.join(", ")));
        }
        if let Some(schedule) = &court.availability {
            output.push_str("Open:\n");
            for window in &schedule.windows {
                output.push_str(&format!(
                    "  {:?} {} - {}\n",
                    window.weekday,
                    format_minute(window.open_minute),
                    format_minute(window.close_minute)
                ));
            }
        }

        output
    }

    fn format_courts(&self, courts: &[Court]) -> String {
        if courts.is_empty() {
            return "No courts found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Surface", "Per hour", "Address"]);

        for court in courts {
            builder.push_record(vec![
                court.id.to_string(),
                court.name.clone(),
                format!("{:?}", court.surface_type),
                format_price(court.price_per_hour),
                court.address.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_user(&self, user: &UserProfile) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:     {}\n", user.id));
        output.push_str(&format!("Email:  {}\n", user.email));

        let name = display_name(user);
        if !name.is_empty() {
            output.push_str(&format!("Name:   {name}\n"));
        }
        if let Some(phone) = &user.phone {
            output.push_str(&format!("Phone:  {phone}\n"));
        }
        if let Some(role) = user.role {
            output.push_str(&format!("Role:   {role:?}\n"));
        }
        if let Some(joined_at) = user.joined_at {
            output.push_str(&format!("Joined: {}\n", format_timestamp(joined_at)));
        }

        output
    }

    fn format_seed(&self, report: &SeedReport) -> String {
        let mut output = format!(
            "Seeded {} courts for {} (removed {})\n",
            report.court_ids.len(),
            report.owner_id,
            report.removed_courts
        );
        for id in &report.court_ids {
            output.push_str(&format!("  {id}\n"));
        }
        output
    }

    fn format_ack(&self, action: &str, kind: &str, id: &RecordId) -> String {
        format!("✓ {} {kind}: {id}", capitalize(action))
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {error}")
    }
}

/// Plain text output formatter.
///
/// One record per line, fields separated by single spaces.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_listing(&self, listing: &Listing) -> String {
        format!(
            "{} {} {} {} {}",
            listing.id,
            listing.status.as_str(),
            listing.user_price,
            listing.owner_id,
            listing.title
        )
    }

    fn format_listings(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return "No listings found.".to_string();
        }
        listings
            .iter()
            .map(|listing| self.format_listing(listing))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_court(&self, court: &Court) -> String {
        format!(
            "{} {:?} {} {}",
            court.id, court.surface_type, court.price_per_hour, court.name
        )
    }

    fn format_courts(&self, courts: &[Court]) -> String {
        if courts.is_empty() {
            return "No courts found.".to_string();
        }
        courts
            .iter()
            .map(|court| self.format_court(court))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_user(&self, user: &UserProfile) -> String {
        format!("{} {}", user.id, user.email)
    }

    fn format_seed(&self, report: &SeedReport) -> String {
        report
            .court_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_ack(&self, _action: &str, _kind: &str, id: &RecordId) -> String {
        id.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {error}")
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
///
/// # Returns
/// A boxed OutputFormatter instance; unknown names fall back to tables.
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}

fn format_price(amount: f64) -> String {
    format!("{amount:.2}")
}

fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

fn format_minute(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn display_name(user: &UserProfile) -> String {
    [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
