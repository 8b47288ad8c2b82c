// Rust guideline compliant 2026-10-16

//! Tests for the output formatters.

use serde_json::Value;
use tennisfinder_app::AppError;
use tennisfinder_cli::create_formatter;
use tennisfinder_core::{Listing, ListingStatus, RecordId, UserId};

fn listing(id: &str, title: &str, status: ListingStatus) -> Listing {
    Listing {
        id: RecordId::new(id),
        owner_id: UserId::new("usr_0123456789abcdef"),
        title: title.to_string(),
        description: "Lightly used".to_string(),
        category: "racket".to_string(),
        condition: "used".to_string(),
        brand: "Head".to_string(),
        model: "Speed".to_string(),
        flaw: String::new(),
        age_months: 12,
        original_price: 220.0,
        user_price: 95.5,
        predicted_sold_price: None,
        ai_label: None,
        images: Vec::new(),
        status,
        created_at: 0,
    }
}

#[test]
fn test_json_list_is_wrapped_in_envelope() {
    let formatter = create_formatter("json");
    let output = formatter.format_listings(&[
        listing("lst_aaaaaaaaaaaaaaaa", "Newer", ListingStatus::Available),
        listing("lst_bbbbbbbbbbbbbbbb", "Older", ListingStatus::Sold),
    ]);

    let body: Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["result"]["total"], 2);
    assert_eq!(body["result"]["listings"][0]["title"], "Newer");
    assert_eq!(body["result"]["listings"][1]["status"], "Sold");
}

#[test]
fn test_json_error_envelope_carries_code_and_details() {
    let formatter = create_formatter("json");
    let output = formatter.format_error(&AppError::Forbidden {
        kind: "Listing",
        id: "lst_aaaaaaaaaaaaaaaa".to_string(),
    });

    let body: Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["details"]["id"], "lst_aaaaaaaaaaaaaaaa");
}

#[test]
fn test_table_listing_shows_prices_and_status() {
    let formatter = create_formatter("table");
    let output = formatter.format_listing(&listing(
        "lst_aaaaaaaaaaaaaaaa",
        "Speed MP",
        ListingStatus::Available,
    ));

    assert!(output.contains("Speed MP"));
    assert!(output.contains("95.50"));
    assert!(output.contains("Available"));
    assert!(!output.contains("Flaw:"), "empty flaw is omitted");
}

#[test]
fn test_table_list_renders_rows() {
    let formatter = create_formatter("table");
    let output = formatter.format_listings(&[listing(
        "lst_aaaaaaaaaaaaaaaa",
        "Speed MP",
        ListingStatus::Sold,
    )]);

    assert!(output.contains("lst_aaaaaaaaaaaaaaaa"));
    assert!(output.contains("Sold"));
    assert!(output.contains("1970-01-01 00:00"));
}

#[test]
fn test_empty_lists_have_a_message() {
    assert_eq!(create_formatter("table").format_listings(&[]), "No listings found.");
    assert_eq!(create_formatter("plain").format_courts(&[]), "No courts found.");
}

#[test]
fn test_plain_ack_is_just_the_id() {
    let formatter = create_formatter("plain");
    let id = RecordId::new("crt_aaaaaaaaaaaaaaaa");
    assert_eq!(formatter.format_ack("deleted", "court", &id), "crt_aaaaaaaaaaaaaaaa");
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let output = create_formatter("yaml").format_error(&AppError::Unauthenticated);
    assert!(output.starts_with("Error: "));
}
