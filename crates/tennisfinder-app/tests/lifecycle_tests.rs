// Rust guideline compliant 2026-10-15

//! Listing lifecycle tests against the in-memory store.
//!
//! These cover creation, ownership enforcement, check ordering, and the
//! status toggle.

use tennisfinder_app::{
    AppError, Anonymous, ErrorCode, ListingManager, ListingQueries, ManualClock,
};
use tennisfinder_core::{
    Config, ListingInput, ListingPatch, ListingStatus, MemoryStore, RecordId, UserId,
};

const NOW: i64 = 1_700_000_000_000;

fn sample_input() -> ListingInput {
    ListingInput {
        title: "Pro Staff 97".to_string(),
        description: "Lightly used racket".to_string(),
        category: "racket".to_string(),
        condition: "good".to_string(),
        brand: "Wilson".to_string(),
        model: "Pro Staff 97 v14".to_string(),
        flaw: "small scratch on frame".to_string(),
        age_months: 8,
        original_price: 100.0,
        user_price: 40.0,
        images: vec!["img_1".to_string()],
    }
}

fn setup() -> (
    ListingManager<MemoryStore, ManualClock>,
    ListingQueries<MemoryStore>,
    ManualClock,
) {
    let store = MemoryStore::new();
    let clock = ManualClock::new(NOW);
    let manager = ListingManager::with_clock(store.clone(), clock.clone());
    let queries = ListingQueries::new(store, &Config::default());
    (manager, queries, clock)
}

#[test]
fn test_create_assigns_owner_status_and_timestamp() {
    let (manager, queries, _) = setup();
    let u = UserId::new("usr_u");

    let id = manager.create(&u, &sample_input()).expect("create");
    let listing = queries
        .get_by_id(&id)
        .expect("get")
        .expect("listing exists");

    assert_eq!(listing.id, id);
    assert_eq!(listing.owner_id, u);
    assert_eq!(listing.status, ListingStatus::Available);
    assert_eq!(listing.created_at, NOW);
    assert_eq!(listing.original_price, 100.0);
    assert_eq!(listing.user_price, 40.0);
    assert_eq!(listing.images, vec!["img_1".to_string()]);
    assert!(listing.predicted_sold_price.is_none());
}

#[test]
fn test_create_requires_caller() {
    let (manager, _, _) = setup();
    let err = manager
        .create(&Anonymous, &sample_input())
        .expect_err("anonymous create must fail");
    assert!(matches!(err, AppError::Unauthenticated));
    assert_eq!(err.code(), ErrorCode::Unauthenticated);
}

#[test]
fn test_create_is_not_idempotent() {
    let (manager, queries, _) = setup();
    let u = UserId::new("usr_u");

    let first = manager.create(&u, &sample_input()).expect("create");
    let second = manager.create(&u, &sample_input()).expect("create");

    assert_ne!(first, second);
    assert_eq!(queries.list_mine(&u).expect("list").len(), 2);
}

#[test]
fn test_create_rejects_negative_price() {
    let (manager, _, _) = setup();
    let mut input = sample_input();
    input.user_price = -1.0;

    let err = manager
        .create(&UserId::new("usr_u"), &input)
        .expect_err("negative price must fail");
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_non_owner_update_is_forbidden_and_leaves_record_unchanged() {
    let (manager, queries, _) = setup();
    let u = UserId::new("usr_u");
    let v = UserId::new("usr_v");
    let id = manager.create(&u, &sample_input()).expect("create");
    let before = queries.get_by_id(&id).expect("get");

    let patch = ListingPatch {
        title: Some("Stolen".to_string()),
        ..ListingPatch::default()
    };
    let err = manager.update(&v, &id, &patch).expect_err("must fail");

    assert!(matches!(err, AppError::Forbidden { .. }));
    assert_eq!(queries.get_by_id(&id).expect("get"), before);
}

#[test]
fn test_non_owner_delete_and_toggle_are_forbidden() {
    let (manager, queries, _) = setup();
    let u = UserId::new("usr_u");
    let v = UserId::new("usr_v");
    let id = manager.create(&u, &sample_input()).expect("create");

    let delete = manager.delete(&v, &id).expect_err("delete must fail");
    let toggle = manager.toggle_status(&v, &id).expect_err("toggle must fail");

    assert_eq!(delete.code(), ErrorCode::Forbidden);
    assert_eq!(toggle.code(), ErrorCode::Forbidden);
    let listing = queries.get_by_id(&id).expect("get").expect("still present");
    assert_eq!(listing.status, ListingStatus::Available);
}

#[test]
fn test_missing_id_is_not_found_before_ownership() {
    let (manager, _, _) = setup();
    let v = UserId::new("usr_v");
    let missing = RecordId::new("lst_0000000000000000");

    let update = manager
        .update(&v, &missing, &ListingPatch::default())
        .expect_err("must fail");
    let delete = manager.delete(&v, &missing).expect_err("must fail");
    let toggle = manager.toggle_status(&v, &missing).expect_err("must fail");

    for err in [update, delete, toggle] {
        assert!(
            matches!(err, AppError::NotFound { kind: "Listing", .. }),
            "expected NotFound, got {err:?}"
        );
    }
}

#[test]
fn test_unauthenticated_precedes_not_found() {
    let (manager, _, _) = setup();
    let missing = RecordId::new("lst_0000000000000000");

    let err = manager
        .delete(&Anonymous, &missing)
        .expect_err("must fail");
    assert!(matches!(err, AppError::Unauthenticated));
}

#[test]
fn test_forbidden_precedes_validation() {
    let (manager, _, _) = setup();
    let u = UserId::new("usr_u");
    let v = UserId::new("usr_v");
    let id = manager.create(&u, &sample_input()).expect("create");

    let patch = ListingPatch {
        user_price: Some(f64::NAN),
        ..ListingPatch::default()
    };
    let err = manager.update(&v, &id, &patch).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Forbidden);

    let err = manager.update(&u, &id, &patch).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_owner_update_changes_only_patched_fields() {
    let (manager, queries, clock) = setup();
    let u = UserId::new("usr_u");
    let id = manager.create(&u, &sample_input()).expect("create");
    clock.advance(10_000);

    let patch = ListingPatch {
        user_price: Some(35.0),
        predicted_sold_price: Some(38.5),
        ai_label: Some("fair".to_string()),
        ..ListingPatch::default()
    };
    manager.update(&u, &id, &patch).expect("update");

    let listing = queries.get_by_id(&id).expect("get").expect("present");
    assert_eq!(listing.user_price, 35.0);
    assert_eq!(listing.predicted_sold_price, Some(38.5));
    assert_eq!(listing.ai_label.as_deref(), Some("fair"));
    assert_eq!(listing.title, "Pro Staff 97");
    assert_eq!(listing.owner_id, u);
    assert_eq!(listing.created_at, NOW);
    assert_eq!(listing.status, ListingStatus::Available);
}

#[test]
fn test_toggle_is_self_inverse_and_updates_views() {
    let (manager, queries, _) = setup();
    let u = UserId::new("usr_u");
    let id = manager.create(&u, &sample_input()).expect("create");

    manager.toggle_status(&u, &id).expect("toggle");
    let sold = queries.get_by_id(&id).expect("get").expect("present");
    assert_eq!(sold.status, ListingStatus::Sold);
    assert!(queries.list_available().expect("list").is_empty());
    assert_eq!(queries.list_mine(&u).expect("list").len(), 1);

    manager.toggle_status(&u, &id).expect("toggle");
    let available = queries.get_by_id(&id).expect("get").expect("present");
    assert_eq!(available.status, ListingStatus::Available);
    assert_eq!(queries.list_available().expect("list").len(), 1);
}

#[test]
fn test_delete_is_permanent() {
    let (manager, queries, _) = setup();
    let u = UserId::new("usr_u");
    let id = manager.create(&u, &sample_input()).expect("create");

    manager.delete(&u, &id).expect("delete");

    assert!(queries.get_by_id(&id).expect("get").is_none());
    let again = manager.delete(&u, &id).expect_err("second delete must fail");
    assert_eq!(again.code(), ErrorCode::NotFound);
}

#[test]
fn test_created_at_stays_monotonic_when_clock_steps_back() {
    let (manager, queries, clock) = setup();
    let u = UserId::new("usr_u");
    manager.create(&u, &sample_input()).expect("create");
    clock.set(NOW - 60_000);
    let later = manager.create(&u, &sample_input()).expect("create");

    let listing = queries.get_by_id(&later).expect("get").expect("present");
    assert_eq!(listing.created_at, NOW);
    assert_eq!(queries.list_mine(&u).expect("list")[0].id, later);
}
