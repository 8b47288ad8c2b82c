// Rust guideline compliant 2026-10-15

//! Tests for error codes and response envelopes.

use tennisfinder_app::{AppError, ErrorCode, ErrorEnvelope, SuccessEnvelope};
use tennisfinder_core::Error as CoreError;

#[test]
fn test_authorization_errors_have_distinct_codes() {
    let codes = [
        AppError::Unauthenticated.code(),
        AppError::NotFound {
            kind: "Listing",
            id: "lst_1".to_string(),
        }
        .code(),
        AppError::Forbidden {
            kind: "Listing",
            id: "lst_1".to_string(),
        }
        .code(),
    ];
    assert_eq!(
        codes,
        [
            ErrorCode::Unauthenticated,
            ErrorCode::NotFound,
            ErrorCode::Forbidden
        ]
    );
}

#[test]
fn test_core_validation_becomes_invalid_input() {
    let err = AppError::from(CoreError::Validation("bad price".to_string()));
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_core_errors_map_to_stable_codes() {
    let lock = AppError::from(CoreError::Lock("busy".to_string()));
    assert_eq!(lock.code(), ErrorCode::StoreError);

    let config = AppError::from(CoreError::InvalidConfig("nope".to_string()));
    assert_eq!(config.code(), ErrorCode::ConfigError);

    let disk = std::io::Error::new(std::io::ErrorKind::Other, "disk");
    let io = AppError::from(CoreError::Io(disk));
    assert_eq!(io.code(), ErrorCode::IoError);
}

#[test]
fn test_error_envelope_serializes_code_and_details() {
    let err = AppError::Forbidden {
        kind: "Court",
        id: "crt_1".to_string(),
    };
    let value = serde_json::to_value(ErrorEnvelope::from_error(&err)).expect("serialize");

    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "forbidden");
    assert_eq!(value["details"]["kind"], "Court");
    assert_eq!(value["details"]["id"], "crt_1");
    assert!(value["message"].as_str().is_some_and(|m| m.contains("crt_1")));
}

#[test]
fn test_error_envelope_omits_missing_details() {
    let value = serde_json::to_value(ErrorEnvelope::from_error(&AppError::Unauthenticated))
        .expect("serialize");
    assert_eq!(value["code"], "unauthenticated");
    assert!(value.get("details").is_none());
}

#[test]
fn test_success_envelope_wraps_result() {
    let value = serde_json::to_value(SuccessEnvelope::new(vec![1, 2])).expect("serialize");
    assert_eq!(value, serde_json::json!({ "status": "ok", "result": [1, 2] }));
}
