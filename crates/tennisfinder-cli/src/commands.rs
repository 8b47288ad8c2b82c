// Rust guideline compliant 2026-10-16

//! Command implementations for the TennisFinder CLI.

pub mod court;
pub mod listing;
pub mod seed;
pub mod user;

use tennisfinder_app::AppError;
use tennisfinder_core::UserId;

/// Resolves the `--as` flag into the caller identity.
///
/// An empty value counts as no caller.
#[must_use]
pub fn caller_from_flag(value: Option<&str>) -> Option<UserId> {
    value
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(UserId::new)
}

/// Converts an error raised anywhere in the CLI into an application error,
/// so it can be reported through the error envelope.
#[must_use]
pub fn into_app_error(error: anyhow::Error) -> AppError {
    match error.downcast::<AppError>() {
        Ok(app) => app,
        Err(other) => match other.downcast::<tennisfinder_core::Error>() {
            Ok(core) => AppError::from(core),
            Err(other) => match other.downcast::<std::io::Error>() {
                Ok(io) => AppError::Core(tennisfinder_core::Error::Io(io)),
                Err(other) => AppError::InvalidInput(other.to_string()),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tennisfinder_app::ErrorCode;

    #[test]
    fn test_blank_caller_is_anonymous() {
        assert_eq!(caller_from_flag(None), None);
        assert_eq!(caller_from_flag(Some("  ")), None);
        assert_eq!(
            caller_from_flag(Some("usr_0123456789abcdef")),
            Some(UserId::new("usr_0123456789abcdef"))
        );
    }

    #[test]
    fn test_into_app_error_keeps_app_errors() {
        let error = anyhow::Error::from(AppError::Unauthenticated);
        assert_eq!(into_app_error(error).code(), ErrorCode::Unauthenticated);
    }

    #[test]
    fn test_into_app_error_maps_core_validation() {
        let error = anyhow::Error::from(tennisfinder_core::Error::Validation("bad".to_string()));
        assert_eq!(into_app_error(error).code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_into_app_error_maps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(
            into_app_error(anyhow::Error::from(io)).code(),
            ErrorCode::IoError
        );
    }
}
