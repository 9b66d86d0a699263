//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from kernel and library errors to
//! [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;
use crate::code::CodeMismatch;
use crate::id::IdParseError;
use crate::i18n::common;
use crate::messages::MappingError;

// ============================================================================
// Kernel conversions
// ============================================================================

impl From<IdParseError> for AppError {
    fn from(err: IdParseError) -> Self {
        AppError::bad_request(common::COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED)
            .with_params([err.input.clone()])
            .with_source(err)
    }
}

impl From<CodeMismatch> for AppError {
    fn from(err: CodeMismatch) -> Self {
        AppError::internal().with_source(err)
    }
}

impl From<MappingError> for AppError {
    fn from(err: MappingError) -> Self {
        match err {
            MappingError::InvalidIdentifier(e) => e.into(),
            other => AppError::of_kind(ErrorKind::UnprocessableEntity).with_source(other),
        }
    }
}

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            std::io::ErrorKind::TimedOut => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::InternalServerError,
        };
        AppError::of_kind(kind).with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request(common::COMMON_VALIDATION_ERROR_INVALID_PAYLOAD).with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request(common::COMMON_VALIDATION_ERROR_INVALID_PAYLOAD).with_source(err)
        } else {
            AppError::internal().with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                AppError::not_found(common::COMMON_ERROR_NOT_FOUND).with_source(err)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::service_unavailable().with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23505") => {
                        AppError::conflict(common::COMMON_VALIDATION_ERROR_ENTITY_DUPLICATED)
                    }
                    Some("23000" | "23001" | "23502" | "23503" | "23514") => {
                        AppError::conflict(common::COMMON_VALIDATION_ERROR_DATA_INTEGRITY_VIOLATED)
                    }
                    Some("40001") => {
                        AppError::conflict(common::COMMON_VALIDATION_ERROR_OPTIMISTIC_LOCKING)
                    }
                    Some("53000" | "53100" | "53200" | "53300" | "57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable()
                    }
                    _ => AppError::internal(),
                };
                app_err.with_source(err)
            }
            _ => AppError::internal().with_source(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{Id, markers};

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_err: Result<i32, _> = "abc".parse();
        let app_err: AppError = parse_err.unwrap_err().into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_id_parse_error_is_client_error() {
        let err = Id::<markers::User>::parse_str("not-a-uuid").unwrap_err();
        let app_err: AppError = err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
        assert_eq!(
            app_err.message_key(),
            common::COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED
        );
        assert_eq!(app_err.params(), ["not-a-uuid".to_string()]);
    }

    #[test]
    fn test_code_mismatch_is_server_error() {
        let err = CodeMismatch::Ordinal {
            enum_name: "TaskStatus",
            ordinal: 9,
        };
        let app_err: AppError = err.into();
        assert!(app_err.is_server_error());
    }
}
