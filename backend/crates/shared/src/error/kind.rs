//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes at the
//! boundary layer.

use serde::Serialize;

use crate::i18n::{MessageKey, common};

/// Error classification
///
/// Each variant maps to an RFC 9110 status code so a boundary layer can
/// render it without inspecting the domain error.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - validation or precondition failure
    BadRequest,
    /// 401 - no authenticated caller
    Unauthorized,
    /// 403 - authorization check failed
    Forbidden,
    /// 404 - referenced aggregate does not exist
    NotFound,
    /// 409 - stale version or duplicate
    Conflict,
    /// 412 - required state missing (e.g. company without address)
    PreconditionFailed,
    /// 422 - payload well-formed but semantically unusable
    UnprocessableEntity,
    /// 500 - bug or schema drift
    InternalServerError,
    /// 503 - dependency unavailable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::PreconditionFailed.status_code(), 412);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::PreconditionFailed => 412,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::PreconditionFailed => "Precondition Failed",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Key used when an error of this kind has no more specific one
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::NotFound.default_key().as_str(), "COMMON_ERROR_NOT_FOUND");
    /// ```
    pub const fn default_key(&self) -> MessageKey {
        match self {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                common::COMMON_VALIDATION_ERROR_INVALID_PAYLOAD
            }
            ErrorKind::Unauthorized | ErrorKind::Forbidden => common::COMMON_ERROR_ACCESS_DENIED,
            ErrorKind::NotFound => common::COMMON_ERROR_NOT_FOUND,
            ErrorKind::Conflict => common::COMMON_VALIDATION_ERROR_DATA_INTEGRITY_VIOLATED,
            ErrorKind::PreconditionFailed => common::COMMON_VALIDATION_ERROR_DATA_INTEGRITY_VIOLATED,
            ErrorKind::InternalServerError => common::SERVER_ERROR_INTERNAL_SERVER_ERROR,
            ErrorKind::ServiceUnavailable => common::SERVER_ERROR_SERVICE_UNAVAILABLE,
        }
    }

    /// 5xx errors should be logged by whoever handles them
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::PreconditionFailed.status_code(), 412);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_server_client_split() {
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::PreconditionFailed.is_client_error());
        assert!(!ErrorKind::ServiceUnavailable.is_client_error());
    }

    #[test]
    fn test_default_keys() {
        assert_eq!(
            ErrorKind::NotFound.default_key(),
            common::COMMON_ERROR_NOT_FOUND
        );
        assert_eq!(
            ErrorKind::InternalServerError.default_key().as_str(),
            "SERVER_ERROR_INTERNAL_SERVER_ERROR"
        );
    }
}
