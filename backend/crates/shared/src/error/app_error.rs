//! Application Error - Unified error type at the boundary
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias. Domain crates
//! keep their own `thiserror` enums and convert into `AppError` when the
//! error leaves the domain.

use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use crate::i18n::MessageKey;

/// Unified application error
///
/// ## Fields
/// * `kind` - classification (maps to an HTTP status)
/// * `key` - translation key resolved by the client
/// * `params` - positional parameters for the translated message
/// * `source` - original error, for logs only
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
/// use kernel::i18n::MessageKey;
///
/// const NOT_FOUND: MessageKey = MessageKey::new("TASK_VALIDATION_ERROR_NOT_FOUND");
///
/// let err = AppError::not_found(NOT_FOUND).with_params(["4711"]);
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.to_string(), "[Not Found] TASK_VALIDATION_ERROR_NOT_FOUND (4711)");
/// ```
pub struct AppError {
    kind: ErrorKind,
    key: MessageKey,
    params: Vec<String>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    #[inline]
    pub fn new(kind: ErrorKind, key: MessageKey) -> Self {
        Self {
            kind,
            key,
            params: Vec::new(),
            source: None,
        }
    }

    /// Error of `kind` with that kind's default key
    #[inline]
    pub fn of_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_key())
    }

    #[inline]
    pub fn bad_request(key: MessageKey) -> Self {
        Self::new(ErrorKind::BadRequest, key)
    }

    #[inline]
    pub fn forbidden(key: MessageKey) -> Self {
        Self::new(ErrorKind::Forbidden, key)
    }

    #[inline]
    pub fn not_found(key: MessageKey) -> Self {
        Self::new(ErrorKind::NotFound, key)
    }

    #[inline]
    pub fn conflict(key: MessageKey) -> Self {
        Self::new(ErrorKind::Conflict, key)
    }

    #[inline]
    pub fn precondition_failed(key: MessageKey) -> Self {
        Self::new(ErrorKind::PreconditionFailed, key)
    }

    #[inline]
    pub fn internal() -> Self {
        Self::of_kind(ErrorKind::InternalServerError)
    }

    #[inline]
    pub fn service_unavailable() -> Self {
        Self::of_kind(ErrorKind::ServiceUnavailable)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Append positional message parameters
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Attach the original error (logs only, never rendered)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message_key(&self) -> MessageKey {
        self.key
    }

    #[inline]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("key", &self.key);
        if !self.params.is_empty() {
            builder.field("params", &self.params);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.key)?;
        if !self.params.is_empty() {
            write!(f, " ({})", self.params.join(", "))?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::common;

    const TASK_NOT_FOUND: MessageKey = MessageKey::new("TASK_VALIDATION_ERROR_NOT_FOUND");

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, TASK_NOT_FOUND);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message_key(), TASK_NOT_FOUND);
        assert!(err.params().is_empty());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::bad_request(TASK_NOT_FOUND).status_code(), 400);
        assert_eq!(AppError::forbidden(TASK_NOT_FOUND).status_code(), 403);
        assert_eq!(AppError::not_found(TASK_NOT_FOUND).status_code(), 404);
        assert_eq!(AppError::conflict(TASK_NOT_FOUND).status_code(), 409);
        assert_eq!(
            AppError::precondition_failed(TASK_NOT_FOUND).status_code(),
            412
        );
        assert_eq!(AppError::internal().status_code(), 500);
        assert_eq!(
            AppError::internal().message_key(),
            common::SERVER_ERROR_INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::service_unavailable().status_code(), 503);
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::internal().with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found(TASK_NOT_FOUND);
        assert_eq!(err.to_string(), "[Not Found] TASK_VALIDATION_ERROR_NOT_FOUND");

        let err = err.with_params(["a", "b"]);
        assert!(err.to_string().ends_with("(a, b)"));
    }
}
