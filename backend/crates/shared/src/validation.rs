//! Precondition Guards
//!
//! Command handling checks a snapshot before changing it. A failed check is a
//! [`Violation`] carrying a [`MessageKey`]; the caller decides whether to abort
//! or hand the key to the client.
//!
//! ```
//! use kernel::i18n::MessageKey;
//! use kernel::validation::{Guard, Versioned};
//!
//! struct Card { version: i64, open: bool }
//! impl Versioned for Card {
//!     fn version(&self) -> i64 { self.version }
//! }
//!
//! const NOT_OPEN: MessageKey = MessageKey::new("DAY_CARD_VALIDATION_ERROR_NOT_OPEN");
//!
//! let card = Card { version: 3, open: false };
//! let result = Guard::of(&card)
//!     .version_matches(3)
//!     .and_then(|g| g.precondition(|c| c.open, NOT_OPEN));
//! assert_eq!(result.err().map(|v| v.message_key()), Some(NOT_OPEN));
//! ```

use thiserror::Error;

use crate::error::app_error::AppError;
use crate::error::kind::ErrorKind;
use crate::i18n::{MessageKey, common};

/// Outcome of a failed guard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Business rule does not allow the operation in the current state
    #[error("precondition violated: {key}")]
    Precondition {
        key: MessageKey,
        params: Vec<String>,
    },

    /// Caller is not allowed to perform the operation
    #[error("access denied: {key}")]
    AccessDenied { key: MessageKey },

    /// Caller acted on a stale version of the aggregate
    #[error("entity outdated: expected version {expected}, current version {current}")]
    EntityOutdated { expected: i64, current: i64 },

    /// Referenced aggregate does not exist
    #[error("{key}: {identifier}")]
    NotFound { key: MessageKey, identifier: String },
}

impl Violation {
    pub fn precondition(key: MessageKey) -> Self {
        Self::Precondition {
            key,
            params: Vec::new(),
        }
    }

    pub fn not_found(key: MessageKey, identifier: impl ToString) -> Self {
        Self::NotFound {
            key,
            identifier: identifier.to_string(),
        }
    }

    /// Attach positional message parameters (precondition violations only)
    pub fn with_params<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            Self::Precondition { key, mut params } => {
                params.extend(values.into_iter().map(Into::into));
                Self::Precondition { key, params }
            }
            other => other,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::Precondition { key, .. }
            | Self::AccessDenied { key }
            | Self::NotFound { key, .. } => *key,
            Self::EntityOutdated { .. } => common::COMMON_VALIDATION_ERROR_ENTITY_OUTDATED,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Precondition { .. } => ErrorKind::BadRequest,
            Self::AccessDenied { .. } => ErrorKind::Forbidden,
            Self::EntityOutdated { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.message_key());
        match self {
            Self::Precondition { params, .. } => err.with_params(params.iter().cloned()),
            Self::NotFound { identifier, .. } => err.with_params([identifier.clone()]),
            _ => err,
        }
    }
}

impl From<Violation> for AppError {
    fn from(violation: Violation) -> Self {
        violation.to_app_error()
    }
}

/// Fail with `key` unless `condition` holds.
#[inline]
pub fn ensure(condition: bool, key: MessageKey) -> Result<(), Violation> {
    if condition {
        Ok(())
    } else {
        Err(Violation::precondition(key))
    }
}

/// Aggregates that carry an optimistic-locking version
pub trait Versioned {
    fn version(&self) -> i64;
}

/// Chainable checks over a borrowed snapshot
#[derive(Debug)]
pub struct Guard<'a, T> {
    subject: &'a T,
}

impl<'a, T> Guard<'a, T> {
    pub fn of(subject: &'a T) -> Self {
        Self { subject }
    }

    pub fn precondition<F>(self, check: F, key: MessageKey) -> Result<Self, Violation>
    where
        F: FnOnce(&T) -> bool,
    {
        if check(self.subject) {
            Ok(self)
        } else {
            Err(Violation::precondition(key))
        }
    }

    pub fn authorization<F>(self, check: F, key: MessageKey) -> Result<Self, Violation>
    where
        F: FnOnce(&T) -> bool,
    {
        if check(self.subject) {
            Ok(self)
        } else {
            Err(Violation::AccessDenied { key })
        }
    }

    pub fn into_inner(self) -> &'a T {
        self.subject
    }
}

impl<T: Versioned> Guard<'_, T> {
    /// The caller must have seen the current version.
    pub fn version_matches(self, expected: i64) -> Result<Self, Violation> {
        let current = self.subject.version();
        if current == expected {
            Ok(self)
        } else {
            Err(Violation::EntityOutdated { expected, current })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_OPEN: MessageKey = MessageKey::new("TEST_NOT_OPEN");
    const NOT_ALLOWED: MessageKey = MessageKey::new("TEST_NOT_ALLOWED");

    #[derive(Debug)]
    struct Snapshot {
        version: i64,
        open: bool,
    }

    impl Versioned for Snapshot {
        fn version(&self) -> i64 {
            self.version
        }
    }

    #[test]
    fn test_ensure() {
        assert!(ensure(true, NOT_OPEN).is_ok());
        assert_eq!(
            ensure(false, NOT_OPEN).unwrap_err(),
            Violation::precondition(NOT_OPEN)
        );
    }

    #[test]
    fn test_guard_passes() {
        let snapshot = Snapshot {
            version: 2,
            open: true,
        };
        let guard = Guard::of(&snapshot)
            .version_matches(2)
            .and_then(|g| g.precondition(|s| s.open, NOT_OPEN))
            .and_then(|g| g.authorization(|_| true, NOT_ALLOWED))
            .unwrap();
        assert_eq!(guard.into_inner().version, 2);
    }

    #[test]
    fn test_outdated_version() {
        let snapshot = Snapshot {
            version: 5,
            open: true,
        };
        let err = Guard::of(&snapshot).version_matches(4).unwrap_err();
        assert_eq!(
            err,
            Violation::EntityOutdated {
                expected: 4,
                current: 5
            }
        );
        assert_eq!(
            err.message_key(),
            common::COMMON_VALIDATION_ERROR_ENTITY_OUTDATED
        );
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_first_failure_wins() {
        let snapshot = Snapshot {
            version: 1,
            open: false,
        };
        let err = Guard::of(&snapshot)
            .precondition(|s| s.open, NOT_OPEN)
            .and_then(|g| g.authorization(|_| false, NOT_ALLOWED))
            .unwrap_err();
        assert_eq!(err.message_key(), NOT_OPEN);
    }

    #[test]
    fn test_authorization_maps_to_forbidden() {
        let snapshot = Snapshot {
            version: 1,
            open: true,
        };
        let err = Guard::of(&snapshot)
            .authorization(|_| false, NOT_ALLOWED)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.to_app_error().status_code(), 403);
    }

    #[test]
    fn test_params_are_carried_to_app_error() {
        let err = Violation::precondition(NOT_OPEN).with_params(["a", "b"]);
        let app = err.to_app_error();
        assert_eq!(app.message_key(), NOT_OPEN);
        assert_eq!(app.params(), ["a".to_string(), "b".to_string()]);

        let not_found = Violation::not_found(NOT_OPEN, 42);
        assert_eq!(not_found.to_app_error().params(), ["42".to_string()]);
    }
}
