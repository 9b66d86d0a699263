//! Message Keys
//!
//! Validation failures never carry prose. They carry a key that the client
//! (or a later rendering step) resolves against its own translation bundle,
//! plus positional parameters.

use std::fmt;

use serde::Serialize;

/// Translation key for a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageKey(&'static str);

impl MessageKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Keys shared by every bounded context
pub mod common {
    use super::MessageKey;

    pub const COMMON_VALIDATION_ERROR_ENTITY_OUTDATED: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_ENTITY_OUTDATED");
    pub const COMMON_VALIDATION_ERROR_ENTITY_DUPLICATED: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_ENTITY_DUPLICATED");
    pub const COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED");
    pub const COMMON_VALIDATION_ERROR_DATA_INTEGRITY_VIOLATED: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_DATA_INTEGRITY_VIOLATED");
    pub const COMMON_VALIDATION_ERROR_OPTIMISTIC_LOCKING: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_OPTIMISTIC_LOCKING");
    pub const COMMON_VALIDATION_ERROR_PROJECT_NOT_FOUND: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_PROJECT_NOT_FOUND");
    pub const COMMON_VALIDATION_ERROR_INVALID_PAYLOAD: MessageKey =
        MessageKey::new("COMMON_VALIDATION_ERROR_INVALID_PAYLOAD");
    pub const SERVER_ERROR_BAD_REQUEST: MessageKey = MessageKey::new("SERVER_ERROR_BAD_REQUEST");
    pub const SERVER_ERROR_INTERNAL_SERVER_ERROR: MessageKey =
        MessageKey::new("SERVER_ERROR_INTERNAL_SERVER_ERROR");
    pub const SERVER_ERROR_SERVICE_UNAVAILABLE: MessageKey =
        MessageKey::new("SERVER_ERROR_SERVICE_UNAVAILABLE");
    pub const COMMON_ERROR_NOT_FOUND: MessageKey = MessageKey::new("COMMON_ERROR_NOT_FOUND");
    pub const COMMON_ERROR_ACCESS_DENIED: MessageKey =
        MessageKey::new("COMMON_ERROR_ACCESS_DENIED");
}
