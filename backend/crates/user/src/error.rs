//! User Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::i18n::{MessageKey, common};
use kernel::messages::MappingError;
use kernel::validation::Violation;
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Violation(#[from] Violation),

    #[error("Record mapping failed: {0}")]
    Mapping(#[from] MappingError),

    #[error("Unsupported aggregate type: {0}")]
    UnsupportedAggregateType(String),

    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Violation(v) => v.kind(),
            UserError::Mapping(MappingError::InvalidIdentifier(_))
            | UserError::UnsupportedAggregateType(_)
            | UserError::Payload(_) => ErrorKind::BadRequest,
            UserError::Mapping(_) => ErrorKind::UnprocessableEntity,
            UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            UserError::Violation(v) => v.message_key(),
            UserError::Mapping(MappingError::InvalidIdentifier(_)) => {
                common::COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED
            }
            UserError::UnsupportedAggregateType(_) | UserError::Payload(_) => {
                common::COMMON_VALIDATION_ERROR_INVALID_PAYLOAD
            }
            _ => self.kind().default_key(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            UserError::Violation(v) => v.to_app_error(),
            UserError::Mapping(MappingError::InvalidIdentifier(e)) => {
                AppError::new(self.kind(), self.message_key()).with_params([e.input.clone()])
            }
            _ => AppError::new(self.kind(), self.message_key()),
        }
    }

    pub fn log(&self) {
        match self {
            UserError::Internal(msg) => tracing::error!(message = %msg, "User internal error"),
            UserError::Violation(v) => {
                tracing::warn!(key = %v.message_key(), error = %v, "User precondition violated");
            }
            _ => tracing::warn!(error = %self, "User record rejected"),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.log();
        err.to_app_error()
    }
}

impl From<AppError> for UserError {
    fn from(err: AppError) -> Self {
        UserError::Internal(err.to_string())
    }
}
