//! Company Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::i18n::{MessageKey, common};
use kernel::messages::MappingError;
use kernel::validation::Violation;
use thiserror::Error;

pub type CompanyResult<T> = Result<T, CompanyError>;

#[derive(Debug, Error)]
pub enum CompanyError {
    #[error(transparent)]
    Violation(#[from] Violation),

    #[error("Record mapping failed: {0}")]
    Mapping(#[from] MappingError),

    /// Record key names an aggregate type of another context
    #[error("Unsupported aggregate type: {0}")]
    UnsupportedAggregateType(String),

    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CompanyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompanyError::Violation(v) => v.kind(),
            CompanyError::Mapping(MappingError::InvalidIdentifier(_))
            | CompanyError::UnsupportedAggregateType(_)
            | CompanyError::Payload(_) => ErrorKind::BadRequest,
            CompanyError::Mapping(_) => ErrorKind::UnprocessableEntity,
            CompanyError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            CompanyError::Violation(v) => v.message_key(),
            CompanyError::Mapping(MappingError::InvalidIdentifier(_)) => {
                common::COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED
            }
            CompanyError::UnsupportedAggregateType(_) | CompanyError::Payload(_) => {
                common::COMMON_VALIDATION_ERROR_INVALID_PAYLOAD
            }
            _ => self.kind().default_key(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            CompanyError::Violation(v) => v.to_app_error(),
            CompanyError::Mapping(MappingError::InvalidIdentifier(e)) => {
                AppError::new(self.kind(), self.message_key()).with_params([e.input.clone()])
            }
            _ => AppError::new(self.kind(), self.message_key()),
        }
    }

    pub fn log(&self) {
        match self {
            CompanyError::Internal(msg) => {
                tracing::error!(message = %msg, "Company internal error");
            }
            CompanyError::Violation(v) => {
                tracing::warn!(key = %v.message_key(), error = %v, "Company precondition violated");
            }
            _ => tracing::warn!(error = %self, "Company record rejected"),
        }
    }
}

impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        err.log();
        err.to_app_error()
    }
}

impl From<AppError> for CompanyError {
    fn from(err: AppError) -> Self {
        CompanyError::Internal(err.to_string())
    }
}
