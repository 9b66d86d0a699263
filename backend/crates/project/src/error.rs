//! Project Error Types
//!
//! Project context error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::i18n::{MessageKey, common};
use kernel::messages::MappingError;
use kernel::validation::Violation;
use thiserror::Error;

/// Project-specific result type alias
pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(Debug, Error)]
pub enum ProjectError {
    /// Precondition, version or lookup failure
    #[error(transparent)]
    Violation(#[from] Violation),

    /// Record could not be turned into an entity
    #[error("Record mapping failed: {0}")]
    Mapping(#[from] MappingError),

    /// Record key names an aggregate type of another context
    #[error("Unsupported aggregate type: {0}")]
    UnsupportedAggregateType(String),

    /// Record value is not valid JSON for its schema
    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProjectError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectError::Violation(v) => v.kind(),
            ProjectError::Mapping(MappingError::InvalidIdentifier(_))
            | ProjectError::UnsupportedAggregateType(_)
            | ProjectError::Payload(_) => ErrorKind::BadRequest,
            ProjectError::Mapping(_) => ErrorKind::UnprocessableEntity,
            ProjectError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            ProjectError::Violation(v) => v.message_key(),
            ProjectError::Mapping(MappingError::InvalidIdentifier(_)) => {
                common::COMMON_VALIDATION_ERROR_IDENTIFIER_TYPE_NOT_SUPPORTED
            }
            ProjectError::UnsupportedAggregateType(_) | ProjectError::Payload(_) => {
                common::COMMON_VALIDATION_ERROR_INVALID_PAYLOAD
            }
            _ => self.kind().default_key(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProjectError::Violation(v) => v.to_app_error(),
            ProjectError::Mapping(MappingError::InvalidIdentifier(e)) => {
                AppError::new(self.kind(), self.message_key()).with_params([e.input.clone()])
            }
            _ => AppError::new(self.kind(), self.message_key()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ProjectError::Internal(msg) => {
                tracing::error!(message = %msg, "Project internal error");
            }
            ProjectError::Violation(v) => {
                tracing::warn!(key = %v.message_key(), error = %v, "Project precondition violated");
            }
            ProjectError::Mapping(_)
            | ProjectError::Payload(_)
            | ProjectError::UnsupportedAggregateType(_) => {
                tracing::warn!(error = %self, "Project record rejected");
            }
        }
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        err.log();
        err.to_app_error()
    }
}

impl From<AppError> for ProjectError {
    fn from(err: AppError) -> Self {
        ProjectError::Internal(err.to_string())
    }
}
