//! Project Context
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, preconditions, repository traits
//! - `messages/` - Event records of the project topic
//! - `mapper/` - Record → entity conversion
//! - `application/` - Record routing, projector, lookups
//! - `infra/` - Repository implementations
//!
//! ## Aggregates
//! Project with its tasks, day cards, milestones, participants, topics,
//! relations, work areas, project crafts and task constraint selections.
//!
//! ## Stored codes
//! Task status and milestone type are stored by ordinal, every other enum
//! by name. Unknown stored codes abort (see `kernel::code`).

pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infra;
pub mod mapper;
pub mod messages;


// Re-exports for convenience
pub use application::{ProjectContextEvent, ProjectProjector, Projection, ProjectionLookup};
pub use error::{ProjectError, ProjectResult};
pub use infra::memory::InMemoryProjectionRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
