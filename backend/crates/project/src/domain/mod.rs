//! Domain Layer
//!
//! Contains entities, value objects, preconditions and repository traits.

pub mod entity;
pub mod precondition;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::projection::{ChildKey, ProjectChild, ProjectProjection, ProjectVersion};
pub use repository::{LocalProjectionRepository, ProjectionRepository};
