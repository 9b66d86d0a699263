//! Repository Traits
//!
//! Interfaces for projection persistence. Implementation is in infrastructure layer.

use crate::domain::entity::projection::{ChildKey, ProjectChild, ProjectProjection};
use crate::domain::value_object::ids::ProjectId;
use crate::error::ProjectResult;

/// Projection repository trait
#[trait_variant::make(ProjectionRepository: Send)]
pub trait LocalProjectionRepository {
    /// Find the projection of a project
    async fn find_project(&self, id: &ProjectId) -> ProjectResult<Option<ProjectProjection>>;

    /// Insert or replace the projection of a project
    async fn save_project(&self, projection: &ProjectProjection) -> ProjectResult<()>;

    /// Remove a project projection, returns whether it existed
    async fn delete_project(&self, id: &ProjectId) -> ProjectResult<bool>;

    /// Find a child projection
    async fn find_child(&self, key: &ChildKey) -> ProjectResult<Option<ProjectChild>>;

    /// Insert or replace a child projection
    async fn save_child(&self, child: &ProjectChild) -> ProjectResult<()>;

    /// Remove a child projection, returns whether it existed
    async fn delete_child(&self, key: &ChildKey) -> ProjectResult<bool>;

    /// Remove every child of a project, returns how many were removed
    async fn delete_children_of(&self, project: &ProjectId) -> ProjectResult<usize>;

    /// All children of a project
    async fn find_children_of(&self, project: &ProjectId) -> ProjectResult<Vec<ProjectChild>>;
}
