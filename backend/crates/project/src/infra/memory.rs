//! In-Memory Repository Implementation
//!
//! Backs the replay tool and the tests. State lives behind `tokio` locks so
//! one repository can be shared between tasks.

use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;

use crate::domain::entity::projection::{ChildKey, ProjectChild, ProjectProjection};
use crate::domain::repository::ProjectionRepository;
use crate::domain::value_object::ids::ProjectId;
use crate::error::ProjectResult;

/// Memory-backed projection repository
#[derive(Debug, Default)]
pub struct InMemoryProjectionRepository {
    projects: RwLock<HashMap<ProjectId, ProjectProjection>>,
    // Ordered so listings are stable
    children: RwLock<BTreeMap<ChildKey, ProjectChild>>,
}

impl InMemoryProjectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (projects, children) held
    pub async fn counts(&self) -> (usize, usize) {
        let projects = self.projects.read().await.len();
        let children = self.children.read().await.len();
        (projects, children)
    }

    /// All project projections, sorted by id
    pub async fn projects(&self) -> Vec<ProjectProjection> {
        let mut projects: Vec<_> = self.projects.read().await.values().cloned().collect();
        projects.sort_by_key(|p| p.id());
        projects
    }
}

impl ProjectionRepository for InMemoryProjectionRepository {
    async fn find_project(&self, id: &ProjectId) -> ProjectResult<Option<ProjectProjection>> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn save_project(&self, projection: &ProjectProjection) -> ProjectResult<()> {
        self.projects
            .write()
            .await
            .insert(projection.id(), projection.clone());
        Ok(())
    }

    async fn delete_project(&self, id: &ProjectId) -> ProjectResult<bool> {
        Ok(self.projects.write().await.remove(id).is_some())
    }

    async fn find_child(&self, key: &ChildKey) -> ProjectResult<Option<ProjectChild>> {
        Ok(self.children.read().await.get(key).cloned())
    }

    async fn save_child(&self, child: &ProjectChild) -> ProjectResult<()> {
        self.children.write().await.insert(child.key(), child.clone());
        Ok(())
    }

    async fn delete_child(&self, key: &ChildKey) -> ProjectResult<bool> {
        Ok(self.children.write().await.remove(key).is_some())
    }

    async fn delete_children_of(&self, project: &ProjectId) -> ProjectResult<usize> {
        let mut children = self.children.write().await;
        let before = children.len();
        children.retain(|_, child| child.project() != *project);
        Ok(before - children.len())
    }

    async fn find_children_of(&self, project: &ProjectId) -> ProjectResult<Vec<ProjectChild>> {
        Ok(self
            .children
            .read()
            .await
            .values()
            .filter(|child| child.project() == *project)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[tokio::test]
    async fn test_project_round_trip() {
        let repo = InMemoryProjectionRepository::new();
        let projection = ProjectProjection::new(fixtures::project(0));
        let id = projection.id();

        repo.save_project(&projection).await.unwrap();
        assert_eq!(repo.find_project(&id).await.unwrap(), Some(projection));

        assert!(repo.delete_project(&id).await.unwrap());
        assert!(!repo.delete_project(&id).await.unwrap());
        assert_eq!(repo.find_project(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_children_are_scoped_by_project() {
        let repo = InMemoryProjectionRepository::new();
        let project = fixtures::project_id();
        let other = fixtures::project_id();

        let task = ProjectChild::Task(fixtures::task(project, 0));
        let foreign = ProjectChild::Task(fixtures::task(other, 0));
        let participant = ProjectChild::Participant(fixtures::participant(project));
        for child in [&task, &foreign, &participant] {
            repo.save_child(child).await.unwrap();
        }

        assert_eq!(repo.find_children_of(&project).await.unwrap().len(), 2);
        assert_eq!(repo.find_child(&task.key()).await.unwrap(), Some(task.clone()));

        assert_eq!(repo.delete_children_of(&project).await.unwrap(), 2);
        assert_eq!(repo.counts().await, (0, 1));
        assert!(repo.find_child(&foreign.key()).await.unwrap().is_some());
    }
}
