//! Project Projector
//!
//! Applies project context records to the projection repository. Records of
//! one aggregate may arrive more than once or out of order; a record only
//! wins when its version is newer than the stored one.

use std::sync::Arc;

use kernel::messages::AggregateEventMessageKey;

pub use kernel::projection::Projection;

use crate::application::event::{ProjectContextEvent, child_key};
use crate::domain::entity::projection::{ChildKey, ProjectChild, ProjectProjection};
use crate::domain::repository::ProjectionRepository;
use crate::domain::value_object::{aggregate_type::AggregateType, ids::ProjectId};
use crate::error::ProjectResult;
use crate::messages::project::ProjectEventAvro;

/// Project projector use case
pub struct ProjectProjector<R>
where
    R: ProjectionRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectProjector<R>
where
    R: ProjectionRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Entry point for one record; `None` is a tombstone.
    pub async fn handle(
        &self,
        key: &AggregateEventMessageKey,
        value: Option<serde_json::Value>,
    ) -> ProjectResult<Projection> {
        match value {
            None => self.on_tombstone(key).await,
            Some(value) => {
                let event = ProjectContextEvent::decode(key, value)?;
                self.on_event(key, &event).await
            }
        }
    }

    pub async fn on_event(
        &self,
        key: &AggregateEventMessageKey,
        event: &ProjectContextEvent,
    ) -> ProjectResult<Projection> {
        tracing::debug!(
            aggregate_type = %event.aggregate_type(),
            event = event.name(),
            version = event.version(),
            "Projecting record"
        );

        if event.is_deletion() {
            return match event {
                ProjectContextEvent::Project(e) => {
                    self.on_project_deleted(e.aggregate.aggregate_identifier.to_id()?)
                        .await
                }
                other => self.on_child_deleted(child_key(other.aggregate_identifier())?).await,
            };
        }

        // Day cards, topics, work areas and selections only know their
        // project through the key.
        let project: ProjectId = key.root_context_id()?;

        let child = match event {
            ProjectContextEvent::Project(e) => return self.on_project_event(e).await,
            ProjectContextEvent::Task(e) => ProjectChild::Task(e.aggregate.to_task()?),
            ProjectContextEvent::DayCard(e) => {
                ProjectChild::DayCard(e.aggregate.to_day_card(project)?)
            }
            ProjectContextEvent::Milestone(e) => {
                ProjectChild::Milestone(e.aggregate.to_milestone()?)
            }
            ProjectContextEvent::Participant(e) => {
                ProjectChild::Participant(e.aggregate.to_participant()?)
            }
            ProjectContextEvent::Topic(e) => ProjectChild::Topic(e.aggregate.to_topic(project)?),
            ProjectContextEvent::Relation(e) => ProjectChild::Relation(e.aggregate.to_relation()?),
            ProjectContextEvent::WorkArea(e) => {
                ProjectChild::WorkArea(e.aggregate.to_work_area(project)?)
            }
            ProjectContextEvent::ProjectCraft(e) => {
                ProjectChild::ProjectCraft(e.aggregate.to_project_craft()?)
            }
            ProjectContextEvent::TaskAction(e) => ProjectChild::TaskConstraintSelection(
                e.aggregate.to_constraint_selection(project)?,
            ),
        };

        self.on_child(child).await
    }

    /// Create the projection, or apply a newer version of the project.
    pub async fn on_project_event(&self, event: &ProjectEventAvro) -> ProjectResult<Projection> {
        let project = event.aggregate.to_project()?;

        match self.repository.find_project(&project.id).await? {
            None => {
                let projection = ProjectProjection::new(project);
                self.repository.save_project(&projection).await?;
                tracing::info!(project = %projection.id(), "Project projection created");
                Ok(Projection::Created)
            }
            Some(mut projection) if project.version > projection.version() => {
                projection.apply(project);
                self.repository.save_project(&projection).await?;
                tracing::debug!(
                    project = %projection.id(),
                    version = projection.version(),
                    "Project projection updated"
                );
                Ok(Projection::Updated)
            }
            Some(projection) => {
                tracing::debug!(
                    project = %projection.id(),
                    stored = projection.version(),
                    received = project.version,
                    "Ignoring outdated project record"
                );
                Ok(Projection::Ignored)
            }
        }
    }

    /// Remove the project and everything projected for it.
    ///
    /// Children of a project that was never projected stay untouched.
    pub async fn on_project_deleted(&self, id: ProjectId) -> ProjectResult<Projection> {
        if !self.repository.delete_project(&id).await? {
            tracing::debug!(project = %id, "Deleted project was never projected");
            return Ok(Projection::Missing);
        }
        let children = self.repository.delete_children_of(&id).await?;

        tracing::info!(project = %id, children, "Project projection deleted");
        Ok(Projection::Deleted { children })
    }

    /// Upsert a child projection with version gating.
    pub async fn on_child(&self, child: ProjectChild) -> ProjectResult<Projection> {
        let key = child.key();

        match self.repository.find_child(&key).await? {
            Some(existing) if existing.version() >= child.version() => {
                tracing::debug!(
                    aggregate_type = %key.aggregate_type,
                    identifier = %key.identifier,
                    stored = existing.version(),
                    received = child.version(),
                    "Ignoring outdated record"
                );
                Ok(Projection::Ignored)
            }
            existing => {
                self.repository.save_child(&child).await?;
                Ok(if existing.is_some() {
                    Projection::Updated
                } else {
                    Projection::Created
                })
            }
        }
    }

    pub async fn on_child_deleted(&self, key: ChildKey) -> ProjectResult<Projection> {
        if self.repository.delete_child(&key).await? {
            tracing::debug!(
                aggregate_type = %key.aggregate_type,
                identifier = %key.identifier,
                "Child projection deleted"
            );
            Ok(Projection::Deleted { children: 0 })
        } else {
            Ok(Projection::Missing)
        }
    }

    /// A tombstone removes whatever its key points at.
    pub async fn on_tombstone(&self, key: &AggregateEventMessageKey) -> ProjectResult<Projection> {
        match AggregateType::of(&key.aggregate_identifier) {
            Some(AggregateType::Project) => {
                self.on_project_deleted(key.aggregate_identifier.to_id()?)
                    .await
            }
            _ => self.on_child_deleted(child_key(&key.aggregate_identifier)?).await,
        }
    }
}
