//! Projection Lookups
//!
//! Typed reads over the projections. A missing aggregate is a
//! [`Violation::NotFound`] with the aggregate's not-found key.

use std::sync::Arc;

use kernel::i18n::MessageKey;
use kernel::validation::Violation;

use crate::domain::entity::{
    day_card::DayCard,
    milestone::Milestone,
    projection::{ChildKey, ProjectChild, ProjectProjection},
    task::Task,
    topic::Topic,
};
use crate::domain::repository::ProjectionRepository;
use crate::domain::value_object::{
    aggregate_type::AggregateType,
    ids::{DayCardId, MilestoneId, ProjectId, TaskId, TopicId},
};
use crate::error::ProjectResult;
use crate::i18n;

pub struct ProjectionLookup<R>
where
    R: ProjectionRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectionLookup<R>
where
    R: ProjectionRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn project(&self, id: ProjectId) -> ProjectResult<ProjectProjection> {
        self.repository
            .find_project(&id)
            .await?
            .ok_or_else(|| not_found(i18n::PROJECT_VALIDATION_ERROR_PROJECT_NOT_FOUND, id))
    }

    pub async fn task(&self, id: TaskId) -> ProjectResult<Task> {
        match self.child(AggregateType::Task, id.into_uuid()).await? {
            Some(ProjectChild::Task(task)) => Ok(task),
            _ => Err(not_found(i18n::TASK_VALIDATION_ERROR_NOT_FOUND, id)),
        }
    }

    pub async fn day_card(&self, id: DayCardId) -> ProjectResult<DayCard> {
        match self.child(AggregateType::DayCard, id.into_uuid()).await? {
            Some(ProjectChild::DayCard(day_card)) => Ok(day_card),
            _ => Err(not_found(i18n::DAY_CARD_VALIDATION_ERROR_NOT_FOUND, id)),
        }
    }

    pub async fn milestone(&self, id: MilestoneId) -> ProjectResult<Milestone> {
        match self.child(AggregateType::Milestone, id.into_uuid()).await? {
            Some(ProjectChild::Milestone(milestone)) => Ok(milestone),
            _ => Err(not_found(i18n::MILESTONE_VALIDATION_ERROR_NOT_FOUND, id)),
        }
    }

    pub async fn topic(&self, id: TopicId) -> ProjectResult<Topic> {
        match self.child(AggregateType::Topic, id.into_uuid()).await? {
            Some(ProjectChild::Topic(topic)) => Ok(topic),
            _ => Err(not_found(i18n::TOPIC_VALIDATION_ERROR_NOT_FOUND, id)),
        }
    }

    /// Tasks of a project
    pub async fn tasks_of(&self, project: ProjectId) -> ProjectResult<Vec<Task>> {
        Ok(self
            .repository
            .find_children_of(&project)
            .await?
            .into_iter()
            .filter_map(|child| match child {
                ProjectChild::Task(task) => Some(task),
                _ => None,
            })
            .collect())
    }

    async fn child(
        &self,
        aggregate_type: AggregateType,
        identifier: uuid::Uuid,
    ) -> ProjectResult<Option<ProjectChild>> {
        self.repository
            .find_child(&ChildKey {
                aggregate_type,
                identifier,
            })
            .await
    }
}

fn not_found(key: MessageKey, identifier: impl ToString) -> crate::error::ProjectError {
    Violation::not_found(key, identifier).into()
}
