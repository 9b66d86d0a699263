//! Projection Entities
//!
//! What the projector keeps per project: the current project snapshot with
//! its version history, and the child aggregates keyed by type and id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    day_card::DayCard, milestone::Milestone, participant::Participant, project::Project,
    project_craft::ProjectCraft, relation::Relation, task::Task,
    task_constraint_selection::TaskConstraintSelection, topic::Topic, work_area::WorkArea,
};
use crate::domain::value_object::{
    aggregate_type::AggregateType,
    ids::{ProjectId, UserId},
    project_address::ProjectAddress,
    project_category::ProjectCategory,
};

/// State of a project after one applied record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub version: i64,
    pub title: String,
    pub description: Option<String>,
    pub project_number: String,
    pub client: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: Option<ProjectCategory>,
    pub address: ProjectAddress,
    pub event_author: UserId,
    pub event_date: DateTime<Utc>,
}

impl ProjectVersion {
    /// The first version is attributed to its creator, later ones to the
    /// last modifier.
    pub fn of(project: &Project) -> Self {
        let (event_author, event_date) = if project.version == 0 {
            (project.auditing.created_by, project.auditing.created_date)
        } else {
            (
                project.auditing.last_modified_by,
                project.auditing.last_modified_date,
            )
        };

        Self {
            version: project.version,
            title: project.title.clone(),
            description: project.description.clone(),
            project_number: project.project_number.clone(),
            client: project.client.clone(),
            start: project.start,
            end: project.end,
            category: project.category,
            address: project.address.clone(),
            event_author,
            event_date,
        }
    }
}

/// Current project plus every version applied so far, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProjection {
    pub project: Project,
    pub history: Vec<ProjectVersion>,
}

impl ProjectProjection {
    pub fn new(project: Project) -> Self {
        let history = vec![ProjectVersion::of(&project)];
        Self { project, history }
    }

    pub fn id(&self) -> ProjectId {
        self.project.id
    }

    pub fn version(&self) -> i64 {
        self.project.version
    }

    /// Replace the snapshot and record the new version.
    pub fn apply(&mut self, project: Project) {
        self.history.push(ProjectVersion::of(&project));
        self.project = project;
    }
}

/// Any project-scoped aggregate below the project itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectChild {
    Task(Task),
    DayCard(DayCard),
    Milestone(Milestone),
    Participant(Participant),
    Topic(Topic),
    Relation(Relation),
    WorkArea(WorkArea),
    ProjectCraft(ProjectCraft),
    TaskConstraintSelection(TaskConstraintSelection),
}

macro_rules! each_child {
    ($self:expr, $child:ident => $body:expr) => {
        match $self {
            ProjectChild::Task($child) => $body,
            ProjectChild::DayCard($child) => $body,
            ProjectChild::Milestone($child) => $body,
            ProjectChild::Participant($child) => $body,
            ProjectChild::Topic($child) => $body,
            ProjectChild::Relation($child) => $body,
            ProjectChild::WorkArea($child) => $body,
            ProjectChild::ProjectCraft($child) => $body,
            ProjectChild::TaskConstraintSelection($child) => $body,
        }
    };
}

impl ProjectChild {
    pub fn aggregate_type(&self) -> AggregateType {
        match self {
            ProjectChild::Task(_) => AggregateType::Task,
            ProjectChild::DayCard(_) => AggregateType::DayCard,
            ProjectChild::Milestone(_) => AggregateType::Milestone,
            ProjectChild::Participant(_) => AggregateType::Participant,
            ProjectChild::Topic(_) => AggregateType::Topic,
            ProjectChild::Relation(_) => AggregateType::Relation,
            ProjectChild::WorkArea(_) => AggregateType::WorkArea,
            ProjectChild::ProjectCraft(_) => AggregateType::ProjectCraft,
            ProjectChild::TaskConstraintSelection(_) => AggregateType::TaskAction,
        }
    }

    pub fn identifier(&self) -> Uuid {
        each_child!(self, c => c.id.into_uuid())
    }

    pub fn version(&self) -> i64 {
        each_child!(self, c => c.version)
    }

    pub fn project(&self) -> ProjectId {
        each_child!(self, c => c.project)
    }

    /// Storage key of this child
    pub fn key(&self) -> ChildKey {
        ChildKey {
            aggregate_type: self.aggregate_type(),
            identifier: self.identifier(),
        }
    }
}

/// Identity of a child projection across all child types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildKey {
    pub aggregate_type: AggregateType,
    pub identifier: Uuid,
}
