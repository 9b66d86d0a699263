//! Record Routing
//!
//! Decodes the value of a record on the project topic into the event type
//! its key announces.

use kernel::messages::{AggregateEventMessageKey, AggregateIdentifierAvro};
use uuid::Uuid;

use crate::domain::entity::projection::ChildKey;
use crate::domain::value_object::aggregate_type::AggregateType;
use crate::error::{ProjectError, ProjectResult};
use crate::messages::{
    day_card::DayCardEventG2Avro, milestone::MilestoneEventAvro,
    participant::ParticipantEventG3Avro, project::ProjectEventAvro,
    project_craft::ProjectCraftEventG2Avro, relation::RelationEventAvro, task::TaskEventAvro,
    task_action::TaskActionSelectionEventAvro, topic::TopicEventG2Avro,
    work_area::WorkAreaEventAvro,
};

/// Whether a record with this key belongs to the project context
pub fn handles_message(key: &AggregateEventMessageKey) -> bool {
    AggregateType::of(&key.aggregate_identifier).is_some()
}

/// Decoded value of a project context record
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectContextEvent {
    Project(ProjectEventAvro),
    Task(TaskEventAvro),
    DayCard(DayCardEventG2Avro),
    Milestone(MilestoneEventAvro),
    Participant(ParticipantEventG3Avro),
    Topic(TopicEventG2Avro),
    Relation(RelationEventAvro),
    WorkArea(WorkAreaEventAvro),
    ProjectCraft(ProjectCraftEventG2Avro),
    TaskAction(TaskActionSelectionEventAvro),
}

macro_rules! each_event {
    ($self:expr, $event:ident => $body:expr) => {
        match $self {
            ProjectContextEvent::Project($event) => $body,
            ProjectContextEvent::Task($event) => $body,
            ProjectContextEvent::DayCard($event) => $body,
            ProjectContextEvent::Milestone($event) => $body,
            ProjectContextEvent::Participant($event) => $body,
            ProjectContextEvent::Topic($event) => $body,
            ProjectContextEvent::Relation($event) => $body,
            ProjectContextEvent::WorkArea($event) => $body,
            ProjectContextEvent::ProjectCraft($event) => $body,
            ProjectContextEvent::TaskAction($event) => $body,
        }
    };
}

impl ProjectContextEvent {
    /// Decode `value` as the event type of the key's aggregate type.
    pub fn decode(key: &AggregateEventMessageKey, value: serde_json::Value) -> ProjectResult<Self> {
        let aggregate_type = AggregateType::of(&key.aggregate_identifier).ok_or_else(|| {
            ProjectError::UnsupportedAggregateType(key.aggregate_type().to_owned())
        })?;

        let event = match aggregate_type {
            AggregateType::Project => Self::Project(serde_json::from_value(value)?),
            AggregateType::Task => Self::Task(serde_json::from_value(value)?),
            AggregateType::DayCard => Self::DayCard(serde_json::from_value(value)?),
            AggregateType::Milestone => Self::Milestone(serde_json::from_value(value)?),
            AggregateType::Participant => Self::Participant(serde_json::from_value(value)?),
            AggregateType::Topic => Self::Topic(serde_json::from_value(value)?),
            AggregateType::Relation => Self::Relation(serde_json::from_value(value)?),
            AggregateType::WorkArea => Self::WorkArea(serde_json::from_value(value)?),
            AggregateType::ProjectCraft => Self::ProjectCraft(serde_json::from_value(value)?),
            AggregateType::TaskAction => Self::TaskAction(serde_json::from_value(value)?),
        };
        Ok(event)
    }

    pub fn aggregate_type(&self) -> AggregateType {
        match self {
            Self::Project(_) => AggregateType::Project,
            Self::Task(_) => AggregateType::Task,
            Self::DayCard(_) => AggregateType::DayCard,
            Self::Milestone(_) => AggregateType::Milestone,
            Self::Participant(_) => AggregateType::Participant,
            Self::Topic(_) => AggregateType::Topic,
            Self::Relation(_) => AggregateType::Relation,
            Self::WorkArea(_) => AggregateType::WorkArea,
            Self::ProjectCraft(_) => AggregateType::ProjectCraft,
            Self::TaskAction(_) => AggregateType::TaskAction,
        }
    }

    /// Event name as it appears in the record (`CREATED`, `DELETED`, ...)
    pub fn name(&self) -> &'static str {
        use kernel::code::NamedCode;
        each_event!(self, e => e.name.code())
    }

    pub fn is_deletion(&self) -> bool {
        each_event!(self, e => e.is_deletion())
    }

    pub fn version(&self) -> i64 {
        each_event!(self, e => e.version())
    }

    pub fn aggregate_identifier(&self) -> &AggregateIdentifierAvro {
        each_event!(self, e => &e.aggregate.aggregate_identifier)
    }
}

/// Storage key of the child aggregate an identifier points at
pub fn child_key(identifier: &AggregateIdentifierAvro) -> ProjectResult<ChildKey> {
    let aggregate_type = AggregateType::of(identifier)
        .filter(|t| *t != AggregateType::Project)
        .ok_or_else(|| ProjectError::UnsupportedAggregateType(identifier.aggregate_type.clone()))?;
    let identifier = Uuid::parse_str(&identifier.identifier).map_err(|e| {
        kernel::messages::MappingError::from(kernel::id::IdParseError {
            kind: "ProjectChild",
            input: identifier.identifier.clone(),
            reason: e.to_string(),
        })
    })?;

    Ok(ChildKey {
        aggregate_type,
        identifier,
    })
}
