//! Record → Entity Mappers
//!
//! Pure conversions from the event records of this context to the entities.
//! Record enums become domain enums by member name; a name the domain does
//! not know means the schema moved ahead of this service and aborts.
//!
//! Day cards, topics, work areas and task constraint selections don't carry
//! their project. The caller passes it, usually from the record key.

use kernel::code::by_name;

use crate::domain::value_object::{
    day_card_status::{DayCardReason, DayCardStatus},
    milestone_type::MilestoneType,
    participant::{ParticipantRole, ParticipantStatus},
    project_category::ProjectCategory,
    relation_type::RelationType,
    task_constraint::TaskConstraint,
    task_status::TaskStatus,
    topic_criticality::TopicCriticality,
};
use crate::messages::{
    day_card::{DayCardReasonNotDoneEnumAvro, DayCardStatusEnumAvro},
    milestone::MilestoneTypeEnumAvro,
    participant::{ParticipantRoleEnumAvro, ParticipantStatusEnumAvro},
    project::ProjectCategoryEnumAvro,
    relation::RelationTypeEnumAvro,
    task::TaskStatusEnumAvro,
    task_action::TaskActionEnumAvro,
    topic::TopicCriticalityEnumAvro,
};

pub mod day_card;
pub mod milestone;
pub mod participant;
pub mod project;
pub mod project_craft;
pub mod relation;
pub mod task;
pub mod task_action;
pub mod topic;
pub mod work_area;

macro_rules! convert_by_name {
    ($($record:ty => $domain:ty),+ $(,)?) => {
        $(
            impl From<$record> for $domain {
                fn from(value: $record) -> Self {
                    by_name(value)
                }
            }
        )+
    };
}

convert_by_name! {
    ProjectCategoryEnumAvro => ProjectCategory,
    TaskStatusEnumAvro => TaskStatus,
    DayCardStatusEnumAvro => DayCardStatus,
    DayCardReasonNotDoneEnumAvro => DayCardReason,
    MilestoneTypeEnumAvro => MilestoneType,
    ParticipantRoleEnumAvro => ParticipantRole,
    ParticipantStatusEnumAvro => ParticipantStatus,
    TopicCriticalityEnumAvro => TopicCriticality,
    RelationTypeEnumAvro => RelationType,
    TaskActionEnumAvro => TaskConstraint,
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Record builders shared by the mapper tests

    use kernel::messages::{AggregateIdentifierAvro, AuditingInformationAvro};
    use uuid::Uuid;

    pub const CREATOR: &str = "8f7b5a3e-0c1d-4e2f-9a8b-7c6d5e4f3a21";
    pub const MODIFIER: &str = "8f7b5a3e-0c1d-4e2f-9a8b-7c6d5e4f3a22";
    /// 2024-03-01T00:00:00Z
    pub const MARCH_1: i64 = 1_709_251_200_000;

    pub fn identifier(aggregate_type: &str, version: i64) -> AggregateIdentifierAvro {
        AggregateIdentifierAvro::new(Uuid::new_v4(), version, aggregate_type)
    }

    pub fn auditing() -> AuditingInformationAvro {
        AuditingInformationAvro {
            created_by: AggregateIdentifierAvro::new(CREATOR, 0, "USER"),
            created_date: MARCH_1,
            last_modified_by: AggregateIdentifierAvro::new(MODIFIER, 2, "USER"),
            last_modified_date: MARCH_1 + 3_600_000,
        }
    }
}
