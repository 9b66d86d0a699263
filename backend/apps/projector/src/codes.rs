//! Startup check of the stored-code tables
//!
//! A duplicated name or ordinal would make decoding ambiguous, so the
//! projector refuses to start with one.

use kernel::code::{CodeMismatch, verify_codes, verify_ordinals};

use company::domain::value_object::{
    aggregate_type::AggregateType as CompanyAggregateType, employee_role::EmployeeRole,
};
use project::domain::value_object::{
    aggregate_type::AggregateType as ProjectAggregateType,
    day_card_status::{DayCardReason, DayCardStatus},
    milestone_type::MilestoneType,
    participant::{ParticipantRole, ParticipantStatus},
    project_category::ProjectCategory,
    relation_type::{RelationElementType, RelationType},
    task_constraint::TaskConstraint,
    task_status::TaskStatus,
    topic_criticality::TopicCriticality,
};
use user::domain::value_object::{
    aggregate_type::AggregateType as UserAggregateType, gender::Gender,
    phone_number::PhoneNumberType,
};

pub fn verify_stored_codes() -> Result<(), CodeMismatch> {
    verify_ordinals::<TaskStatus>()?;
    verify_ordinals::<MilestoneType>()?;

    verify_codes::<TaskStatus>()?;
    verify_codes::<MilestoneType>()?;
    verify_codes::<ProjectAggregateType>()?;
    verify_codes::<DayCardStatus>()?;
    verify_codes::<DayCardReason>()?;
    verify_codes::<ParticipantRole>()?;
    verify_codes::<ParticipantStatus>()?;
    verify_codes::<ProjectCategory>()?;
    verify_codes::<RelationType>()?;
    verify_codes::<RelationElementType>()?;
    verify_codes::<TaskConstraint>()?;
    verify_codes::<TopicCriticality>()?;

    verify_codes::<CompanyAggregateType>()?;
    verify_codes::<EmployeeRole>()?;

    verify_codes::<UserAggregateType>()?;
    verify_codes::<Gender>()?;
    verify_codes::<PhoneNumberType>()?;

    tracing::debug!("Stored-code tables verified");
    Ok(())
}
