//! Aggregate Types of the project context
//!
//! The code is the `type` field of an aggregate identifier and of the record
//! key. Routing uses [`NamedCode::try_from_code`] because a record from
//! another context is expected input, not schema drift.

use kernel::code::NamedCode;
use kernel::named_code;
use kernel::messages::{AggregateIdentifierAvro, MappingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AggregateType {
    Project,
    Task,
    DayCard,
    Milestone,
    Participant,
    Topic,
    Relation,
    WorkArea,
    ProjectCraft,
    TaskAction,
}

named_code!(AggregateType, "ProjectAggregateType", {
    Project => "PROJECT",
    Task => "TASK",
    DayCard => "DAYCARD",
    Milestone => "MILESTONE",
    Participant => "PARTICIPANT",
    Topic => "TOPIC",
    Relation => "RELATION",
    WorkArea => "WORKAREA",
    ProjectCraft => "PROJECTCRAFT",
    TaskAction => "TASKACTION",
});

impl AggregateType {
    /// Aggregate type of a record key, `None` for other contexts
    pub fn of(identifier: &AggregateIdentifierAvro) -> Option<Self> {
        Self::try_from_code(&identifier.aggregate_type).ok()
    }

    /// Require `identifier` to reference an aggregate of this type
    pub fn expect(self, identifier: &AggregateIdentifierAvro) -> Result<(), MappingError> {
        if identifier.aggregate_type == self.code() {
            Ok(())
        } else {
            Err(MappingError::UnexpectedAggregateType {
                expected: self.code(),
                actual: identifier.aggregate_type.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        let id = AggregateIdentifierAvro::new(uuid::Uuid::nil(), 0, "DAYCARD");
        assert_eq!(AggregateType::of(&id), Some(AggregateType::DayCard));

        let other = AggregateIdentifierAvro::new(uuid::Uuid::nil(), 0, "COMPANY");
        assert_eq!(AggregateType::of(&other), None);
    }

    #[test]
    fn test_expect() {
        let id = AggregateIdentifierAvro::new(uuid::Uuid::nil(), 0, "TASK");
        assert!(AggregateType::Task.expect(&id).is_ok());
        assert_eq!(
            AggregateType::Milestone.expect(&id),
            Err(MappingError::UnexpectedAggregateType {
                expected: "MILESTONE",
                actual: "TASK".into(),
            })
        );
    }
}
