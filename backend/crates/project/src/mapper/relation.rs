use kernel::code::NamedCode;
use kernel::messages::{AggregateIdentifierAvro, MappingError};
use uuid::Uuid;

use crate::domain::entity::relation::{Relation, RelationElement};
use crate::domain::value_object::{
    aggregate_type::AggregateType, relation_type::RelationElementType,
};
use crate::messages::relation::RelationAggregateAvro;

impl RelationAggregateAvro {
    pub fn to_relation(&self) -> Result<Relation, MappingError> {
        AggregateType::Relation.expect(&self.aggregate_identifier)?;

        Ok(Relation {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project: self.project.to_id()?,
            relation_type: self.relation_type.into(),
            source: relation_element(&self.source)?,
            target: relation_element(&self.target)?,
            critical: self.critical,
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}

/// Element type comes from the identifier; anything but a task or a
/// milestone is rejected.
fn relation_element(identifier: &AggregateIdentifierAvro) -> Result<RelationElement, MappingError> {
    let element_type = RelationElementType::try_from_code(&identifier.aggregate_type).map_err(
        |_| MappingError::UnexpectedAggregateType {
            expected: "TASK or MILESTONE",
            actual: identifier.aggregate_type.clone(),
        },
    )?;
    let identifier = Uuid::parse_str(&identifier.identifier).map_err(|e| {
        kernel::id::IdParseError {
            kind: "RelationElement",
            input: identifier.identifier.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(RelationElement {
        element_type,
        identifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::relation_type::RelationType;
    use crate::mapper::fixtures::*;
    use crate::messages::relation::RelationTypeEnumAvro;

    fn record(source_type: &str, target_type: &str) -> RelationAggregateAvro {
        RelationAggregateAvro {
            aggregate_identifier: identifier("RELATION", 0),
            auditing_information: auditing(),
            project: identifier("PROJECT", 0),
            relation_type: RelationTypeEnumAvro::FinishToStart,
            source: identifier(source_type, 0),
            target: identifier(target_type, 0),
            critical: None,
        }
    }

    #[test]
    fn test_task_to_milestone() {
        let record = record("TASK", "MILESTONE");
        let relation = record.to_relation().unwrap();

        assert_eq!(relation.relation_type, RelationType::FinishToStart);
        assert_eq!(relation.source.element_type, RelationElementType::Task);
        assert_eq!(relation.target.element_type, RelationElementType::Milestone);
        assert_eq!(
            relation.source.identifier.to_string(),
            record.source.identifier
        );
        assert_eq!(relation.critical, None);
    }

    #[test]
    fn test_unsupported_element_type() {
        let err = record("TASK", "DAYCARD").to_relation().unwrap_err();
        assert_eq!(
            err,
            MappingError::UnexpectedAggregateType {
                expected: "TASK or MILESTONE",
                actual: "DAYCARD".into(),
            }
        );
    }

    #[test]
    fn test_malformed_element_identifier() {
        let mut record = record("TASK", "TASK");
        record.target.identifier = "42".into();
        assert!(matches!(
            record.to_relation(),
            Err(MappingError::InvalidIdentifier(_))
        ));
    }
}
