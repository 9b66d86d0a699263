use kernel::messages::{MappingError, date_from_millis};

use crate::domain::entity::milestone::Milestone;
use crate::domain::value_object::aggregate_type::AggregateType;
use crate::messages::milestone::MilestoneAggregateAvro;

impl MilestoneAggregateAvro {
    pub fn to_milestone(&self) -> Result<Milestone, MappingError> {
        AggregateType::Milestone.expect(&self.aggregate_identifier)?;

        Ok(Milestone {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project: self.project.to_id()?,
            name: self.name.clone(),
            milestone_type: self.milestone_type.into(),
            date: date_from_millis("date", self.date)?,
            header: self.header,
            craft: self.craft.as_ref().map(|c| c.to_id()).transpose()?,
            work_area: self.workarea.as_ref().map(|w| w.to_id()).transpose()?,
            description: self.description.clone(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::milestone_type::MilestoneType;
    use crate::mapper::fixtures::*;
    use crate::messages::milestone::MilestoneTypeEnumAvro;
    use kernel::code::OrdinalCode;

    #[test]
    fn test_to_milestone() {
        let record = MilestoneAggregateAvro {
            aggregate_identifier: identifier("MILESTONE", 0),
            auditing_information: auditing(),
            project: identifier("PROJECT", 0),
            name: "Topping-out ceremony".into(),
            milestone_type: MilestoneTypeEnumAvro::Craft,
            date: MARCH_1,
            header: false,
            craft: Some(identifier("PROJECTCRAFT", 0)),
            workarea: None,
            description: None,
        };

        let milestone = record.to_milestone().unwrap();
        assert_eq!(milestone.milestone_type, MilestoneType::Craft);
        assert_eq!(milestone.milestone_type.ordinal(), 2);
        assert_eq!(
            milestone.craft.map(|c| c.to_string()),
            record.craft.map(|c| c.identifier)
        );
        assert_eq!(milestone.work_area, None);
        assert_eq!(milestone.date.to_string(), "2024-03-01");
    }

    #[test]
    fn test_type_field_name() {
        let json = serde_json::json!({
            "aggregateIdentifier": {"identifier": uuid::Uuid::new_v4().to_string(), "version": 0, "type": "MILESTONE"},
            "auditingInformation": serde_json::to_value(auditing()).unwrap(),
            "project": {"identifier": uuid::Uuid::new_v4().to_string(), "version": 0, "type": "PROJECT"},
            "name": "Handover",
            "type": "INVESTOR",
            "date": MARCH_1,
            "header": true
        });
        let record: MilestoneAggregateAvro = serde_json::from_value(json).unwrap();
        let milestone = record.to_milestone().unwrap();
        assert_eq!(milestone.milestone_type, MilestoneType::Investor);
        assert!(milestone.header);
        assert_eq!(milestone.craft, None);
        assert_eq!(milestone.description, None);
    }
}
