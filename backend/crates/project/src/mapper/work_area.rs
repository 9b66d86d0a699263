use kernel::id::Id;
use kernel::messages::MappingError;

use crate::domain::entity::work_area::WorkArea;
use crate::domain::value_object::{aggregate_type::AggregateType, ids::ProjectId};
use crate::messages::work_area::WorkAreaAggregateAvro;

impl WorkAreaAggregateAvro {
    pub fn to_work_area(&self, project: ProjectId) -> Result<WorkArea, MappingError> {
        AggregateType::WorkArea.expect(&self.aggregate_identifier)?;

        Ok(WorkArea {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project,
            name: self.name.clone(),
            parent: self.parent.as_deref().map(Id::parse_str).transpose()?,
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::fixtures::*;

    #[test]
    fn test_parent_is_optional() {
        let parent = uuid::Uuid::new_v4();
        let mut record = WorkAreaAggregateAvro {
            aggregate_identifier: identifier("WORKAREA", 0),
            auditing_information: auditing(),
            name: "Level 2".into(),
            parent: Some(parent.to_string()),
        };

        let work_area = record.to_work_area(ProjectId::new()).unwrap();
        assert_eq!(work_area.parent.map(|p| p.into_uuid()), Some(parent));

        record.parent = None;
        assert_eq!(record.to_work_area(ProjectId::new()).unwrap().parent, None);

        record.parent = Some("level-1".into());
        assert!(record.to_work_area(ProjectId::new()).is_err());
    }
}
