use kernel::messages::{MappingError, date_from_millis};

use crate::domain::entity::project::Project;
use crate::domain::value_object::{
    aggregate_type::AggregateType, project_address::ProjectAddress,
};
use crate::messages::project::{ProjectAddressAvro, ProjectAggregateAvro};

impl ProjectAggregateAvro {
    pub fn to_project(&self) -> Result<Project, MappingError> {
        AggregateType::Project.expect(&self.aggregate_identifier)?;

        Ok(Project {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            title: self.title.clone(),
            description: self.description.clone(),
            project_number: self.project_number.clone(),
            client: self.client.clone(),
            start: date_from_millis("start", self.start)?,
            end: date_from_millis("end", self.end)?,
            category: self.category.map(Into::into),
            address: self.project_address.to_address(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}

impl ProjectAddressAvro {
    pub fn to_address(&self) -> ProjectAddress {
        ProjectAddress {
            street: self.street.clone(),
            house_number: self.house_number.clone(),
            zip_code: self.zip_code.clone(),
            city: self.city.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::project_category::ProjectCategory;
    use crate::mapper::fixtures::*;
    use crate::messages::project::ProjectCategoryEnumAvro;
    use chrono::NaiveDate;

    fn record() -> ProjectAggregateAvro {
        ProjectAggregateAvro {
            aggregate_identifier: identifier("PROJECT", 0),
            auditing_information: auditing(),
            title: "Hospital extension".into(),
            description: None,
            project_number: "P-0042".into(),
            client: Some("City of Stuttgart".into()),
            start: MARCH_1,
            end: MARCH_1 + 30 * 86_400_000,
            category: Some(ProjectCategoryEnumAvro::Nb),
            project_address: ProjectAddressAvro {
                city: "Stuttgart".into(),
                house_number: "12a".into(),
                street: "Königstraße".into(),
                zip_code: "70173".into(),
            },
        }
    }

    #[test]
    fn test_to_project() {
        let record = record();
        let project = record.to_project().unwrap();

        assert_eq!(
            project.id.to_string(),
            record.aggregate_identifier.identifier
        );
        assert_eq!(project.version, 0);
        assert_eq!(project.start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(project.end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(project.category, Some(ProjectCategory::Nb));
        assert_eq!(project.address.house_number, "12a");
        assert_eq!(project.description, None);
        assert_eq!(project.auditing.created_by.to_string(), CREATOR);
    }

    #[test]
    fn test_absent_category_is_none() {
        let mut record = record();
        record.category = None;
        assert_eq!(record.to_project().unwrap().category, None);
    }

    #[test]
    fn test_wrong_aggregate_type_is_rejected() {
        let mut record = record();
        record.aggregate_identifier.aggregate_type = "TASK".into();
        assert!(matches!(
            record.to_project(),
            Err(MappingError::UnexpectedAggregateType { expected: "PROJECT", .. })
        ));
    }
}
