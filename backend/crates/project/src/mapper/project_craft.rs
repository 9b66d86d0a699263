use kernel::messages::MappingError;

use crate::domain::entity::project_craft::ProjectCraft;
use crate::domain::value_object::aggregate_type::AggregateType;
use crate::messages::project_craft::ProjectCraftAggregateG2Avro;

impl ProjectCraftAggregateG2Avro {
    pub fn to_project_craft(&self) -> Result<ProjectCraft, MappingError> {
        AggregateType::ProjectCraft.expect(&self.aggregate_identifier)?;

        Ok(ProjectCraft {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project: self.project.to_id()?,
            name: self.name.clone(),
            color: self.color.clone(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
