use kernel::messages::MappingError;

use crate::domain::entity::topic::Topic;
use crate::domain::value_object::{aggregate_type::AggregateType, ids::ProjectId};
use crate::messages::topic::TopicAggregateG2Avro;

impl TopicAggregateG2Avro {
    pub fn to_topic(&self, project: ProjectId) -> Result<Topic, MappingError> {
        AggregateType::Topic.expect(&self.aggregate_identifier)?;

        Ok(Topic {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project,
            task: self.task.to_id()?,
            criticality: self.criticality.into(),
            description: self.description.clone(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
