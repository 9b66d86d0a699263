use kernel::messages::MappingError;

use crate::domain::entity::day_card::DayCard;
use crate::domain::value_object::{aggregate_type::AggregateType, ids::ProjectId};
use crate::messages::day_card::DayCardAggregateG2Avro;

impl DayCardAggregateG2Avro {
    /// The record references its task only; `project` is the task's project.
    pub fn to_day_card(&self, project: ProjectId) -> Result<DayCard, MappingError> {
        AggregateType::DayCard.expect(&self.aggregate_identifier)?;

        Ok(DayCard {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project,
            task: self.task.to_id()?,
            title: self.title.clone(),
            manpower: self.manpower,
            notes: self.notes.clone(),
            status: self.status.into(),
            reason: self.reason.map(Into::into),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
