use kernel::messages::{MappingError, datetime_from_millis};

use crate::domain::entity::task::Task;
use crate::domain::value_object::aggregate_type::AggregateType;
use crate::messages::task::TaskAggregateAvro;

impl TaskAggregateAvro {
    pub fn to_task(&self) -> Result<Task, MappingError> {
        AggregateType::Task.expect(&self.aggregate_identifier)?;

        Ok(Task {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project: self.project.to_id()?,
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            craft: self.craft.to_id()?,
            assignee: self.assignee.as_ref().map(|a| a.to_id()).transpose()?,
            work_area: self.workarea.as_ref().map(|w| w.to_id()).transpose()?,
            status: self.status.into(),
            edit_date: self
                .edit_date
                .map(|millis| datetime_from_millis("editDate", millis))
                .transpose()?,
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
