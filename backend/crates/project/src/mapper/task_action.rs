use kernel::messages::MappingError;

use crate::domain::entity::task_constraint_selection::TaskConstraintSelection;
use crate::domain::value_object::{aggregate_type::AggregateType, ids::ProjectId};
use crate::messages::task_action::TaskActionSelectionAggregateAvro;

impl TaskActionSelectionAggregateAvro {
    pub fn to_constraint_selection(
        &self,
        project: ProjectId,
    ) -> Result<TaskConstraintSelection, MappingError> {
        AggregateType::TaskAction.expect(&self.aggregate_identifier)?;

        Ok(TaskConstraintSelection {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project,
            task: self.task.to_id()?,
            constraints: self.actions.iter().copied().map(Into::into).collect(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
