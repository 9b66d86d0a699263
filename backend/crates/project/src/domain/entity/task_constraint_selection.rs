//! Task Constraint Selection Entity

use std::collections::BTreeSet;

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    ids::{ProjectId, TaskConstraintSelectionId, TaskId},
    task_constraint::TaskConstraint,
};

/// Constraints selected for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConstraintSelection {
    pub id: TaskConstraintSelectionId,
    pub version: i64,
    /// Taken from the record key
    pub project: ProjectId,
    pub task: TaskId,
    pub constraints: BTreeSet<TaskConstraint>,
    pub auditing: Auditing,
}

impl TaskConstraintSelection {
    #[inline]
    pub fn contains(&self, constraint: TaskConstraint) -> bool {
        self.constraints.contains(&constraint)
    }
}
