//! Task Entity

use chrono::{DateTime, Utc};
use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    ids::{ParticipantId, ProjectCraftId, ProjectId, TaskId, WorkAreaId},
    task_status::TaskStatus,
};

/// Unit of work of one craft on a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub version: i64,
    pub project: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub craft: ProjectCraftId,
    /// Participant responsible for the task
    pub assignee: Option<ParticipantId>,
    pub work_area: Option<WorkAreaId>,
    pub status: TaskStatus,
    /// Last time the task was edited by a user (not by the system)
    pub edit_date: Option<DateTime<Utc>>,
    pub auditing: Auditing,
}

impl Task {
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }
}
