//! Milestone Entity

use chrono::NaiveDate;
use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    ids::{MilestoneId, ProjectCraftId, ProjectId, WorkAreaId},
    milestone_type::MilestoneType,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub version: i64,
    pub project: ProjectId,
    pub name: String,
    pub milestone_type: MilestoneType,
    pub date: NaiveDate,
    /// Shown in the header row instead of a work area row
    pub header: bool,
    /// Set for [`MilestoneType::Craft`] only
    pub craft: Option<ProjectCraftId>,
    pub work_area: Option<WorkAreaId>,
    pub description: Option<String>,
    pub auditing: Auditing,
}
