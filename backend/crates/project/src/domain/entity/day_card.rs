//! Day Card Entity

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    day_card_status::{DayCardReason, DayCardStatus},
    ids::{DayCardId, ProjectId, TaskId},
};

/// Work planned for one task on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCard {
    pub id: DayCardId,
    pub version: i64,
    /// Not part of the record; taken from the record key
    pub project: ProjectId,
    pub task: TaskId,
    pub title: String,
    pub manpower: f64,
    pub notes: Option<String>,
    pub status: DayCardStatus,
    /// Only set for [`DayCardStatus::NotDone`]
    pub reason: Option<DayCardReason>,
    pub auditing: Auditing,
}
