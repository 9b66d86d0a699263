use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::ids::{ProjectId, WorkAreaId};

/// Named area of the construction site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkArea {
    pub id: WorkAreaId,
    pub version: i64,
    /// Taken from the record key
    pub project: ProjectId,
    pub name: String,
    /// Enclosing work area
    pub parent: Option<WorkAreaId>,
    pub auditing: Auditing,
}
