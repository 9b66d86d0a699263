use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::ids::{ProjectCraftId, ProjectId};

/// Craft (trade) as configured for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCraft {
    pub id: ProjectCraftId,
    pub version: i64,
    pub project: ProjectId,
    pub name: String,
    /// Hex color used in the calendar, e.g. `#d9c200`
    pub color: String,
    pub auditing: Auditing,
}
