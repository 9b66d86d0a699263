//! Project Entity

use chrono::NaiveDate;
use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    ids::ProjectId, project_address::ProjectAddress, project_category::ProjectCategory,
};

/// Construction project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub version: i64,
    pub title: String,
    pub description: Option<String>,
    /// Number assigned by the construction company
    pub project_number: String,
    pub client: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: Option<ProjectCategory>,
    pub address: ProjectAddress,
    pub auditing: Auditing,
}
