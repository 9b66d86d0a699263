use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    ids::{ProjectId, TaskId, TopicId},
    topic_criticality::TopicCriticality,
};

/// Issue raised on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub version: i64,
    /// Taken from the record key
    pub project: ProjectId,
    pub task: TaskId,
    pub criticality: TopicCriticality,
    pub description: Option<String>,
    pub auditing: Auditing,
}
