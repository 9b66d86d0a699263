//! Relation Entity

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_object::{
    ids::{MilestoneId, ProjectId, RelationId, TaskId},
    relation_type::{RelationElementType, RelationType},
};

/// One end of a relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationElement {
    pub element_type: RelationElementType,
    pub identifier: Uuid,
}

impl RelationElement {
    pub fn task(id: TaskId) -> Self {
        Self {
            element_type: RelationElementType::Task,
            identifier: id.into_uuid(),
        }
    }

    pub fn milestone(id: MilestoneId) -> Self {
        Self {
            element_type: RelationElementType::Milestone,
            identifier: id.into_uuid(),
        }
    }
}

/// Dependency between two tasks or milestones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub id: RelationId,
    pub version: i64,
    pub project: ProjectId,
    pub relation_type: RelationType,
    pub source: RelationElement,
    pub target: RelationElement,
    /// Only computed for finish-to-start relations
    pub critical: Option<bool>,
    pub auditing: Auditing,
}
