//! Relation Type and Element Type

use kernel::named_code;

/// How two scheduled elements depend on each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// Target may start once the source is finished
    FinishToStart,
    /// Source is part of the target (task of a milestone)
    PartOf,
}

named_code!(RelationType, "RelationType", {
    FinishToStart => "FINISH_TO_START",
    PartOf => "PART_OF",
});

/// Kind of element at either end of a relation
///
/// The code is the aggregate type carried in the element's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationElementType {
    Task,
    Milestone,
}

named_code!(RelationElementType, "RelationElementType", {
    Task => "TASK",
    Milestone => "MILESTONE",
});
