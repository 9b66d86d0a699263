use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(TaskStatusEnumAvro {
    Draft => "DRAFT",
    Open => "OPEN",
    Started => "STARTED",
    Closed => "CLOSED",
    Accepted => "ACCEPTED",
});

event_names!(TaskEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Assigned => "ASSIGNED",
    Unassigned => "UNASSIGNED",
    Sent => "SENT",
    Started => "STARTED",
    Closed => "CLOSED",
    Accepted => "ACCEPTED",
    Reset => "RESET",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub project: AggregateIdentifierAvro,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub craft: AggregateIdentifierAvro,
    #[serde(default)]
    pub assignee: Option<AggregateIdentifierAvro>,
    #[serde(default)]
    pub workarea: Option<AggregateIdentifierAvro>,
    pub status: TaskStatusEnumAvro,
    /// Epoch millis
    #[serde(default)]
    pub edit_date: Option<i64>,
}

aggregate_record!(TaskAggregateAvro);

pub type TaskEventAvro = EventRecord<TaskEventEnumAvro, TaskAggregateAvro>;
