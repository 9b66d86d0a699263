use kernel::{aggregate_record, event_names};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

event_names!(WorkAreaEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAreaAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}

aggregate_record!(WorkAreaAggregateAvro);

pub type WorkAreaEventAvro = EventRecord<WorkAreaEventEnumAvro, WorkAreaAggregateAvro>;
