use kernel::{aggregate_record, event_names};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

event_names!(ProjectCraftEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

/// Project craft record, second generation schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCraftAggregateG2Avro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub project: AggregateIdentifierAvro,
    pub name: String,
    pub color: String,
}

aggregate_record!(ProjectCraftAggregateG2Avro);

pub type ProjectCraftEventG2Avro = EventRecord<ProjectCraftEventEnumAvro, ProjectCraftAggregateG2Avro>;
