use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(RelationTypeEnumAvro {
    FinishToStart => "FINISH_TO_START",
    PartOf => "PART_OF",
});

event_names!(RelationEventEnumAvro {
    Created => "CREATED",
    Critical => "CRITICAL",
    Uncritical => "UNCRITICAL",
    Deleted => "DELETED",
} deletion: [Deleted]);

/// Source and target carry their element type in the identifier's `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub project: AggregateIdentifierAvro,
    #[serde(rename = "type")]
    pub relation_type: RelationTypeEnumAvro,
    pub source: AggregateIdentifierAvro,
    pub target: AggregateIdentifierAvro,
    #[serde(default)]
    pub critical: Option<bool>,
}

aggregate_record!(RelationAggregateAvro);

pub type RelationEventAvro = EventRecord<RelationEventEnumAvro, RelationAggregateAvro>;
