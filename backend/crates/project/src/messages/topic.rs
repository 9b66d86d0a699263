use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(TopicCriticalityEnumAvro {
    Critical => "CRITICAL",
    Uncritical => "UNCRITICAL",
});

event_names!(TopicEventEnumAvro {
    Created => "CREATED",
    Escalated => "ESCALATED",
    Deescalated => "DEESCALATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

/// Topic record, second generation schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAggregateG2Avro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub task: AggregateIdentifierAvro,
    pub criticality: TopicCriticalityEnumAvro,
    #[serde(default)]
    pub description: Option<String>,
}

aggregate_record!(TopicAggregateG2Avro);

pub type TopicEventG2Avro = EventRecord<TopicEventEnumAvro, TopicAggregateG2Avro>;
