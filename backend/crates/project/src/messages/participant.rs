use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(ParticipantRoleEnumAvro {
    Fm => "FM",
    Cr => "CR",
    Csm => "CSM",
});

record_enum!(ParticipantStatusEnumAvro {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Invited => "INVITED",
    Validation => "VALIDATION",
});

// A cancelled invitation leaves no participant behind.
event_names!(ParticipantEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deactivated => "DEACTIVATED",
    Reactivated => "REACTIVATED",
    Cancelled => "CANCELLED",
} deletion: [Cancelled]);

/// Participant record, third generation schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantAggregateG3Avro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub project: AggregateIdentifierAvro,
    #[serde(default)]
    pub company: Option<AggregateIdentifierAvro>,
    #[serde(default)]
    pub user: Option<AggregateIdentifierAvro>,
    pub role: ParticipantRoleEnumAvro,
    pub status: ParticipantStatusEnumAvro,
}

aggregate_record!(ParticipantAggregateG3Avro);

pub type ParticipantEventG3Avro = EventRecord<ParticipantEventEnumAvro, ParticipantAggregateG3Avro>;
