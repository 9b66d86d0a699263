use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(MilestoneTypeEnumAvro {
    Project => "PROJECT",
    Investor => "INVESTOR",
    Craft => "CRAFT",
});

event_names!(MilestoneEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub project: AggregateIdentifierAvro,
    pub name: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneTypeEnumAvro,
    /// Epoch millis
    pub date: i64,
    pub header: bool,
    #[serde(default)]
    pub craft: Option<AggregateIdentifierAvro>,
    #[serde(default)]
    pub workarea: Option<AggregateIdentifierAvro>,
    #[serde(default)]
    pub description: Option<String>,
}

aggregate_record!(MilestoneAggregateAvro);

pub type MilestoneEventAvro = EventRecord<MilestoneEventEnumAvro, MilestoneAggregateAvro>;
