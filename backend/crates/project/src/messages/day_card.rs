use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(DayCardStatusEnumAvro {
    Open => "OPEN",
    NotDone => "NOTDONE",
    Done => "DONE",
    Approved => "APPROVED",
});

record_enum!(DayCardReasonNotDoneEnumAvro {
    DelayedMaterial => "DELAYED_MATERIAL",
    NoConcession => "NO_CONCESSION",
    ConcessionNotRecognized => "CONCESSION_NOT_RECOGNIZED",
    ChangedPriority => "CHANGED_PRIORITY",
    ManpowerShortage => "MANPOWER_SHORTAGE",
    Overestimation => "OVERESTIMATION",
    Touchup => "TOUCHUP",
    MissingInfos => "MISSING_INFOS",
    MissingTools => "MISSING_TOOLS",
    BadWeather => "BAD_WEATHER",
    Custom1 => "CUSTOM1",
    Custom2 => "CUSTOM2",
    Custom3 => "CUSTOM3",
    Custom4 => "CUSTOM4",
});

event_names!(DayCardEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Cancelled => "CANCELLED",
    Completed => "COMPLETED",
    Approved => "APPROVED",
    Reset => "RESET",
    Deleted => "DELETED",
} deletion: [Deleted]);

/// Day card record, second generation schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCardAggregateG2Avro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub task: AggregateIdentifierAvro,
    pub title: String,
    pub manpower: f64,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: DayCardStatusEnumAvro,
    #[serde(default)]
    pub reason: Option<DayCardReasonNotDoneEnumAvro>,
}

aggregate_record!(DayCardAggregateG2Avro);

pub type DayCardEventG2Avro = EventRecord<DayCardEventEnumAvro, DayCardAggregateG2Avro>;
