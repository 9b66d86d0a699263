//! Task constraint selection records
//!
//! The schemas still use the old name "task action" for task constraints.

use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(TaskActionEnumAvro {
    Resources => "RESOURCES",
    Information => "INFORMATION",
    Equipment => "EQUIPMENT",
    Material => "MATERIAL",
    PreliminaryWork => "PRELIMINARY_WORK",
    SafeWorkingEnvironment => "SAFE_WORKING_ENVIRONMENT",
    ExternalFactors => "EXTERNAL_FACTORS",
    CommonUnderstanding => "COMMON_UNDERSTANDING",
    Custom1 => "CUSTOM1",
    Custom2 => "CUSTOM2",
    Custom3 => "CUSTOM3",
    Custom4 => "CUSTOM4",
});

event_names!(TaskActionSelectionEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskActionSelectionAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub task: AggregateIdentifierAvro,
    #[serde(default)]
    pub actions: Vec<TaskActionEnumAvro>,
}

aggregate_record!(TaskActionSelectionAggregateAvro);

pub type TaskActionSelectionEventAvro =
    EventRecord<TaskActionSelectionEventEnumAvro, TaskActionSelectionAggregateAvro>;
