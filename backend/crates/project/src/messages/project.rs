use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(ProjectCategoryEnumAvro {
    Nb => "NB",
    Ob => "OB",
    Rb => "RB",
});

event_names!(ProjectEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAddressAvro {
    pub city: String,
    pub house_number: String,
    pub street: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub project_number: String,
    #[serde(default)]
    pub client: Option<String>,
    /// Epoch millis
    pub start: i64,
    /// Epoch millis
    pub end: i64,
    #[serde(default)]
    pub category: Option<ProjectCategoryEnumAvro>,
    pub project_address: ProjectAddressAvro,
}

aggregate_record!(ProjectAggregateAvro);

pub type ProjectEventAvro = EventRecord<ProjectEventEnumAvro, ProjectAggregateAvro>;
