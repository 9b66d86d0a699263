use kernel::{aggregate_record, event_names};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

event_names!(CompanyEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetAddressAvro {
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    #[serde(default)]
    pub area: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBoxAddressAvro {
    pub post_box: String,
    pub zip_code: String,
    pub city: String,
    #[serde(default)]
    pub area: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub name: String,
    #[serde(default)]
    pub street_address: Option<StreetAddressAvro>,
    #[serde(default)]
    pub post_box_address: Option<PostBoxAddressAvro>,
}

aggregate_record!(CompanyAggregateAvro);

pub type CompanyEventAvro = EventRecord<CompanyEventEnumAvro, CompanyAggregateAvro>;
