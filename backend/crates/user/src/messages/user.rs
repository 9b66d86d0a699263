use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(GenderEnumAvro {
    Male => "MALE",
    Female => "FEMALE",
});

record_enum!(PhoneNumberTypeEnumAvro {
    Business => "BUSINESS",
    Home => "HOME",
    Mobile => "MOBILE",
    Fax => "FAX",
    Organization => "ORGANIZATION",
    Pager => "PAGER",
    Assistant => "ASSISTANT",
    Other => "OTHER",
});

event_names!(UserEventEnumAvro {
    Created => "CREATED",
    Registered => "REGISTERED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberAvro {
    pub phone_number_type: PhoneNumberTypeEnumAvro,
    pub country_code: String,
    pub call_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    #[serde(default)]
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub gender: Option<GenderEnumAvro>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub crafts: Vec<AggregateIdentifierAvro>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumberAvro>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub registered: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

aggregate_record!(UserAggregateAvro);

pub type UserEventAvro = EventRecord<UserEventEnumAvro, UserAggregateAvro>;
