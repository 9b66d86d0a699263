use kernel::{aggregate_record, event_names, record_enum};
use serde::{Deserialize, Serialize};

use super::{AggregateIdentifierAvro, AuditingInformationAvro, EventRecord};

record_enum!(EmployeeRoleEnumAvro {
    Csm => "CSM",
    Cr => "CR",
    Fm => "FM",
});

event_names!(EmployeeEventEnumAvro {
    Created => "CREATED",
    Updated => "UPDATED",
    Deleted => "DELETED",
} deletion: [Deleted]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAggregateAvro {
    pub aggregate_identifier: AggregateIdentifierAvro,
    pub auditing_information: AuditingInformationAvro,
    pub company: AggregateIdentifierAvro,
    pub user: AggregateIdentifierAvro,
    #[serde(default)]
    pub roles: Vec<EmployeeRoleEnumAvro>,
}

aggregate_record!(EmployeeAggregateAvro);

pub type EmployeeEventAvro = EventRecord<EmployeeEventEnumAvro, EmployeeAggregateAvro>;
