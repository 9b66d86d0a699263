//! Fixtures and cross-module scenarios of the company context

pub(crate) mod fixtures {
    use std::collections::BTreeSet;

    use kernel::messages::{
        AggregateEventMessageKey, AggregateIdentifierAvro, AuditingInformationAvro,
    };
    use serde_json::{Value, json};

    use crate::domain::entity::{company::Company, employee::Employee};
    use crate::domain::value_object::{
        address::{PostBoxAddress, StreetAddress},
        employee_role::EmployeeRole,
        ids::{CompanyId, EmployeeId, UserId},
    };
    use crate::messages::company::{CompanyAggregateAvro, StreetAddressAvro};
    use crate::messages::employee::{EmployeeAggregateAvro, EmployeeRoleEnumAvro};

    pub const CREATOR: &str = "4d1f2a3b-5c6d-4e7f-8a9b-0c1d2e3f4a51";
    /// 2024-03-01T00:00:00Z
    const MARCH_1: i64 = 1_709_251_200_000;

    pub fn company_id() -> CompanyId {
        CompanyId::new()
    }

    pub fn user_id() -> UserId {
        UserId::new()
    }

    pub fn auditing_record() -> AuditingInformationAvro {
        AuditingInformationAvro {
            created_by: AggregateIdentifierAvro::new(CREATOR, 0, "USER"),
            created_date: MARCH_1,
            last_modified_by: AggregateIdentifierAvro::new(CREATOR, 0, "USER"),
            last_modified_date: MARCH_1,
        }
    }

    pub fn post_box() -> PostBoxAddress {
        PostBoxAddress {
            post_box: "10 04 51".into(),
            zip_code: "70003".into(),
            city: "Stuttgart".into(),
            area: None,
            country: "Germany".into(),
        }
    }

    pub fn company(version: i64) -> Company {
        Company {
            id: company_id(),
            version,
            name: "Bauunternehmen Müller GmbH".into(),
            street_address: Some(StreetAddress {
                street: "Industriestraße".into(),
                house_number: "7".into(),
                zip_code: "70565".into(),
                city: "Stuttgart".into(),
                area: None,
                country: "Germany".into(),
            }),
            post_box_address: None,
            auditing: auditing_record().to_auditing().unwrap(),
        }
    }

    pub fn employee(company: CompanyId, user: UserId) -> Employee {
        Employee {
            id: EmployeeId::new(),
            version: 0,
            company,
            user,
            roles: BTreeSet::from([EmployeeRole::Fm]),
            auditing: auditing_record().to_auditing().unwrap(),
        }
    }

    pub fn company_record(version: i64) -> CompanyAggregateAvro {
        CompanyAggregateAvro {
            aggregate_identifier: AggregateIdentifierAvro::new(company_id(), version, "COMPANY"),
            auditing_information: auditing_record(),
            name: "Bauunternehmen Müller GmbH".into(),
            street_address: Some(StreetAddressAvro {
                street: "Industriestraße".into(),
                house_number: "7".into(),
                zip_code: "70565".into(),
                city: "Stuttgart".into(),
                area: None,
                country: "Germany".into(),
            }),
            post_box_address: None,
        }
    }

    pub fn company_id_of(record: &CompanyAggregateAvro) -> CompanyId {
        record.aggregate_identifier.to_id().unwrap()
    }

    pub fn employee_record(
        company: CompanyId,
        user: UserId,
        version: i64,
    ) -> EmployeeAggregateAvro {
        let identifier = AggregateIdentifierAvro::new(EmployeeId::new(), version, "EMPLOYEE");
        EmployeeAggregateAvro {
            aggregate_identifier: identifier,
            auditing_information: auditing_record(),
            company: AggregateIdentifierAvro::new(company, 0, "COMPANY"),
            user: AggregateIdentifierAvro::new(user, 0, "USER"),
            roles: vec![EmployeeRoleEnumAvro::Fm],
        }
    }

    pub fn key(company: CompanyId, aggregate_type: &str) -> AggregateEventMessageKey {
        AggregateEventMessageKey {
            root_context_identifier: company.to_string(),
            aggregate_identifier: AggregateIdentifierAvro::new(
                uuid::Uuid::new_v4(),
                0,
                aggregate_type,
            ),
        }
    }

    /// Key and JSON value of a company record
    pub fn company_value(name: &str, version: i64) -> (AggregateEventMessageKey, Value) {
        let aggregate = company_record(version);
        let key = AggregateEventMessageKey {
            root_context_identifier: aggregate.aggregate_identifier.identifier.clone(),
            aggregate_identifier: aggregate.aggregate_identifier.clone(),
        };
        (key, json!({ "name": name, "aggregate": aggregate }))
    }

    /// Key and JSON value of an employee record
    pub fn employee_value(
        company: CompanyId,
        user: UserId,
        name: &str,
        version: i64,
    ) -> (AggregateEventMessageKey, Value) {
        let aggregate = employee_record(company, user, version);
        let key = AggregateEventMessageKey {
            root_context_identifier: company.to_string(),
            aggregate_identifier: aggregate.aggregate_identifier.clone(),
        };
        (key, json!({ "name": name, "aggregate": aggregate }))
    }
}

use std::sync::Arc;

use crate::domain::repository::CompanyRepository;
use crate::{CompanyError, CompanyProjector, InMemoryCompanyRepository, Projection};

#[tokio::test]
async fn test_replayed_employee_history() {
    let repository = Arc::new(InMemoryCompanyRepository::new());
    let projector = CompanyProjector::new(Arc::clone(&repository));

    let (key, value) = fixtures::company_value("CREATED", 0);
    let company = key.aggregate_identifier.to_id().unwrap();
    projector.handle(&key, Some(value)).await.unwrap();

    let user = fixtures::user_id();
    let (key, mut value) = fixtures::employee_value(company, user, "CREATED", 0);
    projector.handle(&key, Some(value.clone())).await.unwrap();

    // Newer version with an extra role, then the original again
    value["aggregate"]["aggregateIdentifier"]["version"] = 1.into();
    value["aggregate"]["roles"] = serde_json::json!(["FM", "CR"]);
    value["name"] = "UPDATED".into();
    assert_eq!(
        projector.handle(&key, Some(value.clone())).await.unwrap(),
        Projection::Updated
    );
    value["aggregate"]["aggregateIdentifier"]["version"] = 0.into();
    assert_eq!(
        projector.handle(&key, Some(value)).await.unwrap(),
        Projection::Ignored
    );

    let employee = repository.find_employee_of_user(&user).await.unwrap().unwrap();
    assert_eq!(employee.roles.len(), 2);
    assert_eq!(employee.version, 1);
}

#[tokio::test]
async fn test_unknown_role_is_rejected_as_payload() {
    let projector = CompanyProjector::new(Arc::new(InMemoryCompanyRepository::new()));
    let (key, mut value) =
        fixtures::employee_value(fixtures::company_id(), fixtures::user_id(), "CREATED", 0);
    value["aggregate"]["roles"] = serde_json::json!(["ADMIN"]);

    let err = projector.handle(&key, Some(value)).await.unwrap_err();
    assert!(matches!(err, CompanyError::Payload(_)));
    assert_eq!(err.to_app_error().status_code(), 400);
}
