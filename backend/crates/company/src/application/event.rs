//! Record Routing

use kernel::code::NamedCode;
use kernel::messages::{AggregateEventMessageKey, AggregateIdentifierAvro};

use crate::domain::value_object::aggregate_type::AggregateType;
use crate::error::{CompanyError, CompanyResult};
use crate::messages::{company::CompanyEventAvro, employee::EmployeeEventAvro};

/// Whether a record with this key belongs to the company context
pub fn handles_message(key: &AggregateEventMessageKey) -> bool {
    AggregateType::of(&key.aggregate_identifier).is_some()
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompanyContextEvent {
    Company(CompanyEventAvro),
    Employee(EmployeeEventAvro),
}

impl CompanyContextEvent {
    pub fn decode(key: &AggregateEventMessageKey, value: serde_json::Value) -> CompanyResult<Self> {
        match AggregateType::of(&key.aggregate_identifier) {
            Some(AggregateType::Company) => Ok(Self::Company(serde_json::from_value(value)?)),
            Some(AggregateType::Employee) => Ok(Self::Employee(serde_json::from_value(value)?)),
            None => Err(CompanyError::UnsupportedAggregateType(
                key.aggregate_type().to_owned(),
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Company(e) => e.name.code(),
            Self::Employee(e) => e.name.code(),
        }
    }

    pub fn version(&self) -> i64 {
        match self {
            Self::Company(e) => e.version(),
            Self::Employee(e) => e.version(),
        }
    }

    pub fn aggregate_identifier(&self) -> &AggregateIdentifierAvro {
        match self {
            Self::Company(e) => &e.aggregate.aggregate_identifier,
            Self::Employee(e) => &e.aggregate.aggregate_identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn test_routing() {
        let company = fixtures::company_id();
        assert!(handles_message(&fixtures::key(company, "EMPLOYEE")));
        assert!(!handles_message(&fixtures::key(company, "PROJECT")));
    }

    #[test]
    fn test_decode_employee() {
        let (key, value) =
            fixtures::employee_value(fixtures::company_id(), fixtures::user_id(), "UPDATED", 2);
        let event = CompanyContextEvent::decode(&key, value).unwrap();

        assert!(matches!(event, CompanyContextEvent::Employee(_)));
        assert_eq!(event.name(), "UPDATED");
        assert_eq!(event.version(), 2);
    }

    #[test]
    fn test_decode_rejects_foreign_types() {
        let key = fixtures::key(fixtures::company_id(), "USER");
        assert!(matches!(
            CompanyContextEvent::decode(&key, serde_json::json!({})),
            Err(CompanyError::UnsupportedAggregateType(_))
        ));
    }
}
