//! Aggregate Types of the company context

use kernel::code::NamedCode;
use kernel::messages::{AggregateIdentifierAvro, MappingError};
use kernel::named_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateType {
    Company,
    Employee,
}

named_code!(AggregateType, "CompanyAggregateType", {
    Company => "COMPANY",
    Employee => "EMPLOYEE",
});

impl AggregateType {
    /// `None` for aggregates of other contexts
    pub fn of(identifier: &AggregateIdentifierAvro) -> Option<Self> {
        Self::try_from_code(&identifier.aggregate_type).ok()
    }

    pub fn expect(self, identifier: &AggregateIdentifierAvro) -> Result<(), MappingError> {
        if identifier.aggregate_type == self.code() {
            return Ok(());
        }
        Err(MappingError::UnexpectedAggregateType {
            expected: self.code(),
            actual: identifier.aggregate_type.clone(),
        })
    }
}
