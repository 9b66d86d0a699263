use kernel::code::NamedCode;
use kernel::messages::{AggregateIdentifierAvro, MappingError};
use kernel::named_code;

/// Aggregate types published on the user topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateType {
    User,
}

named_code!(AggregateType, "UserAggregateType", { User => "USER" });

impl AggregateType {
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
