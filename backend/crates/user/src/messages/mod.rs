//! Event Records of the user topic

pub use kernel::messages::{
    AggregateEventMessageKey, AggregateIdentifierAvro, AuditingInformationAvro, EventRecord,
};

pub mod user;
