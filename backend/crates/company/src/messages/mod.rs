//! Event Records of the company context
//!
//! JSON encoding of the Avro schemas published on the company topic.

pub use kernel::messages::{
    AggregateEventMessageKey, AggregateIdentifierAvro, AuditingInformationAvro, EventRecord,
};

pub mod company;
pub mod employee;
