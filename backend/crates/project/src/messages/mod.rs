//! Event Records of the project context
//!
//! JSON encoding of the Avro schemas published on the project topic. Field
//! names follow the schemas; enums are the schema enums, converted to the
//! domain enums by name during mapping.

pub use kernel::messages::{
    AggregateEventMessageKey, AggregateIdentifierAvro, AggregateRecord, AuditingInformationAvro,
    EventName, EventRecord,
};

pub mod day_card;
pub mod milestone;
pub mod participant;
pub mod project;
pub mod project_craft;
pub mod relation;
pub mod task;
pub mod task_action;
pub mod topic;
pub mod work_area;
