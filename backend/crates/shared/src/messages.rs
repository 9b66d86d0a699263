//! Common Event Records
//!
//! Building blocks every event record shares: the aggregate identifier, the
//! auditing block and the record key. Field names follow the Avro schemas
//! (camelCase), so the JSON encoding of a record deserializes directly.
//!
//! Identifiers inside records are plain strings; they become typed IDs during
//! mapping, where a malformed value is reported as
//! [`MappingError::InvalidIdentifier`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::NamedCode;
use crate::id::{Id, IdMarker, IdParseError, UserId};

/// Failure while turning an event record into a domain object
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error(transparent)]
    InvalidIdentifier(#[from] IdParseError),

    #[error("{field} is out of range: {millis} ms since epoch")]
    TimestampOutOfRange { field: &'static str, millis: i64 },

    #[error("expected aggregate type {expected}, got {actual}")]
    UnexpectedAggregateType {
        expected: &'static str,
        actual: String,
    },
}

/// Identity and version of one aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateIdentifierAvro {
    pub identifier: String,
    pub version: i64,
    #[serde(rename = "type")]
    pub aggregate_type: String,
}

impl AggregateIdentifierAvro {
    pub fn new(identifier: impl ToString, version: i64, aggregate_type: impl Into<String>) -> Self {
        Self {
            identifier: identifier.to_string(),
            version,
            aggregate_type: aggregate_type.into(),
        }
    }

    /// Typed ID of the referenced aggregate
    pub fn to_id<T: IdMarker>(&self) -> Result<Id<T>, MappingError> {
        Ok(Id::parse_str(&self.identifier)?)
    }
}

/// Who created / last changed the aggregate, and when (epoch millis)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditingInformationAvro {
    pub created_by: AggregateIdentifierAvro,
    pub created_date: i64,
    pub last_modified_by: AggregateIdentifierAvro,
    pub last_modified_date: i64,
}

/// Auditing block of a domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auditing {
    pub created_by: UserId,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: UserId,
    pub last_modified_date: DateTime<Utc>,
}

impl AuditingInformationAvro {
    pub fn to_auditing(&self) -> Result<Auditing, MappingError> {
        Ok(Auditing {
            created_by: self.created_by.to_id()?,
            created_date: datetime_from_millis("createdDate", self.created_date)?,
            last_modified_by: self.last_modified_by.to_id()?,
            last_modified_date: datetime_from_millis("lastModifiedDate", self.last_modified_date)?,
        })
    }
}

/// Kafka record key of an aggregate event
///
/// `rootContextIdentifier` is the partitioning context (the project for every
/// project-scoped aggregate, the company for employees, the user itself for
/// users).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateEventMessageKey {
    pub root_context_identifier: String,
    pub aggregate_identifier: AggregateIdentifierAvro,
}

impl AggregateEventMessageKey {
    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_identifier.aggregate_type
    }

    pub fn root_context_id<T: IdMarker>(&self) -> Result<Id<T>, MappingError> {
        Ok(Id::parse_str(&self.root_context_identifier)?)
    }
}

/// Aggregate part of an event record
pub trait AggregateRecord {
    fn aggregate_identifier(&self) -> &AggregateIdentifierAvro;

    fn auditing_information(&self) -> &AuditingInformationAvro;

    fn version(&self) -> i64 {
        self.aggregate_identifier().version
    }
}

/// Name enum of an event record (`CREATED`, `UPDATED`, ...)
pub trait EventName: NamedCode {
    /// The event removes the aggregate
    fn is_deletion(&self) -> bool;
}

/// Value of an event record: what happened and the aggregate state after it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord<N, A> {
    pub name: N,
    pub aggregate: A,
}

impl<N: EventName, A: AggregateRecord> EventRecord<N, A> {
    pub fn version(&self) -> i64 {
        self.aggregate.version()
    }

    pub fn is_deletion(&self) -> bool {
        self.name.is_deletion()
    }
}

/// Declare a schema enum with its stored names.
///
/// The enum gets the usual derives plus [`NamedCode`](crate::code::NamedCode),
/// `Display` and string serde.
#[macro_export]
macro_rules! record_enum {
    ($(#[$doc:meta])* $t:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $t {
            $($variant),+
        }

        $crate::named_code!($t, stringify!($t), { $($variant => $code),+ });
    };
}

/// Declare an event name enum; the listed members remove the aggregate.
#[macro_export]
macro_rules! event_names {
    (
        $t:ident { $($variant:ident => $code:literal),+ $(,)? }
        deletion: [$($deleted:ident),*]
    ) => {
        $crate::record_enum!($t { $($variant => $code),+ });

        impl $crate::messages::EventName for $t {
            fn is_deletion(&self) -> bool {
                false $(|| matches!(self, Self::$deleted))*
            }
        }
    };
}

/// Implement [`AggregateRecord`] for records with the two common fields.
#[macro_export]
macro_rules! aggregate_record {
    ($($record:ty),+ $(,)?) => {
        $(
            impl $crate::messages::AggregateRecord for $record {
                fn aggregate_identifier(&self) -> &$crate::messages::AggregateIdentifierAvro {
                    &self.aggregate_identifier
                }

                fn auditing_information(&self) -> &$crate::messages::AuditingInformationAvro {
                    &self.auditing_information
                }
            }
        )+
    };
}

/// Epoch millis → UTC timestamp
pub fn datetime_from_millis(
    field: &'static str,
    millis: i64,
) -> Result<DateTime<Utc>, MappingError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or(MappingError::TimestampOutOfRange { field, millis })
}

/// Epoch millis → calendar date (UTC)
pub fn date_from_millis(field: &'static str, millis: i64) -> Result<NaiveDate, MappingError> {
    datetime_from_millis(field, millis).map(|dt| dt.date_naive())
}
