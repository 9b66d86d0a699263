//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Every aggregate gets its own
//! marker type so a `TaskId` can never be passed where a `ProjectId` is
//! expected, while both share one implementation over [`Uuid`].
//!
//! At system boundaries (event records, JSON, storage) an ID travels as the
//! hyphenated UUID string.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a string is not a valid UUID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} identifier '{input}': {reason}")]
pub struct IdParseError {
    /// Marker name of the ID being parsed (e.g. "Project")
    pub kind: &'static str,
    /// The rejected input
    pub input: String,
    /// Parser detail
    pub reason: String,
}

/// Names the entity kind behind an [`Id`], used in error messages and logs.
pub trait IdMarker {
    const NAME: &'static str;
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// let id: UserId = "3f1c0c2e-6d0b-4d43-9c3a-0d3c5f0f6a11".parse().unwrap();
/// assert_eq!(id.to_string(), "3f1c0c2e-6d0b-4d43-9c3a-0d3c5f0f6a11");
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T: IdMarker> Id<T> {
    /// Parse the hyphenated (or simple) UUID form.
    pub fn parse_str(input: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(input)
            .map(Self::from_uuid)
            .map_err(|e| IdParseError {
                kind: T::NAME,
                input: input.to_owned(),
                reason: e.to_string(),
            })
    }
}

// Manual impls: derives would demand `T: Clone`, `T: Eq`, ... on the marker.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Id({})", T::NAME, self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T: IdMarker> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.value)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_str(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "sqlx")]
mod sqlx_support {
    use super::Id;
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
    use uuid::Uuid;

    impl<T> sqlx::Type<Postgres> for Id<T> {
        fn type_info() -> PgTypeInfo {
            <Uuid as sqlx::Type<Postgres>>::type_info()
        }
    }

    impl<T> sqlx::Encode<'_, Postgres> for Id<T> {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <Uuid as sqlx::Encode<'_, Postgres>>::encode_by_ref(self.as_uuid(), buf)
        }
    }

    impl<'r, T> sqlx::Decode<'r, Postgres> for Id<T> {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            <Uuid as sqlx::Decode<'r, Postgres>>::decode(value).map(Id::from_uuid)
        }
    }
}

/// Marker types shared by every bounded context
pub mod markers {
    use super::IdMarker;

    /// Marker for User IDs (auditing, participants, employees)
    pub struct User;

    impl IdMarker for User {
        const NAME: &'static str = "User";
    }

    /// Marker for Company IDs (employees, project participants)
    pub struct Company;

    impl IdMarker for Company {
        const NAME: &'static str = "Company";
    }
}

/// Users appear in the auditing block of every event record.
pub type UserId = Id<markers::User>;
/// Companies are referenced by the project and company contexts.
pub type CompanyId = Id<markers::Company>;
