//! Projection Outcome
//!
//! What one record did to a read model. Every projector reports this, so the
//! replay tool can summarize records of all contexts the same way.

use std::fmt;

/// Effect of one record on the projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    Created,
    Updated,
    /// Version not newer than the stored one
    Ignored,
    /// Aggregate removed, with the number of dependent projections removed along
    Deleted { children: usize },
    /// Deletion of something never projected
    Missing,
}

impl Projection {
    /// Label used in logs and summaries
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Ignored => "ignored",
            Self::Deleted { .. } => "deleted",
            Self::Missing => "missing",
        }
    }

    /// Whether the record changed any stored state
    pub const fn is_change(&self) -> bool {
        matches!(self, Self::Created | Self::Updated | Self::Deleted { .. })
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
