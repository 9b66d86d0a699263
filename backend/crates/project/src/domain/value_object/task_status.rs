//! Task Status
//!
//! Stored by ordinal in the relational snapshot store and by name in event
//! records. The ordinal order is part of the storage schema.

use kernel::{named_code, ordinal_code};

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i16)]
pub enum TaskStatus {
    /// Created, not yet sent to the assignee
    #[default]
    Draft = 0,

    /// Sent to the assignee
    Open = 1,

    Started = 2,

    /// Work reported as done
    Closed = 3,

    /// Done and accepted by the construction site manager
    Accepted = 4,
}

ordinal_code!(TaskStatus, "TaskStatus", [Draft, Open, Started, Closed, Accepted]);

named_code!(TaskStatus, "TaskStatus", {
    Draft => "DRAFT",
    Open => "OPEN",
    Started => "STARTED",
    Closed => "CLOSED",
    Accepted => "ACCEPTED",
});

impl TaskStatus {
    #[inline]
    pub const fn is_draft_or_open(&self) -> bool {
        matches!(self, Self::Draft | Self::Open)
    }

    /// Terminal for editing: no update, assignment or close
    #[inline]
    pub const fn is_closed_or_accepted(&self) -> bool {
        matches!(self, Self::Closed | Self::Accepted)
    }
}
