//! Company Context Identifiers

use kernel::id::{Id, IdMarker};

pub use kernel::id::{CompanyId, UserId};

pub mod markers {
    pub struct Employee;
}

impl IdMarker for markers::Employee {
    const NAME: &'static str = "Employee";
}

/// Assignment of a user to a company
pub type EmployeeId = Id<markers::Employee>;
