//! Employee Entity

use std::collections::BTreeSet;

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    employee_role::EmployeeRole,
    ids::{CompanyId, EmployeeId, UserId},
};

/// A user working for a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub version: i64,
    pub company: CompanyId,
    pub user: UserId,
    pub roles: BTreeSet<EmployeeRole>,
    pub auditing: Auditing,
}

impl Employee {
    #[inline]
    pub fn has_role(&self, role: EmployeeRole) -> bool {
        self.roles.contains(&role)
    }
}
