use kernel::named_code;

/// Role of an employee within the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeRole {
    /// Construction site manager
    Csm,
    /// Company representative
    Cr,
    /// Foreman
    Fm,
}

named_code!(EmployeeRole, "EmployeeRole", {
    Csm => "CSM",
    Cr => "CR",
    Fm => "FM",
});

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::code::{NamedCode, verify_codes};

    #[test]
    fn test_codes() {
        verify_codes::<EmployeeRole>().unwrap();
        for role in EmployeeRole::MEMBERS {
            assert_eq!(EmployeeRole::from_code(role.code()), *role);
        }
        assert!(EmployeeRole::try_from_code("ADMIN").is_err());
    }
}
