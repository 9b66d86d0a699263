//! Record → Entity Mappers

use kernel::code::by_name;

use crate::domain::value_object::employee_role::EmployeeRole;
use crate::messages::employee::EmployeeRoleEnumAvro;

pub mod company;
pub mod employee;

impl From<EmployeeRoleEnumAvro> for EmployeeRole {
    fn from(value: EmployeeRoleEnumAvro) -> Self {
        by_name(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::code::{NamedCode, try_by_name};

    #[test]
    fn test_role_enums_have_the_same_members() {
        for role in EmployeeRoleEnumAvro::MEMBERS {
            assert!(try_by_name::<_, EmployeeRole>(*role).is_ok());
        }
        for role in EmployeeRole::MEMBERS {
            assert!(try_by_name::<_, EmployeeRoleEnumAvro>(*role).is_ok());
        }
        assert_eq!(EmployeeRole::from(EmployeeRoleEnumAvro::Cr), EmployeeRole::Cr);
    }
}
