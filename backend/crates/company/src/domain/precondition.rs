//! Company Preconditions

use kernel::validation::{Guard, Violation, ensure};

use crate::domain::entity::company::Company;
use crate::i18n::{
    COMPANY_VALIDATION_ERROR_EXIST_COMPANY_EMPLOYEE, COMPANY_VALIDATION_ERROR_MISSING_ADDRESS,
};

impl Company {
    /// A company needs a street or a post box address.
    pub fn ensure_has_address(&self) -> Result<(), Violation> {
        ensure(self.has_address(), COMPANY_VALIDATION_ERROR_MISSING_ADDRESS)
    }

    /// Only a company without employees can be deleted.
    pub fn ensure_deletable(
        &self,
        expected_version: i64,
        employees: usize,
    ) -> Result<(), Violation> {
        Guard::of(self)
            .version_matches(expected_version)
            .and_then(|g| {
                g.precondition(
                    |_| employees == 0,
                    COMPANY_VALIDATION_ERROR_EXIST_COMPANY_EMPLOYEE,
                )
            })
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;
    use kernel::i18n::common;

    #[test]
    fn test_one_address_is_enough() {
        let mut company = fixtures::company(0);
        assert!(company.ensure_has_address().is_ok());

        company.street_address = None;
        company.post_box_address = Some(fixtures::post_box());
        assert!(company.ensure_has_address().is_ok());
    }

    #[test]
    fn test_missing_address() {
        let mut company = fixtures::company(0);
        company.street_address = None;
        company.post_box_address = None;

        assert_eq!(
            company.ensure_has_address().unwrap_err().message_key(),
            COMPANY_VALIDATION_ERROR_MISSING_ADDRESS
        );
    }

    #[test]
    fn test_delete_with_employees() {
        let company = fixtures::company(2);
        assert!(company.ensure_deletable(2, 0).is_ok());
        assert_eq!(
            company.ensure_deletable(2, 1).unwrap_err().message_key(),
            COMPANY_VALIDATION_ERROR_EXIST_COMPANY_EMPLOYEE
        );
        assert_eq!(
            company.ensure_deletable(1, 0).unwrap_err().message_key(),
            common::COMMON_VALIDATION_ERROR_ENTITY_OUTDATED
        );
    }
}
