//! Repository Traits

use crate::domain::entity::{company::Company, employee::Employee};
use crate::domain::value_object::ids::{CompanyId, EmployeeId, UserId};
use crate::error::CompanyResult;

#[trait_variant::make(CompanyRepository: Send)]
pub trait LocalCompanyRepository {
    async fn find_company(&self, id: &CompanyId) -> CompanyResult<Option<Company>>;

    async fn save_company(&self, company: &Company) -> CompanyResult<()>;

    /// Returns whether the company existed
    async fn delete_company(&self, id: &CompanyId) -> CompanyResult<bool>;

    async fn find_employee(&self, id: &EmployeeId) -> CompanyResult<Option<Employee>>;

    /// The employee record of a user, if the user works for any company
    async fn find_employee_of_user(&self, user: &UserId) -> CompanyResult<Option<Employee>>;

    async fn save_employee(&self, employee: &Employee) -> CompanyResult<()>;

    async fn delete_employee(&self, id: &EmployeeId) -> CompanyResult<bool>;

    /// Remove every employee of a company, returns how many were removed
    async fn delete_employees_of(&self, company: &CompanyId) -> CompanyResult<usize>;
}
