//! In-Memory Repository Implementation

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::entity::{company::Company, employee::Employee};
use crate::domain::repository::CompanyRepository;
use crate::domain::value_object::ids::{CompanyId, EmployeeId, UserId};
use crate::error::CompanyResult;

#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    companies: RwLock<HashMap<CompanyId, Company>>,
    employees: RwLock<HashMap<EmployeeId, Employee>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (companies, employees) held
    pub async fn counts(&self) -> (usize, usize) {
        (
            self.companies.read().await.len(),
            self.employees.read().await.len(),
        )
    }

    pub async fn employees_of(&self, company: &CompanyId) -> Vec<Employee> {
        let mut employees: Vec<_> = self
            .employees
            .read()
            .await
            .values()
            .filter(|e| e.company == *company)
            .cloned()
            .collect();
        employees.sort_by_key(|e| e.id);
        employees
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_company(&self, id: &CompanyId) -> CompanyResult<Option<Company>> {
        Ok(self.companies.read().await.get(id).cloned())
    }

    async fn save_company(&self, company: &Company) -> CompanyResult<()> {
        self.companies
            .write()
            .await
            .insert(company.id, company.clone());
        Ok(())
    }

    async fn delete_company(&self, id: &CompanyId) -> CompanyResult<bool> {
        Ok(self.companies.write().await.remove(id).is_some())
    }

    async fn find_employee(&self, id: &EmployeeId) -> CompanyResult<Option<Employee>> {
        Ok(self.employees.read().await.get(id).cloned())
    }

    async fn find_employee_of_user(&self, user: &UserId) -> CompanyResult<Option<Employee>> {
        Ok(self
            .employees
            .read()
            .await
            .values()
            .find(|e| e.user == *user)
            .cloned())
    }

    async fn save_employee(&self, employee: &Employee) -> CompanyResult<()> {
        self.employees
            .write()
            .await
            .insert(employee.id, employee.clone());
        Ok(())
    }

    async fn delete_employee(&self, id: &EmployeeId) -> CompanyResult<bool> {
        Ok(self.employees.write().await.remove(id).is_some())
    }

    async fn delete_employees_of(&self, company: &CompanyId) -> CompanyResult<usize> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|_, e| e.company != *company);
        Ok(before - employees.len())
    }
}
