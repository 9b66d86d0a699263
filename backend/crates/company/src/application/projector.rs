//! Company Projector
//!
//! Keeps companies and employees in step with the company topic. A record
//! only replaces stored state when its version is newer.

use std::sync::Arc;

use kernel::messages::AggregateEventMessageKey;

pub use kernel::projection::Projection;

use crate::application::event::CompanyContextEvent;
use crate::domain::entity::{company::Company, employee::Employee};
use crate::domain::repository::CompanyRepository;
use crate::domain::value_object::{
    aggregate_type::AggregateType,
    ids::{CompanyId, EmployeeId, UserId},
};
use crate::error::{CompanyError, CompanyResult};

pub struct CompanyProjector<R>
where
    R: CompanyRepository,
{
    repository: Arc<R>,
}

impl<R> CompanyProjector<R>
where
    R: CompanyRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Entry point for one record; `None` is a tombstone.
    pub async fn handle(
        &self,
        key: &AggregateEventMessageKey,
        value: Option<serde_json::Value>,
    ) -> CompanyResult<Projection> {
        let Some(value) = value else {
            return self.on_tombstone(key).await;
        };

        match CompanyContextEvent::decode(key, value)? {
            CompanyContextEvent::Company(event) if event.is_deletion() => {
                self.on_company_deleted(event.aggregate.aggregate_identifier.to_id()?)
                    .await
            }
            CompanyContextEvent::Company(event) => {
                self.on_company(event.aggregate.to_company()?).await
            }
            CompanyContextEvent::Employee(event) if event.is_deletion() => {
                self.on_employee_deleted(event.aggregate.aggregate_identifier.to_id()?)
                    .await
            }
            CompanyContextEvent::Employee(event) => {
                self.on_employee(event.aggregate.to_employee()?).await
            }
        }
    }

    pub async fn on_company(&self, company: Company) -> CompanyResult<Projection> {
        let stored = self.repository.find_company(&company.id).await?;
        match stored {
            Some(stored) if stored.version >= company.version => {
                tracing::debug!(
                    company = %company.id,
                    stored = stored.version,
                    received = company.version,
                    "Ignoring outdated company record"
                );
                Ok(Projection::Ignored)
            }
            stored => {
                self.repository.save_company(&company).await?;
                tracing::info!(
                    company = %company.id,
                    version = company.version,
                    "Company projected"
                );
                Ok(if stored.is_some() {
                    Projection::Updated
                } else {
                    Projection::Created
                })
            }
        }
    }

    /// Remove the company together with its employees.
    pub async fn on_company_deleted(&self, id: CompanyId) -> CompanyResult<Projection> {
        let employees = self.repository.delete_employees_of(&id).await?;
        if !self.repository.delete_company(&id).await? && employees == 0 {
            return Ok(Projection::Missing);
        }

        tracing::info!(company = %id, employees, "Company deleted");
        Ok(Projection::Deleted {
            children: employees,
        })
    }

    pub async fn on_employee(&self, employee: Employee) -> CompanyResult<Projection> {
        let stored = self.repository.find_employee(&employee.id).await?;
        match stored {
            Some(stored) if stored.version >= employee.version => Ok(Projection::Ignored),
            stored => {
                if self.repository.find_company(&employee.company).await?.is_none() {
                    // Companies are published before their employees, so this
                    // only happens when replaying a partial topic.
                    tracing::warn!(
                        employee = %employee.id,
                        company = %employee.company,
                        "Employee of unknown company"
                    );
                }
                self.repository.save_employee(&employee).await?;
                Ok(if stored.is_some() {
                    Projection::Updated
                } else {
                    Projection::Created
                })
            }
        }
    }

    pub async fn on_employee_deleted(&self, id: EmployeeId) -> CompanyResult<Projection> {
        if self.repository.delete_employee(&id).await? {
            tracing::debug!(employee = %id, "Employee deleted");
            Ok(Projection::Deleted { children: 0 })
        } else {
            Ok(Projection::Missing)
        }
    }

    /// A deleted user no longer works for any company.
    pub async fn on_user_deleted(&self, user: UserId) -> CompanyResult<Projection> {
        match self.repository.find_employee_of_user(&user).await? {
            Some(employee) => self.on_employee_deleted(employee.id).await,
            None => Ok(Projection::Missing),
        }
    }

    pub async fn on_tombstone(&self, key: &AggregateEventMessageKey) -> CompanyResult<Projection> {
        let identifier = &key.aggregate_identifier;
        match AggregateType::of(identifier) {
            Some(AggregateType::Company) => self.on_company_deleted(identifier.to_id()?).await,
            Some(AggregateType::Employee) => self.on_employee_deleted(identifier.to_id()?).await,
            None => Err(CompanyError::UnsupportedAggregateType(
                identifier.aggregate_type.clone(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCompanyRepository;
    use crate::tests::fixtures;

    type Fixture = (
        CompanyProjector<InMemoryCompanyRepository>,
        Arc<InMemoryCompanyRepository>,
    );

    fn projector() -> Fixture {
        let repository = Arc::new(InMemoryCompanyRepository::new());
        (CompanyProjector::new(Arc::clone(&repository)), repository)
    }

    #[tokio::test]
    async fn test_company_version_gating() {
        let (projector, repository) = projector();
        let company = fixtures::company(0);
        let id = company.id;

        assert_eq!(projector.on_company(company.clone()).await.unwrap(), Projection::Created);
        assert_eq!(projector.on_company(company.clone()).await.unwrap(), Projection::Ignored);

        let mut renamed = company;
        renamed.version = 1;
        renamed.name = "Müller Bau AG".into();
        assert_eq!(projector.on_company(renamed).await.unwrap(), Projection::Updated);

        let stored = repository.find_company(&id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Müller Bau AG");
    }

    #[tokio::test]
    async fn test_records_through_handle() {
        let (projector, repository) = projector();
        let (key, value) = fixtures::company_value("CREATED", 0);
        let company: CompanyId = key.aggregate_identifier.to_id().unwrap();

        assert_eq!(projector.handle(&key, Some(value)).await.unwrap(), Projection::Created);

        let user = fixtures::user_id();
        let (key, value) = fixtures::employee_value(company, user, "CREATED", 0);
        assert_eq!(projector.handle(&key, Some(value)).await.unwrap(), Projection::Created);

        let employee = repository.find_employee_of_user(&user).await.unwrap().unwrap();
        assert_eq!(employee.company, company);
    }

    #[tokio::test]
    async fn test_company_deletion_removes_employees() {
        let (projector, repository) = projector();
        let company = fixtures::company(0);
        let id = company.id;
        projector.on_company(company).await.unwrap();
        for _ in 0..2 {
            let employee = fixtures::employee(id, fixtures::user_id());
            projector.on_employee(employee).await.unwrap();
        }

        assert_eq!(
            projector.on_company_deleted(id).await.unwrap(),
            Projection::Deleted { children: 2 }
        );
        assert_eq!(repository.counts().await, (0, 0));
        assert_eq!(projector.on_company_deleted(id).await.unwrap(), Projection::Missing);
    }

    #[tokio::test]
    async fn test_employee_tombstone_and_user_deletion() {
        let (projector, repository) = projector();
        let company = fixtures::company_id();
        let first = fixtures::employee(company, fixtures::user_id());
        let second = fixtures::employee(company, fixtures::user_id());
        projector.on_employee(first.clone()).await.unwrap();
        projector.on_employee(second.clone()).await.unwrap();

        let key = AggregateEventMessageKey {
            root_context_identifier: company.to_string(),
            aggregate_identifier: kernel::messages::AggregateIdentifierAvro::new(
                first.id, 1, "EMPLOYEE",
            ),
        };
        assert_eq!(
            projector.handle(&key, None).await.unwrap(),
            Projection::Deleted { children: 0 }
        );

        assert_eq!(
            projector.on_user_deleted(second.user).await.unwrap(),
            Projection::Deleted { children: 0 }
        );
        assert_eq!(
            projector.on_user_deleted(second.user).await.unwrap(),
            Projection::Missing
        );
        assert_eq!(repository.counts().await, (0, 0));
    }

    #[tokio::test]
    async fn test_tombstone_of_foreign_type() {
        let (projector, _) = projector();
        let key = fixtures::key(fixtures::company_id(), "TASK");
        assert!(matches!(
            projector.handle(&key, None).await,
            Err(CompanyError::UnsupportedAggregateType(_))
        ));
    }
}
