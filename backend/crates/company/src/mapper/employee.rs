use kernel::messages::MappingError;

use crate::domain::entity::employee::Employee;
use crate::domain::value_object::aggregate_type::AggregateType;
use crate::messages::employee::EmployeeAggregateAvro;

impl EmployeeAggregateAvro {
    pub fn to_employee(&self) -> Result<Employee, MappingError> {
        AggregateType::Employee.expect(&self.aggregate_identifier)?;
        AggregateType::Company.expect(&self.company)?;

        Ok(Employee {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            company: self.company.to_id()?,
            user: self.user.to_id()?,
            roles: self.roles.iter().copied().map(Into::into).collect(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
