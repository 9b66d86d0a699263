//! Entity Module

pub mod company;
pub mod employee;

impl kernel::validation::Versioned for company::Company {
    fn version(&self) -> i64 {
        self.version
    }
}

impl kernel::validation::Versioned for employee::Employee {
    fn version(&self) -> i64 {
        self.version
    }
}
