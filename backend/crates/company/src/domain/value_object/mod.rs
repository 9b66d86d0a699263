//! Value Object Module

pub mod address;
pub mod aggregate_type;
pub mod employee_role;
pub mod ids;
