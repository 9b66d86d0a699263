//! Value Object Module

pub mod aggregate_type;
pub mod gender;
pub mod ids;
pub mod phone_number;
