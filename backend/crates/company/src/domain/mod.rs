//! Domain Layer

pub mod entity;
pub mod precondition;
pub mod repository;
pub mod value_object;

pub use repository::{CompanyRepository, LocalCompanyRepository};
