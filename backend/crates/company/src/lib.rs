//! Company Context
//!
//! Companies and their employees as the other contexts see them:
//! - `domain/` - Entities, value objects, preconditions, repository trait
//! - `messages/` - Event records of the company topic
//! - `mapper/` - Record → entity conversion
//! - `application/` - Record routing and projector
//! - `infra/` - Repository implementations
//!
//! Employee records are keyed by their company.

pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infra;
pub mod mapper;
pub mod messages;

#[cfg(test)]
mod tests;

pub use application::{CompanyContextEvent, CompanyProjector, Projection, handles_message};
pub use error::{CompanyError, CompanyResult};
pub use infra::memory::InMemoryCompanyRepository;
