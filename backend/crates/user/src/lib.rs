//! User Context
//!
//! Users as the other contexts see them: names, contact data, crafts and the
//! admin / locked flags. A deleted user is kept in anonymized form so
//! references from auditing blocks and participants stay resolvable.
//!
//! - `domain/` - Entity, value objects, preconditions, repository trait
//! - `messages/` - Event records of the user topic
//! - `mapper/` - Record → entity conversion
//! - `application/` - Record routing and projector
//! - `infra/` - Repository implementations

pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infra;
pub mod mapper;
pub mod messages;


pub use application::{Projection, UserProjector, handles_message};
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
