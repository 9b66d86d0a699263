//! Application Layer

pub mod event;
pub mod projector;

pub use event::{CompanyContextEvent, handles_message};
pub use projector::{CompanyProjector, Projection};
