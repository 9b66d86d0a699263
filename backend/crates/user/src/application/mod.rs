//! Application Layer

pub mod projector;

pub use projector::{Projection, UserProjector, handles_message};
