//! Application Layer
//!
//! Record routing, the projector and lookups over the projections.

pub mod event;
pub mod lookup;
pub mod projector;

// Re-exports
pub use event::{ProjectContextEvent, handles_message};
pub use lookup::ProjectionLookup;
pub use projector::{ProjectProjector, Projection};
