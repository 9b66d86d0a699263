//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the smartsite domain vocabulary:
//! - Typed UUID identifiers
//! - Stored-code conversion for closed enums
//! - Message keys and precondition guards
//! - Common error types and result aliases
//! - Record building blocks shared by every event schema
//! - The outcome type every projector reports
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all bounded contexts.

pub mod code;
pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod i18n;
pub mod id;
pub mod messages;
pub mod projection;
pub mod validation;

#[doc(hidden)]
pub use serde as __serde;
