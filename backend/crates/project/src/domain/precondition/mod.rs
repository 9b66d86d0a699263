//! Preconditions
//!
//! Checks a command handler runs against the current snapshot before it
//! changes anything. Every failure is a [`kernel::validation::Violation`]
//! with a key from [`crate::i18n`].

pub mod day_card;
pub mod participant;
pub mod task;
