use kernel::id::{Id, IdMarker};

pub use kernel::id::UserId;

pub mod markers {
    pub struct Craft;
}

impl IdMarker for markers::Craft {
    const NAME: &'static str = "Craft";
}

/// Reference data craft (electrician, plumber, ...) a user works in
pub type CraftId = Id<markers::Craft>;
