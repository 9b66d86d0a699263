//! Project Context Identifiers
//!
//! One marker per aggregate of the project context. `UserId` and `CompanyId`
//! come from the kernel because other contexts own those aggregates.

use kernel::id::{Id, IdMarker};

pub use kernel::id::{CompanyId, UserId};

macro_rules! id_markers {
    ($($(#[$doc:meta])* $marker:ident => $alias:ident),+ $(,)?) => {
        /// Marker types of the project context
        pub mod markers {
            $(
                pub struct $marker;
            )+
        }

        $(
            impl IdMarker for markers::$marker {
                const NAME: &'static str = stringify!($marker);
            }

            $(#[$doc])*
            pub type $alias = Id<markers::$marker>;
        )+
    };
}

id_markers! {
    /// Root of every other aggregate in this context
    Project => ProjectId,
    Task => TaskId,
    /// Day card of a task; records don't carry the project
    DayCard => DayCardId,
    Milestone => MilestoneId,
    Participant => ParticipantId,
    /// Topic of a task; records don't carry the project
    Topic => TopicId,
    Relation => RelationId,
    WorkArea => WorkAreaId,
    ProjectCraft => ProjectCraftId,
    TaskConstraintSelection => TaskConstraintSelectionId,
}
