//! Entity Module
//!
//! Snapshots of the project context aggregates as the projector stores them.
//! Every entity carries the version of the record it was built from and the
//! auditing block.

pub mod day_card;
pub mod milestone;
pub mod participant;
pub mod project;
pub mod project_craft;
pub mod projection;
pub mod relation;
pub mod task;
pub mod task_constraint_selection;
pub mod topic;
pub mod work_area;

macro_rules! versioned {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl kernel::validation::Versioned for $entity {
                fn version(&self) -> i64 {
                    self.version
                }
            }
        )+
    };
}

versioned!(
    day_card::DayCard,
    milestone::Milestone,
    participant::Participant,
    project::Project,
    project_craft::ProjectCraft,
    relation::Relation,
    task::Task,
    task_constraint_selection::TaskConstraintSelection,
    topic::Topic,
    work_area::WorkArea,
);
