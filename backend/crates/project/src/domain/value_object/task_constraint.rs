//! Task Constraint
//!
//! Preconditions a foreman confirms before a task can start. Stored by
//! name; the custom members carry per-project labels.

use kernel::named_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskConstraint {
    Resources,
    Information,
    Equipment,
    Material,
    PreliminaryWork,
    SafeWorkingEnvironment,
    ExternalFactors,
    CommonUnderstanding,
    Custom1,
    Custom2,
    Custom3,
    Custom4,
}

named_code!(TaskConstraint, "TaskConstraint", {
    Resources => "RESOURCES",
    Information => "INFORMATION",
    Equipment => "EQUIPMENT",
    Material => "MATERIAL",
    PreliminaryWork => "PRELIMINARY_WORK",
    SafeWorkingEnvironment => "SAFE_WORKING_ENVIRONMENT",
    ExternalFactors => "EXTERNAL_FACTORS",
    CommonUnderstanding => "COMMON_UNDERSTANDING",
    Custom1 => "CUSTOM1",
    Custom2 => "CUSTOM2",
    Custom3 => "CUSTOM3",
    Custom4 => "CUSTOM4",
});
