//! Value Object Module

pub mod aggregate_type;
pub mod day_card_status;
pub mod ids;
pub mod milestone_type;
pub mod participant;
pub mod project_address;
pub mod project_category;
pub mod relation_type;
pub mod task_constraint;
pub mod task_status;
pub mod topic_criticality;
