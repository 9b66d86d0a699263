//! Milestone Type
//!
//! Stored by ordinal in the snapshot store.

use kernel::{named_code, ordinal_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum MilestoneType {
    /// Shown in the project row of the calendar
    Project = 0,
    Investor = 1,
    /// Belongs to a project craft
    Craft = 2,
}

ordinal_code!(MilestoneType, "MilestoneType", [Project, Investor, Craft]);

named_code!(MilestoneType, "MilestoneType", {
    Project => "PROJECT",
    Investor => "INVESTOR",
    Craft => "CRAFT",
});

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::code::{NamedCode, OrdinalCode};

    #[test]
    fn test_ordinals_follow_declaration_order() {
        assert_eq!(MilestoneType::Project.ordinal(), 0);
        assert_eq!(MilestoneType::from_ordinal(2), MilestoneType::Craft);
        assert_eq!(MilestoneType::from_code("INVESTOR").ordinal(), 1);
    }
}
