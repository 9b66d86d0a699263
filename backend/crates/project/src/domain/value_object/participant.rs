//! Participant Role and Status

use kernel::named_code;

/// Role of a participant within one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantRole {
    /// Foreman
    Fm,
    /// Company representative
    Cr,
    /// Construction site manager
    Csm,
}

named_code!(ParticipantRole, "ParticipantRole", {
    Fm => "FM",
    Cr => "CR",
    Csm => "CSM",
});

impl ParticipantRole {
    /// Roles allowed to accept or reset tasks of other companies
    #[inline]
    pub const fn is_csm(&self) -> bool {
        matches!(self, Self::Csm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticipantStatus {
    #[default]
    Active,
    Inactive,
    /// Invitation sent, user not registered yet
    Invited,
    /// Registered, employee assignment pending
    Validation,
}

named_code!(ParticipantStatus, "ParticipantStatus", {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Invited => "INVITED",
    Validation => "VALIDATION",
});

impl ParticipantStatus {
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::code::NamedCode;

    #[test]
    fn test_role_codes() {
        assert_eq!(ParticipantRole::Csm.code(), "CSM");
        assert_eq!(ParticipantRole::from_code("FM"), ParticipantRole::Fm);
        assert!(ParticipantRole::try_from_code("ADMIN").is_err());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&ParticipantStatus::Validation).unwrap();
        assert_eq!(json, "\"VALIDATION\"");
        let back: ParticipantStatus = serde_json::from_str("\"INVITED\"").unwrap();
        assert_eq!(back, ParticipantStatus::Invited);
    }
}
