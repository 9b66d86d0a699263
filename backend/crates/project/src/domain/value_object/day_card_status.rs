//! Day Card Status and Reason
//!
//! Both are stored by name.

use kernel::named_code;

/// State of a day card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCardStatus {
    #[default]
    Open,
    /// Cancelled, see [`DayCardReason`]
    NotDone,
    Done,
    Approved,
}

named_code!(DayCardStatus, "DayCardStatus", {
    Open => "OPEN",
    NotDone => "NOTDONE",
    Done => "DONE",
    Approved => "APPROVED",
});

impl DayCardStatus {
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Approval is allowed straight from open or after completion
    #[inline]
    pub const fn can_approve(&self) -> bool {
        matches!(self, Self::Open | Self::Done)
    }
}

/// Why a day card was not done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCardReason {
    DelayedMaterial,
    NoConcession,
    ConcessionNotRecognized,
    ChangedPriority,
    ManpowerShortage,
    Overestimation,
    Touchup,
    MissingInfos,
    MissingTools,
    BadWeather,
    /// Project specific reasons, renamed per project
    Custom1,
    Custom2,
    Custom3,
    Custom4,
}

named_code!(DayCardReason, "DayCardReason", {
    DelayedMaterial => "DELAYED_MATERIAL",
    NoConcession => "NO_CONCESSION",
    ConcessionNotRecognized => "CONCESSION_NOT_RECOGNIZED",
    ChangedPriority => "CHANGED_PRIORITY",
    ManpowerShortage => "MANPOWER_SHORTAGE",
    Overestimation => "OVERESTIMATION",
    Touchup => "TOUCHUP",
    MissingInfos => "MISSING_INFOS",
    MissingTools => "MISSING_TOOLS",
    BadWeather => "BAD_WEATHER",
    Custom1 => "CUSTOM1",
    Custom2 => "CUSTOM2",
    Custom3 => "CUSTOM3",
    Custom4 => "CUSTOM4",
});

impl DayCardReason {
    #[inline]
    pub const fn is_custom(&self) -> bool {
        matches!(
            self,
            Self::Custom1 | Self::Custom2 | Self::Custom3 | Self::Custom4
        )
    }
}
