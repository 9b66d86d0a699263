//! Day Card Preconditions

use kernel::validation::{Guard, Violation, ensure};

use crate::domain::entity::day_card::DayCard;
use crate::domain::value_object::{day_card_status::DayCardStatus, ids::TaskId};
use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCardCommand {
    Update,
    /// Set to not done with a reason
    Cancel,
    Complete,
    Approve,
    Delete,
}

impl DayCardCommand {
    pub fn check(self, status: DayCardStatus) -> Result<(), Violation> {
        let allowed = match self {
            Self::Approve => status.can_approve(),
            Self::Update | Self::Cancel | Self::Complete | Self::Delete => status.is_open(),
        };
        ensure(allowed, i18n::DAY_CARD_VALIDATION_ERROR_NOT_OPEN)
    }
}

impl DayCard {
    pub fn ensure_can(
        &self,
        command: DayCardCommand,
        expected_version: i64,
    ) -> Result<(), Violation> {
        Guard::of(self)
            .version_matches(expected_version)
            .and_then(|_| command.check(self.status))
    }
}

/// Batch operations on day cards are limited to one task.
pub fn ensure_same_task<'a>(
    day_cards: impl IntoIterator<Item = &'a DayCard>,
    task: TaskId,
) -> Result<(), Violation> {
    ensure(
        day_cards.into_iter().all(|d| d.task == task),
        i18n::DAY_CARD_VALIDATION_ERROR_NOT_OF_SAME_TASK,
    )
}
