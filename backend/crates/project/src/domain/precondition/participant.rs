//! Participant Preconditions

use kernel::validation::{Guard, Violation};

use crate::domain::entity::participant::Participant;
use crate::domain::value_object::ids::UserId;
use crate::i18n;

impl Participant {
    /// A participant can be removed unless it is a construction site manager
    /// or the caller's own membership.
    pub fn ensure_removable_by(&self, current_user: UserId) -> Result<(), Violation> {
        Guard::of(self)
            .precondition(
                |p| !p.role.is_csm(),
                i18n::PARTICIPANT_VALIDATION_ERROR_PARTICIPANT_CSM_NOT_REMOVABLE,
            )?
            .precondition(
                |p| p.user != Some(current_user),
                i18n::PARTICIPANT_VALIDATION_ERROR_OWN_PARTICIPANT_NOT_REMOVABLE,
            )
            .map(|_| ())
    }
}
