//! User Preconditions
//!
//! Checks an administrator's change against the current state of a user.

use kernel::validation::{Violation, ensure};

use crate::domain::entity::user::User;
use crate::domain::value_object::{ids::UserId, phone_number::MAX_PHONE_NUMBERS};
use crate::i18n::{
    USER_VALIDATION_ERROR_INVALID_PHONE_NUMBER,
    USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED,
    USER_VALIDATION_ERROR_TOO_MANY_PHONE_NUMBERS,
    USER_VALIDATION_ERROR_USER_NOT_LOCKING_THEMSELVES,
    USER_VALIDATION_ERROR_USER_NOT_REMOVING_OWN_ADMIN_PERMISSION,
};

impl User {
    pub fn ensure_not_system_user(&self, system_user: UserId) -> Result<(), Violation> {
        ensure(
            self.id != system_user,
            USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED,
        )
    }

    /// `current_user` may lock anyone but themselves.
    pub fn ensure_lockable_by(&self, current_user: UserId, locked: bool) -> Result<(), Violation> {
        ensure(
            !(locked && self.id == current_user),
            USER_VALIDATION_ERROR_USER_NOT_LOCKING_THEMSELVES,
        )
    }

    /// An admin cannot revoke their own admin permission.
    pub fn ensure_admin_changeable_by(
        &self,
        current_user: UserId,
        admin: bool,
    ) -> Result<(), Violation> {
        ensure(
            admin || self.id != current_user,
            USER_VALIDATION_ERROR_USER_NOT_REMOVING_OWN_ADMIN_PERMISSION,
        )
    }

    pub fn ensure_valid_phone_numbers(&self) -> Result<(), Violation> {
        ensure(
            self.phone_numbers.len() <= MAX_PHONE_NUMBERS,
            USER_VALIDATION_ERROR_TOO_MANY_PHONE_NUMBERS,
        )?;
        match self.phone_numbers.iter().find(|p| !p.is_valid()) {
            Some(invalid) => Err(
                Violation::precondition(USER_VALIDATION_ERROR_INVALID_PHONE_NUMBER).with_params([
                    invalid.country_code.clone(),
                    invalid.call_number.clone(),
                ]),
            ),
            None => Ok(()),
        }
    }
}
