//! Message keys of the user context

use kernel::i18n::MessageKey;

macro_rules! keys {
    ($($key:ident),+ $(,)?) => {
        $(pub const $key: MessageKey = MessageKey::new(stringify!($key));)+
    };
}

keys! {
    USER_VALIDATION_ERROR_NOT_FOUND,
    USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED,
    USER_VALIDATION_ERROR_USER_NOT_LOCKING_THEMSELVES,
    USER_VALIDATION_ERROR_USER_NOT_REMOVING_OWN_ADMIN_PERMISSION,
    USER_VALIDATION_ERROR_INVALID_PHONE_NUMBER,
    USER_VALIDATION_ERROR_TOO_MANY_PHONE_NUMBERS,
}
