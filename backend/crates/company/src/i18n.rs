//! Message keys of the company context

use kernel::i18n::MessageKey;

pub const COMPANY_VALIDATION_ERROR_NOT_FOUND: MessageKey =
    MessageKey::new("COMPANY_VALIDATION_ERROR_NOT_FOUND");
pub const COMPANY_VALIDATION_ERROR_MISSING_ADDRESS: MessageKey =
    MessageKey::new("COMPANY_VALIDATION_ERROR_MISSING_ADDRESS");
pub const COMPANY_VALIDATION_ERROR_EXIST_COMPANY_EMPLOYEE: MessageKey =
    MessageKey::new("COMPANY_VALIDATION_ERROR_EXIST_COMPANY_EMPLOYEE");
pub const EMPLOYEE_VALIDATION_ERROR_NOT_FOUND: MessageKey =
    MessageKey::new("EMPLOYEE_VALIDATION_ERROR_NOT_FOUND");
