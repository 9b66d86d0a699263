//! Phone Numbers
//!
//! Stored as country code (`+49`) and call number (`7111234567`) separately.
//! Both parts are plain ASCII digits; formatting is left to the client.

use kernel::named_code;
use serde::{Deserialize, Serialize};

/// A user keeps at most this many phone numbers
pub const MAX_PHONE_NUMBERS: usize = 5;

const MAX_COUNTRY_CODE_DIGITS: usize = 4;
const MIN_CALL_NUMBER_DIGITS: usize = 5;
const MAX_CALL_NUMBER_DIGITS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneNumberType {
    Business,
    Home,
    Mobile,
    Fax,
    Organization,
    Pager,
    Assistant,
    Other,
}

named_code!(PhoneNumberType, "PhoneNumberType", {
    Business => "BUSINESS",
    Home => "HOME",
    Mobile => "MOBILE",
    Fax => "FAX",
    Organization => "ORGANIZATION",
    Pager => "PAGER",
    Assistant => "ASSISTANT",
    Other => "OTHER",
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub phone_number_type: PhoneNumberType,
    pub country_code: String,
    pub call_number: String,
}

impl PhoneNumber {
    pub fn new(
        phone_number_type: PhoneNumberType,
        country_code: impl Into<String>,
        call_number: impl Into<String>,
    ) -> Self {
        Self {
            phone_number_type,
            country_code: country_code.into(),
            call_number: call_number.into(),
        }
    }

    /// `+` followed by one to four digits, no leading zero
    pub fn has_valid_country_code(&self) -> bool {
        let Some(digits) = self.country_code.strip_prefix('+') else {
            return false;
        };
        !digits.is_empty()
            && digits.len() <= MAX_COUNTRY_CODE_DIGITS
            && !digits.starts_with('0')
            && digits.chars().all(|c| c.is_ascii_digit())
    }

    /// Five to 25 digits, no leading zero (the trunk prefix belongs to
    /// national formatting, not to the stored number)
    pub fn has_valid_call_number(&self) -> bool {
        (MIN_CALL_NUMBER_DIGITS..=MAX_CALL_NUMBER_DIGITS).contains(&self.call_number.len())
            && !self.call_number.starts_with('0')
            && self.call_number.chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_valid(&self) -> bool {
        self.has_valid_country_code() && self.has_valid_call_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mobile(country_code: &str, call_number: &str) -> PhoneNumber {
        PhoneNumber::new(PhoneNumberType::Mobile, country_code, call_number)
    }

    #[test]
    fn test_german_mobile() {
        assert!(mobile("+49", "7111234567").is_valid());
    }

    #[test]
    fn test_country_code_rules() {
        for bad in ["+abc", "001234", "+12345", "01234", "1234", "", "+", "+049"] {
            assert!(!mobile(bad, "7111234567").has_valid_country_code(), "{bad}");
        }
        assert!(mobile("+1", "7111234567").has_valid_country_code());
        assert!(mobile("+1234", "7111234567").has_valid_country_code());
    }

    #[test]
    fn test_call_number_rules() {
        assert!(!mobile("+49", "7111abc").has_valid_call_number());
        assert!(!mobile("+49", "").has_valid_call_number());
        assert!(!mobile("+49", "0711 123").has_valid_call_number());
        assert!(!mobile("+49", "7111").has_valid_call_number());
        assert!(!mobile("+49", "071112345671234").has_valid_call_number());
        assert!(!mobile("+49", "71112345671234567890123456").has_valid_call_number());
        assert!(!mobile("+502", "91734978\n").has_valid_call_number());

        assert!(mobile("+49", "71112").has_valid_call_number());
        assert!(mobile("+49", "7111234567123456789012345").has_valid_call_number());
        assert!(mobile("+502", "91734978").has_valid_call_number());
    }
}
