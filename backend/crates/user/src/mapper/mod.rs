//! Record → Entity Mappers

use kernel::code::by_name;

use crate::domain::value_object::{gender::Gender, phone_number::PhoneNumberType};
use crate::messages::user::{GenderEnumAvro, PhoneNumberTypeEnumAvro};

pub mod user;

impl From<GenderEnumAvro> for Gender {
    fn from(value: GenderEnumAvro) -> Self {
        by_name(value)
    }
}

impl From<PhoneNumberTypeEnumAvro> for PhoneNumberType {
    fn from(value: PhoneNumberTypeEnumAvro) -> Self {
        by_name(value)
    }
}
