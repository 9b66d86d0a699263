use kernel::messages::MappingError;

use crate::domain::entity::user::User;
use crate::domain::value_object::{aggregate_type::AggregateType, phone_number::PhoneNumber};
use crate::messages::user::{PhoneNumberAvro, UserAggregateAvro};

impl UserAggregateAvro {
    pub fn to_user(&self) -> Result<User, MappingError> {
        AggregateType::User.expect(&self.aggregate_identifier)?;

        Ok(User {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            external_id: self.user_id.clone(),
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.to_lowercase()),
            gender: self.gender.map(Into::into),
            position: self.position.clone(),
            crafts: self
                .crafts
                .iter()
                .map(|craft| craft.to_id())
                .collect::<Result<_, _>>()?,
            phone_numbers: self
                .phone_numbers
                .iter()
                .map(PhoneNumberAvro::to_phone_number)
                .collect(),
            admin: self.admin,
            registered: self.registered,
            locked: self.locked,
            deleted: false,
            locale: self.locale.clone(),
            country: self.country.clone(),
            auditing: Some(self.auditing_information.to_auditing()?),
        })
    }
}

impl PhoneNumberAvro {
    pub fn to_phone_number(&self) -> PhoneNumber {
        PhoneNumber::new(
            self.phone_number_type.into(),
            self.country_code.clone(),
            self.call_number.clone(),
        )
    }
}
