use kernel::messages::MappingError;

use crate::domain::entity::company::Company;
use crate::domain::value_object::{
    address::{PostBoxAddress, StreetAddress},
    aggregate_type::AggregateType,
};
use crate::messages::company::{CompanyAggregateAvro, PostBoxAddressAvro, StreetAddressAvro};

impl CompanyAggregateAvro {
    pub fn to_company(&self) -> Result<Company, MappingError> {
        AggregateType::Company.expect(&self.aggregate_identifier)?;

        Ok(Company {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            name: self.name.clone(),
            street_address: self.street_address.as_ref().map(StreetAddressAvro::to_address),
            post_box_address: self
                .post_box_address
                .as_ref()
                .map(PostBoxAddressAvro::to_address),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}

impl StreetAddressAvro {
    pub fn to_address(&self) -> StreetAddress {
        StreetAddress {
            street: self.street.clone(),
            house_number: self.house_number.clone(),
            zip_code: self.zip_code.clone(),
            city: self.city.clone(),
            area: self.area.clone(),
            country: self.country.clone(),
        }
    }
}

impl PostBoxAddressAvro {
    pub fn to_address(&self) -> PostBoxAddress {
        PostBoxAddress {
            post_box: self.post_box.clone(),
            zip_code: self.zip_code.clone(),
            city: self.city.clone(),
            area: self.area.clone(),
            country: self.country.clone(),
        }
    }
}
