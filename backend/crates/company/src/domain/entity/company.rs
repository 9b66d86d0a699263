//! Company Entity

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    address::{PostBoxAddress, StreetAddress},
    ids::CompanyId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub version: i64,
    pub name: String,
    pub street_address: Option<StreetAddress>,
    pub post_box_address: Option<PostBoxAddress>,
    pub auditing: Auditing,
}

impl Company {
    pub fn has_address(&self) -> bool {
        self.street_address.is_some() || self.post_box_address.is_some()
    }

    /// Country of the street address, falling back to the post box
    pub fn country(&self) -> Option<&str> {
        self.street_address
            .as_ref()
            .map(|a| a.country.as_str())
            .or_else(|| self.post_box_address.as_ref().map(|a| a.country.as_str()))
    }
}
