//! User Entity

use std::collections::BTreeSet;

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    gender::Gender,
    ids::{CraftId, UserId},
    phone_number::PhoneNumber,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub version: i64,
    /// Identifier at the identity provider
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Always lower case
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub position: Option<String>,
    pub crafts: BTreeSet<CraftId>,
    pub phone_numbers: Vec<PhoneNumber>,
    pub admin: bool,
    pub registered: bool,
    pub locked: bool,
    pub deleted: bool,
    /// BCP 47 tag as sent by the user service (`de_DE`)
    pub locale: Option<String>,
    /// ISO 3166 alpha-2
    pub country: Option<String>,
    /// Cleared when the user is anonymized
    pub auditing: Option<Auditing>,
}

impl User {
    /// "First Last", or whichever part is known
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_owned()),
            (None, None) => None,
        }
    }

    /// Strip everything personal and mark the user deleted. The identifier
    /// stays so existing references still resolve.
    pub fn anonymize(&mut self, version: i64) {
        self.version = version;
        self.external_id = None;
        self.first_name = None;
        self.last_name = None;
        self.email = None;
        self.gender = None;
        self.position = None;
        self.crafts.clear();
        self.phone_numbers.clear();
        self.admin = false;
        self.registered = false;
        self.locked = false;
        self.deleted = true;
        self.locale = None;
        self.country = None;
        self.auditing = None;
    }

    /// Placeholder for a user known only from a deletion
    pub fn deleted(id: UserId, version: i64) -> Self {
        let mut user = Self {
            id,
            version,
            external_id: None,
            first_name: None,
            last_name: None,
            email: None,
            gender: None,
            position: None,
            crafts: BTreeSet::new(),
            phone_numbers: Vec::new(),
            admin: false,
            registered: false,
            locked: false,
            deleted: false,
            locale: None,
            country: None,
            auditing: None,
        };
        user.anonymize(version);
        user
    }
}
