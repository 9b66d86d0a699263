//! Company Addresses
//!
//! A company has a street address, a post box address, or both.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetAddress {
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    pub area: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBoxAddress {
    pub post_box: String,
    pub zip_code: String,
    pub city: String,
    pub area: Option<String>,
    pub country: String,
}
