use serde::{Deserialize, Serialize};

/// Postal address of the construction site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAddress {
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
}
