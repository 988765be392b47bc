use serde::{Deserialize, Serialize};

/// Marker stored in a field that could not be determined
pub const SENTINEL: &str = "N/A";

/// Column headers of the CSV export, in field order
pub const CSV_HEADERS: [&str; 5] = ["Business Name", "Website", "Email", "Instagram", "Phone"];

/// The extraction result for one URL
///
/// Every field holds either an extracted string or [`SENTINEL`]. The serde
/// names double as CSV headers and as the keys of the status JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Business Name")]
    pub business_name: String,

    #[serde(rename = "Website")]
    pub website: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Instagram")]
    pub instagram: String,

    #[serde(rename = "Phone")]
    pub phone: String,
}

impl Record {
    /// Creates the record used when a page could not be fetched
    ///
    /// Only the website is known; every other field is the sentinel.
    pub fn unavailable(website: impl Into<String>) -> Self {
        Self {
            business_name: SENTINEL.to_string(),
            website: website.into(),
            email: SENTINEL.to_string(),
            instagram: SENTINEL.to_string(),
            phone: SENTINEL.to_string(),
        }
    }

    /// Returns true if the business name was found
    pub fn has_business_name(&self) -> bool {
        self.business_name != SENTINEL
    }

    /// Returns true if an email address was found
    pub fn has_email(&self) -> bool {
        self.email != SENTINEL
    }

    /// Returns true if an Instagram profile was found
    pub fn has_instagram(&self) -> bool {
        self.instagram != SENTINEL
    }

    /// Returns true if a phone number was found
    pub fn has_phone(&self) -> bool {
        self.phone != SENTINEL
    }
}
