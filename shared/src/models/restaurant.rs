//! Restaurant Model

use super::localized::{LocalizedText, TextValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Descriptive restaurant metadata (display only, never filtered)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub tagline: TextValue,
    #[serde(default)]
    pub description: Option<TextValue>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub address: TextValue,
    #[serde(default)]
    pub phone: String,
    /// Opening hours keyed by lower-case English weekday ("monday", ...)
    #[serde(default)]
    pub hours: HashMap<String, TextValue>,
    #[serde(default)]
    pub services: Services,
}

impl Restaurant {
    /// Hours entry for a weekday name, case-insensitive
    pub fn hours_for(&self, weekday: &str) -> Option<&TextValue> {
        self.hours.get(&weekday.to_ascii_lowercase())
    }
}

/// Offered services
///
/// Either a list of service keys translated through `service.<key>` messages,
/// or an explicit key → localized label map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Services {
    Keys(Vec<String>),
    Localized(BTreeMap<String, LocalizedText>),
}

impl Default for Services {
    fn default() -> Self {
        Services::Keys(Vec::new())
    }
}
