//! Allergen Model

use super::localized::LocalizedText;
use serde::{Deserialize, Serialize};

/// Allergen entity, the facet of the exclusion filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergen {
    pub id: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub icon: String,
}
