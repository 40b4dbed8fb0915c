//! Category Model

use super::localized::LocalizedText;
use serde::{Deserialize, Serialize};

/// Category entity
///
/// Catalog order of categories is the display and navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
    /// Symbolic icon key ("burger", "pizza", ...) resolved by the presentation layer
    #[serde(default)]
    pub icon: String,
}
