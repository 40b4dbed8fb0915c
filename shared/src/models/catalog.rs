//! Menu catalog document

use super::{Allergen, Category, MenuItem, Restaurant};
use serde::{Deserialize, Serialize};

/// The static menu document: `{ restaurant, categories[], allergens[]?, items[] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub restaurant: Restaurant,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
