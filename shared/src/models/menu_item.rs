//! Menu Item Model

use super::localized::LocalizedText;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Menu item entity (one orderable entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    /// Category reference (must resolve to a catalog category)
    pub category_id: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    pub price: Decimal,
    /// "Was" price, only meaningful when greater than `price`
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    /// Free-form labels ("spicy", "new", "deal", ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Allergen references; absent means no allergen data
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
    #[serde(default)]
    pub sizes: Option<Vec<MenuItemSize>>,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Allergen ids, empty when the item carries no allergen data
    pub fn allergen_ids(&self) -> &[String] {
        self.allergens.as_deref().unwrap_or_default()
    }

    /// True when any of the item's allergens is in `excluded`
    pub fn contains_any_allergen(&self, excluded: &BTreeSet<String>) -> bool {
        self.allergen_ids().iter().any(|id| excluded.contains(id))
    }

    pub fn sizes(&self) -> &[MenuItemSize] {
        self.sizes.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Image reference, `None` when absent or empty
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }

    pub fn has_discount(&self) -> bool {
        is_discount(self.price, self.original_price)
    }
}

/// Size variant of a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemSize {
    pub label: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
}

impl MenuItemSize {
    pub fn has_discount(&self) -> bool {
        is_discount(self.price, self.original_price)
    }
}

fn is_discount(price: Decimal, original_price: Option<Decimal>) -> bool {
    original_price.is_some_and(|was| was > price)
}
