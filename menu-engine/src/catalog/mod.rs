//! Catalog Store - the static menu document, loaded once per session
//!
//! Parsed with serde_json, validated, indexed by id and then shared
//! read-only (`Arc<CatalogStore>`) with the engine and the presentation layer.

mod integrity;

pub use integrity::{IntegrityReport, IntegrityWarning};

use shared::AppResult;
use shared::models::{Allergen, Category, MenuCatalog, MenuItem, Restaurant};
use std::collections::HashMap;
use std::path::Path;

/// Validated, indexed, immutable menu catalog
#[derive(Clone)]
pub struct CatalogStore {
    catalog: MenuCatalog,
    report: IntegrityReport,
    /// category id -> position in `catalog.categories`
    category_index: HashMap<String, usize>,
    allergen_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("restaurant", &self.catalog.restaurant.name)
            .field("categories_count", &self.catalog.categories.len())
            .field("allergens_count", &self.catalog.allergens.len())
            .field("items_count", &self.catalog.items.len())
            .field("warnings_count", &self.report.warnings.len())
            .finish()
    }
}

impl CatalogStore {
    /// Validate and index an already parsed catalog
    pub fn new(catalog: MenuCatalog) -> AppResult<Self> {
        let report = integrity::check(&catalog)?;
        for warning in &report.warnings {
            tracing::warn!(%warning, "Catalog integrity warning");
        }

        let category_index = index_by(&catalog.categories, |c| &c.id);
        let allergen_index = index_by(&catalog.allergens, |a| &a.id);
        let item_index = index_by(&catalog.items, |i| &i.id);

        tracing::info!(
            restaurant = %catalog.restaurant.name,
            categories = catalog.categories.len(),
            allergens = catalog.allergens.len(),
            items = catalog.items.len(),
            "📦 Menu catalog loaded"
        );

        Ok(Self {
            catalog,
            report,
            category_index,
            allergen_index,
            item_index,
        })
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let catalog: MenuCatalog = serde_json::from_str(json)?;
        Self::new(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| shared::AppError::from(e).with_detail("path", path.display().to_string()))?;
        Self::from_json(&content)
            .map_err(|e| e.with_detail("path", path.display().to_string()))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.catalog.restaurant
    }

    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    pub fn allergens(&self) -> &[Allergen] {
        &self.catalog.allergens
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.catalog.items
    }

    pub fn report(&self) -> &IntegrityReport {
        &self.report
    }

    pub fn total_items(&self) -> usize {
        self.catalog.items.len()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index
            .get(id)
            .map(|&idx| &self.catalog.categories[idx])
    }

    /// Position of a category in catalog (display) order
    pub fn category_position(&self, id: &str) -> Option<usize> {
        self.category_index.get(id).copied()
    }

    pub fn allergen(&self, id: &str) -> Option<&Allergen> {
        self.allergen_index
            .get(id)
            .map(|&idx| &self.catalog.allergens[idx])
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.item_index.get(id).map(|&idx| &self.catalog.items[idx])
    }

    /// Category ids in catalog order (section order for scroll sync)
    pub fn category_ids(&self) -> Vec<String> {
        self.catalog.categories.iter().map(|c| c.id.clone()).collect()
    }
}

fn index_by<T>(entries: &[T], id: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| (id(entry).clone(), idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    const CATALOG: &str = r#"{
        "restaurant": {"name": "Le Comptoir", "tagline": "Bistro", "address": "Oran", "phone": "041"},
        "categories": [
            {"id": "starters", "name": {"en": "Starters", "fr": "Entrées", "ar": "مقبلات"}, "icon": "salad"},
            {"id": "mains", "name": {"en": "Mains", "fr": "Plats", "ar": "أطباق"}, "icon": "platter"}
        ],
        "allergens": [
            {"id": "nuts", "name": {"en": "Tree Nuts", "fr": "Fruits à coques", "ar": "مكسرات"}, "icon": "🥜"}
        ],
        "items": [
            {"id": "a", "categoryId": "starters",
             "name": {"en": "Walnut salad", "fr": "Salade aux noix", "ar": "سلطة الجوز"},
             "description": {"en": "Greens", "fr": "Verdure", "ar": "خضار"},
             "price": 450, "allergens": ["nuts"], "available": true},
            {"id": "b", "categoryId": "desserts",
             "name": {"en": "Flan", "fr": "Flan", "ar": "فلان"},
             "description": {"en": "Caramel", "fr": "Caramel", "ar": "كراميل"},
             "price": 300, "originalPrice": 250, "allergens": ["eggs"], "available": true}
        ]
    }"#;

    #[test]
    fn test_load_indexes_and_reports() {
        let store = CatalogStore::from_json(CATALOG).unwrap();

        assert_eq!(store.total_items(), 2);
        assert_eq!(store.category_ids(), vec!["starters", "mains"]);
        assert_eq!(store.category_position("mains"), Some(1));
        assert_eq!(store.category("starters").unwrap().icon, "salad");
        assert_eq!(store.allergen("nuts").unwrap().icon, "🥜");
        assert_eq!(store.item("b").unwrap().category_id, "desserts");
        assert!(store.category("desserts").is_none());

        let report = store.report();
        assert_eq!(report.orphaned_items().collect::<Vec<_>>(), vec!["b"]);
        assert!(report.warnings.contains(&IntegrityWarning::UnknownAllergen {
            item_id: "b".into(),
            allergen_id: "eggs".into(),
        }));
        assert!(
            report
                .warnings
                .contains(&IntegrityWarning::MeaninglessOriginalPrice {
                    item_id: "b".into(),
                    size: None,
                })
        );
    }

    #[test]
    fn test_duplicate_item_id_is_rejected() {
        let json = r#"{
            "restaurant": {"name": "X"},
            "categories": [{"id": "c", "name": {"en": "C"}}],
            "items": [
                {"id": "dup", "categoryId": "c", "name": {"en": "One"}, "price": 1},
                {"id": "dup", "categoryId": "c", "name": {"en": "Two"}, "price": 2}
            ]
        }"#;
        let err = CatalogStore::from_json(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateItemId);
    }

    #[test]
    fn test_duplicate_category_id_is_rejected() {
        let json = r#"{
            "restaurant": {"name": "X"},
            "categories": [{"id": "c", "name": {"en": "C"}}, {"id": "c", "name": {"en": "D"}}],
            "items": []
        }"#;
        let err = CatalogStore::from_json(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateCategoryId);
    }

    #[test]
    fn test_missing_translations_are_warnings() {
        let json = r#"{
            "restaurant": {"name": "X"},
            "categories": [{"id": "c", "name": {"en": "Drinks", "fr": "Boissons"}}],
            "items": []
        }"#;
        let store = CatalogStore::from_json(json).unwrap();
        assert_eq!(
            store.report().warnings,
            vec![IntegrityWarning::MissingTranslation {
                entity: "category c".into(),
                field: "name",
                language: shared::Language::Ar,
            }]
        );
    }

    #[test]
    fn test_malformed_document() {
        let err = CatalogStore::from_json("{\"restaurant\": 3}").unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = CatalogStore::load("/definitely/not/here/menu.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.details.unwrap().contains_key("path"));
    }
}
