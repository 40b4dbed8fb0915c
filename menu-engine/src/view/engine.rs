//! Filter/View Engine
//!
//! Facet mutations recompute a [`MenuSnapshot`] synchronously, so readers
//! never observe a half-updated view.

use super::facets::FacetState;
use crate::catalog::CatalogStore;
use shared::Language;
use shared::models::{Category, MenuItem};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Catalog-ordered items of one category section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category_id: String,
    /// Indices into the catalog item list
    pub items: Vec<usize>,
}

/// Derived view for the current facets and language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSnapshot {
    /// Indices into the catalog item list, catalog order
    pub visible: Vec<usize>,
    /// `None` while searching: results are a flat list
    pub grouped: Option<Vec<CategoryGroup>>,
    pub is_searching: bool,
    pub is_filtering: bool,
}

/// Resolved category section
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a MenuItem>,
}

/// Owns the facet state of one session and derives visible items from it
#[derive(Debug, Clone)]
pub struct MenuEngine {
    catalog: Arc<CatalogStore>,
    facets: FacetState,
    language: Language,
    snapshot: MenuSnapshot,
}

impl MenuEngine {
    pub fn new(catalog: Arc<CatalogStore>, language: Language) -> Self {
        let mut engine = Self {
            catalog,
            facets: FacetState::default(),
            language,
            snapshot: MenuSnapshot::default(),
        };
        engine.recompute();
        engine
    }

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    pub fn facets(&self) -> &FacetState {
        &self.facets
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn snapshot(&self) -> &MenuSnapshot {
        &self.snapshot
    }

    // =========================================================================
    // Facet operations
    // =========================================================================

    /// Replace the search text verbatim
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.facets.set_search_query(text);
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.set_search_query("");
    }

    /// Set or clear the category filter
    ///
    /// Setting the already active id keeps it active; toggling is up to the caller.
    pub fn set_active_category(&mut self, category_id: Option<&str>) {
        self.facets
            .set_active_category(category_id.map(str::to_string));
        self.recompute();
    }

    pub fn clear_category(&mut self) {
        self.set_active_category(None);
    }

    pub fn toggle_allergen(&mut self, allergen_id: &str) {
        let selected = self.facets.toggle_allergen(allergen_id);
        tracing::debug!(allergen_id, selected, "Allergen exclusion toggled");
        self.recompute();
    }

    pub fn clear_allergens(&mut self) {
        self.facets.clear_allergens();
        self.recompute();
    }

    /// Search matches against the active language, so a language switch recomputes too
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.recompute();
        }
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    pub fn visible_items(&self) -> Vec<&MenuItem> {
        let items = self.catalog.items();
        self.snapshot.visible.iter().map(|&idx| &items[idx]).collect()
    }

    pub fn grouped_items(&self) -> Option<Vec<GroupView<'_>>> {
        let items = self.catalog.items();
        let groups = self.snapshot.grouped.as_ref()?;
        Some(
            groups
                .iter()
                .filter_map(|group| {
                    let category = self.catalog.category(&group.category_id)?;
                    Some(GroupView {
                        category,
                        items: group.items.iter().map(|&idx| &items[idx]).collect(),
                    })
                })
                .collect(),
        )
    }

    /// Items of one section; `None` while searching or when the section is empty
    pub fn group(&self, category_id: &str) -> Option<Vec<&MenuItem>> {
        let items = self.catalog.items();
        self.snapshot
            .grouped
            .as_ref()?
            .iter()
            .find(|g| g.category_id == category_id)
            .map(|g| g.items.iter().map(|&idx| &items[idx]).collect())
    }

    pub fn is_searching(&self) -> bool {
        self.snapshot.is_searching
    }

    pub fn is_filtering(&self) -> bool {
        self.snapshot.is_filtering
    }

    pub fn filtered_count(&self) -> usize {
        self.snapshot.visible.len()
    }

    pub fn total_items(&self) -> usize {
        self.catalog.total_items()
    }

    /// Result count for the search bar, only shown while searching
    pub fn result_count(&self) -> Option<usize> {
        self.is_searching().then(|| self.filtered_count())
    }

    /// "No results" state; its action is [`clear_search`](Self::clear_search)
    pub fn is_empty(&self) -> bool {
        self.snapshot.visible.is_empty()
    }

    // =========================================================================
    // Recomputation
    // =========================================================================

    fn recompute(&mut self) {
        self.snapshot = derive(&self.catalog, &self.facets, self.language);
        tracing::debug!(
            visible = self.snapshot.visible.len(),
            searching = self.snapshot.is_searching,
            filtering = self.snapshot.is_filtering,
            "Menu view recomputed"
        );
    }
}

/// Pure derivation: catalog + facets + language -> snapshot
pub fn derive(catalog: &CatalogStore, facets: &FacetState, language: Language) -> MenuSnapshot {
    let excluded = facets.selected_allergens();
    let category = facets.active_category();
    // Trim and lower-case commute, either order gives the same query
    let query = facets.trimmed_query().to_lowercase();

    let visible: Vec<usize> = catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.available)
        .filter(|(_, item)| passes_allergens(item, excluded))
        .filter(|(_, item)| category.is_none_or(|id| item.category_id == id))
        .filter(|(_, item)| query.is_empty() || matches_query(item, &query, language))
        .map(|(idx, _)| idx)
        .collect();

    let is_searching = !query.is_empty();
    let grouped = (!is_searching).then(|| group_by_category(catalog, &visible));

    MenuSnapshot {
        visible,
        grouped,
        is_searching,
        is_filtering: facets.is_filtering(),
    }
}

fn passes_allergens(item: &MenuItem, excluded: &BTreeSet<String>) -> bool {
    excluded.is_empty() || !item.contains_any_allergen(excluded)
}

/// `query` must already be trimmed and lower-cased
fn matches_query(item: &MenuItem, query: &str, language: Language) -> bool {
    item.name.get(language).to_lowercase().contains(query)
        || item.description.get(language).to_lowercase().contains(query)
}

/// Groups in catalog category order; items without a resolvable category are skipped
fn group_by_category(catalog: &CatalogStore, visible: &[usize]) -> Vec<CategoryGroup> {
    let items = catalog.items();
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); catalog.categories().len()];

    for &idx in visible {
        if let Some(pos) = catalog.category_position(&items[idx].category_id) {
            buckets[pos].push(idx);
        }
    }

    catalog
        .categories()
        .iter()
        .zip(buckets)
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(category, bucket)| CategoryGroup {
            category_id: category.id.clone(),
            items: bucket,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "restaurant": {"name": "Test"},
        "categories": [
            {"id": "burgers", "name": {"en": "Burgers", "fr": "Burgers", "ar": "برغر"}, "icon": "burger"},
            {"id": "drinks", "name": {"en": "Drinks", "fr": "Boissons", "ar": "مشروبات"}, "icon": "drink"}
        ],
        "items": [
            {"id": "cola", "categoryId": "drinks",
             "name": {"en": "Cola", "fr": "Cola", "ar": "كولا"},
             "description": {"en": "Chilled can", "fr": "Canette fraîche", "ar": "علبة باردة"},
             "price": 150},
            {"id": "cheese", "categoryId": "burgers",
             "name": {"en": "Cheeseburger", "fr": "Cheeseburger", "ar": "تشيز برغر"},
             "description": {"en": "Beef, cheddar", "fr": "Bœuf, cheddar", "ar": "لحم، شيدر"},
             "price": 650, "allergens": ["dairy", "gluten"]},
            {"id": "veggie", "categoryId": "burgers",
             "name": {"en": "Veggie Burger", "fr": "Burger Végétarien", "ar": "برغر نباتي"},
             "description": {"en": "Chickpea patty", "fr": "Galette de pois chiches", "ar": "فلافل"},
             "price": 600, "allergens": ["gluten"]},
            {"id": "ghost", "categoryId": "secret",
             "name": {"en": "Ghost Pepper Wings", "fr": "Ailes fantômes", "ar": "أجنحة حارة"},
             "description": {"en": "Very hot", "fr": "Très épicé", "ar": "حار جدا"},
             "price": 900},
            {"id": "soup", "categoryId": "burgers",
             "name": {"en": "Burger Soup", "fr": "Soupe burger", "ar": "شوربة"},
             "description": {"en": "Sold out", "fr": "Épuisé", "ar": "نفد"},
             "price": 400, "available": false}
        ]
    }"#;

    fn engine() -> MenuEngine {
        let store = CatalogStore::from_json(CATALOG).unwrap();
        MenuEngine::new(Arc::new(store), Language::En)
    }

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_initial_view_hides_unavailable() {
        let engine = engine();
        assert_eq!(ids(engine.visible_items()), vec!["cola", "cheese", "veggie", "ghost"]);
        assert_eq!(engine.total_items(), 5);
        assert_eq!(engine.filtered_count(), 4);
        assert_eq!(engine.result_count(), None);
    }

    #[test]
    fn test_groups_follow_category_order_and_skip_orphans() {
        let engine = engine();
        let groups = engine.grouped_items().unwrap();
        let layout: Vec<(&str, Vec<&str>)> = groups
            .into_iter()
            .map(|g| (g.category.id.as_str(), ids(g.items)))
            .collect();
        assert_eq!(
            layout,
            vec![("burgers", vec!["cheese", "veggie"]), ("drinks", vec!["cola"])]
        );
        assert!(engine.group("secret").is_none());
    }

    #[test]
    fn test_orphan_item_is_still_searchable() {
        let mut engine = engine();
        engine.set_search_query("ghost");
        assert_eq!(ids(engine.visible_items()), vec!["ghost"]);
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let mut engine = engine();
        engine.set_active_category(Some("drinks"));
        let groups = engine.grouped_items().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category.id, "drinks");
        assert!(engine.group("burgers").is_none());
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let mut engine = engine();
        engine.set_search_query("  BURGER ");
        assert!(engine.is_searching());
        assert_eq!(engine.facets().search_query(), "  BURGER ");
        assert_eq!(ids(engine.visible_items()), vec!["cheese", "veggie"]);
        assert!(engine.grouped_items().is_none());
        assert_eq!(engine.result_count(), Some(2));
    }

    #[test]
    fn test_search_matches_description() {
        let mut engine = engine();
        engine.set_search_query("cheddar");
        assert_eq!(ids(engine.visible_items()), vec!["cheese"]);
    }

    #[test]
    fn test_search_uses_active_language_only() {
        let mut engine = engine();
        engine.set_search_query("boissons");
        assert!(engine.is_empty());

        engine.set_search_query("fraîche");
        assert!(engine.is_empty());
        engine.set_language(Language::Fr);
        assert_eq!(ids(engine.visible_items()), vec!["cola"]);
    }

    #[test]
    fn test_whitespace_query_is_not_searching() {
        let mut engine = engine();
        engine.set_search_query("   ");
        assert!(!engine.is_searching());
        assert!(engine.grouped_items().is_some());
        assert_eq!(engine.filtered_count(), 4);
    }

    #[test]
    fn test_allergen_exclusion() {
        let mut engine = engine();
        engine.toggle_allergen("dairy");
        assert!(engine.is_filtering());
        assert_eq!(ids(engine.visible_items()), vec!["cola", "veggie", "ghost"]);

        engine.toggle_allergen("gluten");
        assert_eq!(ids(engine.visible_items()), vec!["cola", "ghost"]);

        engine.clear_allergens();
        assert!(!engine.is_filtering());
        assert_eq!(engine.filtered_count(), 4);
    }

    #[test]
    fn test_unknown_ids_match_nothing() {
        let mut engine = engine();
        engine.toggle_allergen("plutonium");
        assert_eq!(engine.filtered_count(), 4);

        engine.set_active_category(Some("nope"));
        assert!(engine.is_empty());
        assert_eq!(engine.grouped_items().unwrap().len(), 0);

        engine.clear_category();
        assert_eq!(engine.filtered_count(), 4);
    }

    #[test]
    fn test_same_category_twice_is_not_a_toggle() {
        let mut engine = engine();
        engine.set_active_category(Some("burgers"));
        engine.set_active_category(Some("burgers"));
        assert_eq!(engine.facets().active_category(), Some("burgers"));
    }

    #[test]
    fn test_facets_combine() {
        let mut engine = engine();
        engine.set_active_category(Some("burgers"));
        engine.toggle_allergen("dairy");
        engine.set_search_query("burger");
        assert_eq!(ids(engine.visible_items()), vec!["veggie"]);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let engine = engine();
        let again = derive(engine.catalog(), engine.facets(), engine.language());
        assert_eq!(&again, engine.snapshot());
    }
}
