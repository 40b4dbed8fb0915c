//! Facet state: search text, category filter, allergen exclusion set

use std::collections::BTreeSet;

/// User-controlled facets, owned by [`super::MenuEngine`]
///
/// Mutations go through the engine so derived views are recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetState {
    search_query: String,
    active_category: Option<String>,
    selected_allergens: BTreeSet<String>,
}

impl FacetState {
    /// Raw search text as typed, untrimmed
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Trimmed search text used for matching
    pub fn trimmed_query(&self) -> &str {
        self.search_query.trim()
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn selected_allergens(&self) -> &BTreeSet<String> {
        &self.selected_allergens
    }

    pub fn is_allergen_selected(&self, id: &str) -> bool {
        self.selected_allergens.contains(id)
    }

    pub fn is_searching(&self) -> bool {
        !self.trimmed_query().is_empty()
    }

    pub fn is_filtering(&self) -> bool {
        !self.selected_allergens.is_empty()
    }

    // ==================== Mutations (engine only) ====================

    pub(super) fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub(super) fn set_active_category(&mut self, category_id: Option<String>) {
        self.active_category = category_id;
    }

    /// Returns true when the id is now selected
    pub(super) fn toggle_allergen(&mut self, allergen_id: &str) -> bool {
        if self.selected_allergens.remove(allergen_id) {
            false
        } else {
            self.selected_allergens.insert(allergen_id.to_string());
            true
        }
    }

    pub(super) fn clear_allergens(&mut self) {
        self.selected_allergens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_flags_use_trimmed_text() {
        let mut facets = FacetState::default();
        facets.set_search_query("   ");
        assert_eq!(facets.search_query(), "   ");
        assert!(!facets.is_searching());

        facets.set_search_query("  Tacos ");
        assert_eq!(facets.trimmed_query(), "Tacos");
        assert!(facets.is_searching());
    }

    #[test]
    fn test_toggle_allergen_twice_restores_set() {
        let mut facets = FacetState::default();
        facets.toggle_allergen("gluten");
        let before = facets.selected_allergens().clone();

        assert!(facets.toggle_allergen("nuts"));
        assert!(facets.is_allergen_selected("nuts"));
        assert!(!facets.toggle_allergen("nuts"));
        assert_eq!(facets.selected_allergens(), &before);
        assert!(facets.is_filtering());

        facets.clear_allergens();
        assert!(!facets.is_filtering());
    }
}
