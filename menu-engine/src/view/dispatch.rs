//! Active-category reconciliation and category-nav click dispatch
//!
//! "Active category" means two different things:
//! - searching: the manual category filter held in the facets
//! - browsing: the section the scroll spy reports in view
//!
//! A nav click follows the same split: it filters (toggling) while
//! searching and scrolls while browsing.

use super::engine::MenuEngine;
use crate::scroll::ScrollSync;

/// What a category-nav click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryClick {
    /// Search mode: the category filter is now this value
    Filtered(Option<String>),
    /// Browse mode: a scroll to this section was requested, facets untouched
    Scrolled(String),
}

impl MenuEngine {
    /// Category to highlight in the navigation
    pub fn current_active_category<'a, S: ScrollSync>(&'a self, scroll: &'a S) -> Option<&'a str> {
        if self.is_searching() {
            self.facets().active_category()
        } else {
            scroll.active_section()
        }
    }

    pub fn handle_category_click<S: ScrollSync>(
        &mut self,
        category_id: &str,
        scroll: &mut S,
    ) -> CategoryClick {
        if self.is_searching() {
            let next = if self.facets().active_category() == Some(category_id) {
                None
            } else {
                Some(category_id)
            };
            self.set_active_category(next);
            CategoryClick::Filtered(next.map(str::to_string))
        } else {
            scroll.scroll_to_section(category_id);
            CategoryClick::Scrolled(category_id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use shared::Language;
    use std::sync::Arc;

    /// Records calls instead of scrolling
    #[derive(Default)]
    struct FakeScroll {
        in_view: Option<String>,
        requests: Vec<String>,
    }

    impl ScrollSync for FakeScroll {
        fn active_section(&self) -> Option<&str> {
            self.in_view.as_deref()
        }

        fn scroll_to_section(&mut self, category_id: &str) {
            self.requests.push(category_id.to_string());
        }
    }

    fn engine() -> MenuEngine {
        let json = r#"{
            "restaurant": {"name": "Test"},
            "categories": [
                {"id": "pizza", "name": {"en": "Pizza", "fr": "Pizza", "ar": "بيتزا"}},
                {"id": "pasta", "name": {"en": "Pasta", "fr": "Pâtes", "ar": "معكرونة"}}
            ],
            "items": [
                {"id": "margherita", "categoryId": "pizza",
                 "name": {"en": "Margherita", "fr": "Margherita", "ar": "مارغريتا"},
                 "description": {"en": "Tomato, mozzarella", "fr": "Tomate, mozzarella", "ar": "طماطم"},
                 "price": 700},
                {"id": "arrabbiata", "categoryId": "pasta",
                 "name": {"en": "Arrabbiata", "fr": "Arrabbiata", "ar": "أرابياتا"},
                 "description": {"en": "Spicy tomato", "fr": "Tomate épicée", "ar": "طماطم حارة"},
                 "price": 650}
            ]
        }"#;
        MenuEngine::new(Arc::new(CatalogStore::from_json(json).unwrap()), Language::En)
    }

    #[test]
    fn test_browse_mode_follows_scroll() {
        let mut engine = engine();
        engine.set_active_category(Some("pasta"));
        engine.clear_search();
        let scroll = FakeScroll {
            in_view: Some("pizza".into()),
            ..Default::default()
        };
        assert_eq!(engine.current_active_category(&scroll), Some("pizza"));
    }

    #[test]
    fn test_search_mode_follows_filter() {
        let mut engine = engine();
        engine.set_search_query("tomato");
        let scroll = FakeScroll {
            in_view: Some("pizza".into()),
            ..Default::default()
        };
        assert_eq!(engine.current_active_category(&scroll), None);

        engine.set_active_category(Some("pasta"));
        assert_eq!(engine.current_active_category(&scroll), Some("pasta"));
    }

    #[test]
    fn test_click_while_browsing_scrolls_without_touching_facets() {
        let mut engine = engine();
        let mut scroll = FakeScroll::default();

        let outcome = engine.handle_category_click("pasta", &mut scroll);
        assert_eq!(outcome, CategoryClick::Scrolled("pasta".into()));
        assert_eq!(scroll.requests, vec!["pasta"]);
        assert_eq!(engine.facets().active_category(), None);
        assert_eq!(engine.filtered_count(), 2);
    }

    #[test]
    fn test_click_while_searching_toggles_filter() {
        let mut engine = engine();
        let mut scroll = FakeScroll::default();
        engine.set_search_query("tomato");

        let outcome = engine.handle_category_click("pasta", &mut scroll);
        assert_eq!(outcome, CategoryClick::Filtered(Some("pasta".into())));
        assert_eq!(engine.visible_items().len(), 1);

        let outcome = engine.handle_category_click("pasta", &mut scroll);
        assert_eq!(outcome, CategoryClick::Filtered(None));
        assert_eq!(engine.facets().active_category(), None);
        assert_eq!(engine.visible_items().len(), 2);
        assert!(scroll.requests.is_empty());
    }

    #[test]
    fn test_click_other_category_while_searching_switches_filter() {
        let mut engine = engine();
        let mut scroll = FakeScroll::default();
        engine.set_search_query("tomato");

        engine.handle_category_click("pasta", &mut scroll);
        let outcome = engine.handle_category_click("pizza", &mut scroll);
        assert_eq!(outcome, CategoryClick::Filtered(Some("pizza".into())));
        assert_eq!(engine.visible_items()[0].id, "margherita");
    }
}
