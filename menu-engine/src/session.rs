//! Menu session: one catalog, one engine, one localizer, one scroll spy
//!
//! The presentation layer talks to this type only. Language changes are
//! persisted through the optional [`PreferenceStore`].

use crate::Config;
use crate::catalog::CatalogStore;
use crate::i18n::{DocumentAttributes, Localizer, PreferenceStore, resolve_initial_language};
use crate::scroll::{ScrollRequest, ScrollSpy, SectionBound};
use crate::view::{CategoryClick, MenuEngine};
use shared::{AppResult, Language};
use std::sync::Arc;

#[derive(Debug)]
pub struct MenuSession {
    catalog: Arc<CatalogStore>,
    engine: MenuEngine,
    localizer: Localizer,
    scroll: ScrollSpy,
    preferences: Option<PreferenceStore>,
}

impl MenuSession {
    pub fn new(
        catalog: Arc<CatalogStore>,
        language: Language,
        scroll: ScrollSpy,
        preferences: Option<PreferenceStore>,
    ) -> Self {
        Self {
            engine: MenuEngine::new(catalog.clone(), language),
            catalog,
            localizer: Localizer::new(language),
            scroll,
            preferences,
        }
    }

    /// Load the catalog and the stored language from the configured paths
    pub fn bootstrap(config: &Config) -> AppResult<Self> {
        let catalog = Arc::new(CatalogStore::load(&config.catalog_path)?);
        let preferences = PreferenceStore::new(&config.preference_path);
        let language =
            resolve_initial_language(preferences.load_lenient(), config.environment_locale.as_deref());
        let scroll = ScrollSpy::new(config.scroll_spy_offset, config.nav_bar_height);

        tracing::info!(
            %language,
            catalog = %config.catalog_path.display(),
            "Menu session started"
        );
        Ok(Self::new(catalog, language, scroll, Some(preferences)))
    }

    // ==================== Accessors ====================

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    pub fn engine(&self) -> &MenuEngine {
        &self.engine
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn scroll(&self) -> &ScrollSpy {
        &self.scroll
    }

    pub fn language(&self) -> Language {
        self.localizer.language()
    }

    pub fn document_attributes(&self) -> DocumentAttributes {
        self.localizer.document_attributes()
    }

    pub fn current_active_category(&self) -> Option<&str> {
        self.engine.current_active_category(&self.scroll)
    }

    // ==================== Intents ====================

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.engine.set_search_query(text);
    }

    pub fn clear_search(&mut self) {
        self.engine.clear_search();
    }

    pub fn toggle_allergen(&mut self, allergen_id: &str) {
        self.engine.toggle_allergen(allergen_id);
    }

    pub fn clear_allergens(&mut self) {
        self.engine.clear_allergens();
    }

    pub fn category_click(&mut self, category_id: &str) -> CategoryClick {
        self.engine.handle_category_click(category_id, &mut self.scroll)
    }

    pub fn observe_scroll(&mut self, scroll_y: f64) {
        self.scroll.observe(scroll_y);
    }

    pub fn set_sections(&mut self, sections: Vec<SectionBound>) {
        self.scroll.set_sections(sections);
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll.take_request()
    }

    /// Switch language, re-derive the view and persist the choice
    ///
    /// A failed save is logged; the session keeps the new language.
    pub fn set_language(&mut self, language: Language) {
        if self.localizer.language() == language {
            return;
        }
        self.localizer.set_language(language);
        self.engine.set_language(language);

        if let Some(store) = &self.preferences
            && let Err(e) = store.save(language)
        {
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "Failed to persist language preference"
            );
        }
    }
}
