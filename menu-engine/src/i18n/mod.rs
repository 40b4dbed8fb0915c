//! Localization service
//!
//! Message lookup with fallback chain `active language → en → raw key`,
//! localized-text resolution and writing direction.

pub mod preference;
pub mod translations;

pub use preference::{PreferenceError, PreferenceStore, resolve_initial_language};

use serde::Serialize;
use shared::{Language, LocalizedText, TextValue};

/// Writing direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn of(language: Language) -> Self {
        match language {
            Language::Ar => Direction::Rtl,
            Language::En | Language::Fr => Direction::Ltr,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// `lang` / `dir` attributes for the root document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentAttributes {
    pub lang: Language,
    pub dir: Direction,
}

/// Active-language localizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.language)
    }

    pub fn document_attributes(&self) -> DocumentAttributes {
        DocumentAttributes {
            lang: self.language,
            dir: self.direction(),
        }
    }

    /// Message for `key`; never blank, the key itself is the last resort
    pub fn t(&self, key: &str) -> String {
        translations::lookup(self.language, key)
            .or_else(|| translations::lookup(Language::DEFAULT, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!(key, language = %self.language, "Missing message key");
                key.to_string()
            })
    }

    /// Message for `key` with `{name}` placeholders replaced
    ///
    /// Only the first occurrence of each placeholder is substituted.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in params {
            text = text.replacen(&format!("{{{}}}", name), value, 1);
        }
        text
    }

    pub fn localize<'a>(&self, text: &'a LocalizedText) -> &'a str {
        text.get(self.language)
    }

    pub fn localize_value<'a>(&self, value: &'a TextValue) -> &'a str {
        value.resolve(self.language)
    }
}
