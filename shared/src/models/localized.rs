//! Localized text values

use super::language::Language;
use serde::{Deserialize, Serialize};

/// A string per supported language
///
/// Missing entries deserialize as empty strings and resolve to the
/// default language's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, fr: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
            ar: ar.into(),
        }
    }

    /// Raw entry for a language, without fallback
    pub fn raw(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }

    /// Text for `language`, falling back to [`Language::DEFAULT`] when empty
    ///
    /// Returns `""` when the default-language text is empty as well.
    pub fn get(&self, language: Language) -> &str {
        let text = self.raw(language);
        if text.is_empty() {
            self.raw(Language::DEFAULT)
        } else {
            text
        }
    }

    /// Languages whose entry is empty
    pub fn missing_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.raw(*lang).is_empty())
            .collect()
    }
}

/// Either a plain string shown as-is in every language, or a localized one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Localized(LocalizedText),
}

impl TextValue {
    pub fn resolve(&self, language: Language) -> &str {
        match self {
            TextValue::Plain(text) => text,
            TextValue::Localized(text) => text.get(language),
        }
    }
}

impl Default for TextValue {
    fn default() -> Self {
        TextValue::Plain(String::new())
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        TextValue::Plain(text.to_string())
    }
}
