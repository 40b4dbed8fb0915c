//! Language Model

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Supported menu language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    /// Fallback language for every lookup
    pub const DEFAULT: Language = Language::En;

    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Parse an exact language tag ("en", "fr", "ar")
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Match the primary subtag of an environment locale.
    ///
    /// `fr-FR`, `fr_CA.UTF-8` and `FR` all resolve to [`Language::Fr`].
    pub fn from_locale_prefix(locale: &str) -> Option<Self> {
        let primary = locale
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::parse(&primary)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::unsupported_language(s))
    }
}
