//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 1xxx: Catalog errors
/// - 2xxx: Localization errors
/// - 3xxx: Preference errors
/// - 9xxx: System errors (also the fallback for unassigned ranges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Catalog errors (1xxx)
    Catalog,
    /// Localization errors (2xxx)
    Localization,
    /// Preference errors (3xxx)
    Preference,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Catalog,
            2000..3000 => Self::Localization,
            3000..4000 => Self::Preference,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Localization => "localization",
            Self::Preference => "preference",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
