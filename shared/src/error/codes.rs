//! Unified error codes for the menu workspace
//!
//! Error codes are organized by category:
//! - 1xxx: Catalog errors (menu document integrity)
//! - 2xxx: Localization errors
//! - 3xxx: Preference storage errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Catalog ====================
    /// Menu document could not be parsed
    CatalogInvalid = 1001,
    /// Two categories share the same id
    DuplicateCategoryId = 1002,
    /// Two allergens share the same id
    DuplicateAllergenId = 1003,
    /// Two items share the same id
    DuplicateItemId = 1004,

    // ==================== 2xxx: Localization ====================
    /// Language tag is not supported
    UnsupportedLanguage = 2001,

    // ==================== 3xxx: Preference ====================
    /// Preference file could not be read
    PreferenceReadFailed = 3001,
    /// Preference file could not be written
    PreferenceWriteFailed = 3002,
    /// Preference file content is corrupted
    PreferenceCorrupted = 3003,

    // ==================== 9xxx: System ====================
    /// File system I/O error
    IoError = 9401,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Catalog
            ErrorCode::CatalogInvalid => "Menu catalog document is invalid",
            ErrorCode::DuplicateCategoryId => "Duplicate category id in catalog",
            ErrorCode::DuplicateAllergenId => "Duplicate allergen id in catalog",
            ErrorCode::DuplicateItemId => "Duplicate item id in catalog",

            // Localization
            ErrorCode::UnsupportedLanguage => "Language is not supported",

            // Preference
            ErrorCode::PreferenceReadFailed => "Failed to read preferences",
            ErrorCode::PreferenceWriteFailed => "Failed to write preferences",
            ErrorCode::PreferenceCorrupted => "Preference file is corrupted",

            // System
            ErrorCode::IoError => "File system error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Catalog
            1001 => Ok(ErrorCode::CatalogInvalid),
            1002 => Ok(ErrorCode::DuplicateCategoryId),
            1003 => Ok(ErrorCode::DuplicateAllergenId),
            1004 => Ok(ErrorCode::DuplicateItemId),

            // Localization
            2001 => Ok(ErrorCode::UnsupportedLanguage),

            // Preference
            3001 => Ok(ErrorCode::PreferenceReadFailed),
            3002 => Ok(ErrorCode::PreferenceWriteFailed),
            3003 => Ok(ErrorCode::PreferenceCorrupted),

            // System
            9401 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
