//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the workspace, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending ids, file paths, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a duplicate id error for the given catalog collection
    pub fn duplicate_id(code: ErrorCode, id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(code, format!("{}: {}", code.message(), id)).with_detail("id", id)
    }

    /// Create an unsupported language error
    pub fn unsupported_language(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::with_message(
            ErrorCode::UnsupportedLanguage,
            format!("Unsupported language: {}", tag),
        )
        .with_detail("language", tag)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message(ErrorCode::CatalogInvalid, err.to_string())
            .with_detail("line", err.line())
            .with_detail("column", err.column())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
