//! Unified error system for the menu workspace
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 1xxx: Catalog errors
//! - 2xxx: Localization errors
//! - 3xxx: Preference errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::unsupported_language("de");
//! assert_eq!(err.code.code(), 2001);
//!
//! let err = AppError::duplicate_id(ErrorCode::DuplicateItemId, "pizza-4")
//!     .with_detail("index", 7);
//! assert!(err.details.is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
