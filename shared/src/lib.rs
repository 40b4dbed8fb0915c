//! Shared types for the digital menu
//!
//! Catalog data model and the unified error system used by the engine
//! and by presentation frontends.

pub mod error;
pub mod models;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Language, LocalizedText, MenuCatalog, MenuItem, TextValue};
