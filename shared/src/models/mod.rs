//! Data models
//!
//! Menu catalog entities, immutable once loaded.
//! The JSON document uses camelCase field names (`categoryId`, `originalPrice`).

pub mod allergen;
pub mod catalog;
pub mod category;
pub mod language;
pub mod localized;
pub mod menu_item;
pub mod restaurant;

// Re-exports
pub use allergen::*;
pub use catalog::*;
pub use category::*;
pub use language::*;
pub use localized::*;
pub use menu_item::*;
pub use restaurant::*;
