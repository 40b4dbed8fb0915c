//! Filter/View Engine
//!
//! - [`FacetState`]: search text, category filter, allergen exclusion set
//! - [`MenuEngine`]: owns the facets and derives visible items and category groups
//! - [`CategoryClick`]: outcome of the category-nav dispatch rule

mod dispatch;
mod engine;
mod facets;

pub use dispatch::CategoryClick;
pub use engine::{CategoryGroup, GroupView, MenuEngine, MenuSnapshot, derive};
pub use facets::FacetState;
