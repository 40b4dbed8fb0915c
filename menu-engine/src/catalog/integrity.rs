//! Load-time integrity checks
//!
//! Duplicate ids reject the document. Everything else is reported as a
//! warning and the catalog is still served.

use shared::models::{LocalizedText, MenuCatalog};
use shared::{AppError, AppResult, ErrorCode, Language};
use std::collections::HashSet;

/// Non-fatal data problem found while loading the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityWarning {
    /// Item can't be placed in any category section
    UnknownCategory { item_id: String, category_id: String },
    UnknownAllergen { item_id: String, allergen_id: String },
    /// `originalPrice` present but not greater than `price`
    MeaninglessOriginalPrice { item_id: String, size: Option<String> },
    MissingTranslation {
        entity: String,
        field: &'static str,
        language: Language,
    },
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory {
                item_id,
                category_id,
            } => write!(f, "item {} references unknown category {}", item_id, category_id),
            Self::UnknownAllergen {
                item_id,
                allergen_id,
            } => write!(f, "item {} references unknown allergen {}", item_id, allergen_id),
            Self::MeaninglessOriginalPrice { item_id, size } => match size {
                Some(label) => write!(
                    f,
                    "item {} size {} has an original price not above its price",
                    item_id, label
                ),
                None => write!(
                    f,
                    "item {} has an original price not above its price",
                    item_id
                ),
            },
            Self::MissingTranslation {
                entity,
                field,
                language,
            } => write!(f, "{} {} has no {} text", entity, field, language),
        }
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub warnings: Vec<IntegrityWarning>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Items that will be left out of grouped views
    pub fn orphaned_items(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().filter_map(|w| match w {
            IntegrityWarning::UnknownCategory { item_id, .. } => Some(item_id.as_str()),
            _ => None,
        })
    }
}

/// Validate the catalog, failing on duplicate ids
pub fn check(catalog: &MenuCatalog) -> AppResult<IntegrityReport> {
    let category_ids = unique_ids(
        catalog.categories.iter().map(|c| c.id.as_str()),
        ErrorCode::DuplicateCategoryId,
    )?;
    let allergen_ids = unique_ids(
        catalog.allergens.iter().map(|a| a.id.as_str()),
        ErrorCode::DuplicateAllergenId,
    )?;
    unique_ids(
        catalog.items.iter().map(|i| i.id.as_str()),
        ErrorCode::DuplicateItemId,
    )?;

    let mut report = IntegrityReport::default();

    for category in &catalog.categories {
        missing_text(&mut report, &format!("category {}", category.id), "name", &category.name);
    }
    for allergen in &catalog.allergens {
        missing_text(&mut report, &format!("allergen {}", allergen.id), "name", &allergen.name);
    }

    for item in &catalog.items {
        if !category_ids.contains(item.category_id.as_str()) {
            report.warnings.push(IntegrityWarning::UnknownCategory {
                item_id: item.id.clone(),
                category_id: item.category_id.clone(),
            });
        }

        // Allergen list is optional in the document; only check ids we can resolve against
        if !catalog.allergens.is_empty() {
            for allergen_id in item.allergen_ids() {
                if !allergen_ids.contains(allergen_id.as_str()) {
                    report.warnings.push(IntegrityWarning::UnknownAllergen {
                        item_id: item.id.clone(),
                        allergen_id: allergen_id.clone(),
                    });
                }
            }
        }

        if item.original_price.is_some() && !item.has_discount() {
            report
                .warnings
                .push(IntegrityWarning::MeaninglessOriginalPrice {
                    item_id: item.id.clone(),
                    size: None,
                });
        }
        for size in item.sizes() {
            if size.original_price.is_some() && !size.has_discount() {
                report
                    .warnings
                    .push(IntegrityWarning::MeaninglessOriginalPrice {
                        item_id: item.id.clone(),
                        size: Some(size.label.clone()),
                    });
            }
        }

        let entity = format!("item {}", item.id);
        missing_text(&mut report, &entity, "name", &item.name);
        missing_text(&mut report, &entity, "description", &item.description);
    }

    Ok(report)
}

fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    code: ErrorCode,
) -> AppResult<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::duplicate_id(code, id));
        }
    }
    Ok(seen)
}

fn missing_text(
    report: &mut IntegrityReport,
    entity: &str,
    field: &'static str,
    text: &LocalizedText,
) {
    for language in text.missing_languages() {
        report.warnings.push(IntegrityWarning::MissingTranslation {
            entity: entity.to_string(),
            field,
            language,
        });
    }
}
