//! Display helpers for the presentation layer
//!
//! Prices, tag badges, today's hours and service labels. No filtering
//! decisions are made here.

use crate::i18n::Localizer;
use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;
use shared::models::{MenuItem, MenuItemSize, Restaurant, Services};

/// Narrow no-break space, the French thousands separator
const GROUP_SEPARATOR: char = '\u{202F}';

// =============================================================================
// Prices
// =============================================================================

/// Format a price French-style: `1250.5` -> `1 250,5`
///
/// At most three fraction digits, trailing zeros dropped.
pub fn format_price(price: Decimal) -> String {
    let text = price.round_dp(3).normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{},{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price with the localized currency, e.g. `850 DA` / `850 د.ج`
pub fn price_label(localizer: &Localizer, price: Decimal) -> String {
    localizer.t_with("currency.format", &[("price", &format_price(price))])
}

/// Current price plus the "was" price when it is a real discount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub current: String,
    pub original: Option<String>,
}

impl PriceDisplay {
    pub fn for_item(localizer: &Localizer, item: &MenuItem) -> Self {
        Self::build(localizer, item.price, item.original_price.filter(|_| item.has_discount()))
    }

    pub fn for_size(localizer: &Localizer, size: &MenuItemSize) -> Self {
        Self::build(localizer, size.price, size.original_price.filter(|_| size.has_discount()))
    }

    fn build(localizer: &Localizer, price: Decimal, original: Option<Decimal>) -> Self {
        Self {
            current: price_label(localizer, price),
            original: original.map(|was| price_label(localizer, was)),
        }
    }
}

// =============================================================================
// Tag badges
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Deal,
    New,
    /// popular / bestseller / premium
    Highlight,
    Spicy,
    Vegetarian,
    /// Any tag without a dedicated style
    Default,
}

impl BadgeStyle {
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "deal" => BadgeStyle::Deal,
            "new" => BadgeStyle::New,
            "popular" | "bestseller" | "premium" => BadgeStyle::Highlight,
            "spicy" => BadgeStyle::Spicy,
            "vegetarian" => BadgeStyle::Vegetarian,
            _ => BadgeStyle::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBadge {
    pub tag: String,
    pub style: BadgeStyle,
    /// `tag.<name>` message, the raw key when no translation exists
    pub label: String,
}

impl TagBadge {
    pub fn new(localizer: &Localizer, tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            style: BadgeStyle::for_tag(tag),
            label: localizer.t(&format!("tag.{}", tag)),
        }
    }
}

/// Every tag of an item, in item order (detail view)
pub fn detail_badges(localizer: &Localizer, item: &MenuItem) -> Vec<TagBadge> {
    item.tags.iter().map(|tag| TagBadge::new(localizer, tag)).collect()
}

/// Badges shown on a menu card
///
/// Deal, new, one popularity badge (only when neither deal nor new), spicy.
/// Vegetarian is a separate marker, see [`is_vegetarian`].
pub fn card_badges(localizer: &Localizer, item: &MenuItem) -> Vec<TagBadge> {
    let is_deal = item.has_tag("deal");
    let is_new = item.has_tag("new");
    let mut badges = Vec::new();

    if is_deal {
        badges.push(TagBadge::new(localizer, "deal"));
    }
    if is_new {
        badges.push(TagBadge::new(localizer, "new"));
    }
    if !is_deal && !is_new {
        if item.has_tag("bestseller") {
            badges.push(TagBadge::new(localizer, "bestseller"));
        } else if item.has_tag("popular") {
            badges.push(TagBadge::new(localizer, "popular"));
        }
    }
    if item.has_tag("spicy") {
        badges.push(TagBadge::new(localizer, "spicy"));
    }
    badges
}

pub fn is_vegetarian(item: &MenuItem) -> bool {
    item.has_tag("vegetarian")
}

// =============================================================================
// Restaurant info
// =============================================================================

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Opening hours for `weekday`, or the localized "Closed"
pub fn hours_for_day(localizer: &Localizer, restaurant: &Restaurant, weekday: Weekday) -> String {
    restaurant
        .hours_for(weekday_key(weekday))
        .map(|hours| localizer.localize_value(hours).to_string())
        .unwrap_or_else(|| localizer.t("header.closed"))
}

/// Opening hours for the local current day
pub fn today_hours(localizer: &Localizer, restaurant: &Restaurant) -> String {
    hours_for_day(localizer, restaurant, chrono::Local::now().weekday())
}

pub fn service_labels(localizer: &Localizer, restaurant: &Restaurant) -> Vec<String> {
    match &restaurant.services {
        Services::Keys(keys) => keys
            .iter()
            .map(|key| localizer.t(&format!("service.{}", key)))
            .collect(),
        Services::Localized(map) => map
            .values()
            .map(|label| localizer.localize(label).to_string())
            .collect(),
    }
}
