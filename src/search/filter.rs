//! The pure search predicate and sort.

use crate::model::{DietaryFlag, MenuItem};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under-10")]
    Under10,
    #[serde(rename = "10-20")]
    From10To20,
    #[serde(rename = "over-20")]
    Over20,
}

impl PriceRange {
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Under10 => price < 10.0,
            PriceRange::From10To20 => (10.0..=20.0).contains(&price),
            PriceRange::Over20 => price > 20.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under10 => "under-10",
            PriceRange::From10To20 => "10-20",
            PriceRange::Over20 => "over-20",
        }
    }
}

/// A category name, or the `all` wildcard. Serialized as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(c: CategoryFilter) -> Self {
        c.to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Missing ratings sort as 0.
    RatingDesc,
}

/// Everything besides the query text that narrows or orders results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub price_range: PriceRange,
    pub category: CategoryFilter,
    /// Every listed flag must be set on the item.
    pub dietary: Vec<DietaryFlag>,
    pub sort_by: SortKey,
}

impl SearchFilters {
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.price_range.contains(item.price)
            && self.category.matches(&item.category)
            && self.dietary.iter().all(|flag| item.dietary.has(*flag))
    }
}

/// Case-insensitive text match. A one-character query matches the start of a word in
/// the name ("j" finds "Classic Jollof Rice"); longer queries match a substring of the
/// name or the restaurant.
pub fn matches_query(item: &MenuItem, query: &str) -> bool {
    let query = query.to_lowercase();
    let name = item.name.to_lowercase();
    if query.chars().count() == 1 {
        return name.split_whitespace().any(|word| word.starts_with(&query));
    }
    name.contains(&query) || item.restaurant.to_lowercase().contains(&query)
}

/// Filters and sorts `items`. Sorting is stable, so ties keep catalog order.
pub fn search(items: &[MenuItem], query: &str, filters: &SearchFilters) -> Vec<MenuItem> {
    let mut results: Vec<MenuItem> = items
        .iter()
        .filter(|item| matches_query(item, query) && filters.matches(item))
        .cloned()
        .collect();
    let compare: Option<fn(&MenuItem, &MenuItem) -> Ordering> = match filters.sort_by {
        SortKey::Relevance => None,
        SortKey::PriceAsc => Some(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => Some(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => Some(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero())),
    };
    if let Some(compare) = compare {
        results.sort_by(compare);
    }
    results
}
