//! Criteria that select and order the visible slice of a catalog page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selector values that mean "no category filter". The storefront selector
/// labels its first option `All categories`.
const ALL_SENTINELS: [&str; 2] = ["all", "All categories"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match against `Product::category`.
    Named(String),
}

impl CategoryFilter {
    /// Interprets a raw selector value, mapping the "all" sentinels to
    /// [`CategoryFilter::All`].
    #[must_use]
    pub fn from_selection(value: &str) -> Self {
        if ALL_SENTINELS.contains(&value) {
            Self::All
        } else {
            Self::Named(value.to_owned())
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from_selection(value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Keep fetch order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

#[derive(Debug, Error)]
#[error("unknown sort order \"{0}\" (expected none, low or high)")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    /// Accepts the storefront selector values (`default`, `low`, `high`)
    /// alongside the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "default" => Ok(Self::None),
            "priceAsc" | "price-asc" | "low" => Ok(Self::PriceAsc),
            "priceDesc" | "price-desc" | "high" => Ok(Self::PriceDesc),
            other => Err(ParseSortOrderError(other.to_owned())),
        }
    }
}

/// The mutable state behind a catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// 1-based page number.
    pub page: u32,
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_order: SortOrder,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search_text: String::new(),
            category: CategoryFilter::All,
            sort_order: SortOrder::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_starts_on_first_page_unfiltered() {
        let q = CatalogQuery::default();
        assert_eq!(q.page, 1);
        assert!(q.search_text.is_empty());
        assert_eq!(q.category, CategoryFilter::All);
        assert_eq!(q.sort_order, SortOrder::None);
    }

    #[test]
    fn selection_sentinels_map_to_all() {
        assert_eq!(CategoryFilter::from_selection("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection("All categories"),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::from_selection("shoes"),
            CategoryFilter::Named("shoes".into())
        );
    }

    #[test]
    fn named_filter_is_case_sensitive() {
        let filter = CategoryFilter::Named("shoes".into());
        assert!(filter.matches("shoes"));
        assert!(!filter.matches("Shoes"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn sort_order_parses_selector_values() {
        assert_eq!("default".parse::<SortOrder>().unwrap(), SortOrder::None);
        assert_eq!("low".parse::<SortOrder>().unwrap(), SortOrder::PriceAsc);
        assert_eq!("priceDesc".parse::<SortOrder>().unwrap(), SortOrder::PriceDesc);
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn sort_order_serializes_camel_case() {
        let json = serde_json::to_string(&SortOrder::PriceAsc).unwrap();
        assert_eq!(json, "\"priceAsc\"");
    }
}
