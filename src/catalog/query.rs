//! Menu queries: search, category filter and sort.

use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

use crate::products::{Category, Product};

/// Returned when a sort key is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort order `{0}`, expected name-asc, name-desc, price-asc or price-desc")]
pub struct ParseSortOrderError(String);

/// Menu sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Name (A-Z)
    #[default]
    NameAsc,
    /// Name (Z-A)
    NameDesc,
    /// Price (Low to High)
    PriceAsc,
    /// Price (High to Low)
    PriceDesc,
}

impl SortOrder {
    /// Every sort order.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    /// Key used on the command line and in saved preferences.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::NameAsc => by_name(a, b),
            SortOrder::NameDesc => by_name(b, a),
            SortOrder::PriceAsc => a.price.cmp(&b.price).then_with(|| by_name(a, b)),
            SortOrder::PriceDesc => b.price.cmp(&a.price).then_with(|| by_name(a, b)),
        }
    }
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| ParseSortOrderError(s.to_string()))
    }
}

/// Filters and ordering for browsing the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    /// Case-insensitive substring of the pizza name.
    pub search: Option<String>,

    /// Only show this category; `None` shows all.
    pub category: Option<Category>,

    /// Result ordering.
    pub sort: SortOrder,
}

impl MenuQuery {
    /// Whether a product passes the search and category filters.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self
            .category
            .is_none_or(|category| product.category == category);

        let matches_search = self.search.as_deref().map(str::trim).is_none_or(|term| {
            product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        });

        matches_category && matches_search
    }

    /// Filter and sort a list of products.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matching: Vec<&Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .collect();

        matching.sort_by(|a, b| self.sort.compare(a, b));

        matching
    }
}
