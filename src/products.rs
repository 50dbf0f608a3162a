//! Products

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sizes::Size;

/// Returned when a category name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct ParseCategoryError(String);

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Vegetarian
    Vegetarian,
    /// Meat
    Meat,
    /// Spicy
    Spicy,
    /// Seafood
    Seafood,
    /// Vegan
    Vegan,
    /// Specialty
    Specialty,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Category; 6] = [
        Category::Vegetarian,
        Category::Meat,
        Category::Spicy,
        Category::Seafood,
        Category::Vegan,
        Category::Specialty,
    ];

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Vegetarian => "Vegetarian",
            Category::Meat => "Meat",
            Category::Spicy => "Spicy",
            Category::Seafood => "Seafood",
            Category::Vegan => "Vegan",
            Category::Specialty => "Specialty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Base (medium) price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Toppings, in display order
    pub ingredients: Vec<String>,

    /// Image reference
    pub image_url: String,

    /// Menu category
    pub category: Category,
}

impl Product {
    /// Price of this product in the given size.
    pub fn price_for(&self, size: Size) -> Decimal {
        self.price.saturating_add(size.price_adjustment())
    }
}
