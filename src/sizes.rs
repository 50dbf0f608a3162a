//! Sizes

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a size name is not one of the known sizes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown size `{0}`, expected one of: Small, Medium, Large")]
pub struct ParseSizeError(String);

/// Pizza size. The base menu price is the `Medium` price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    /// Two less than the base price.
    Small,

    /// The base price.
    #[default]
    Medium,

    /// Two more than the base price.
    Large,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Amount added to the base price for this size.
    pub fn price_adjustment(self) -> Decimal {
        match self {
            Size::Small => Decimal::from(-2),
            Size::Medium => Decimal::ZERO,
            Size::Large => Decimal::from(2),
        }
    }

    /// Display name, also used as the line id suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSizeError(s.to_string()))
    }
}
