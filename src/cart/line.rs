//! Cart lines

use std::{fmt, num::NonZeroU32};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{pricing::line_total, sizes::Size};

/// Identity of a cart line: `"<pizzaId>-<size>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Line id for a pizza in a given size.
    pub fn new(pizza_id: &str, size: Size) -> Self {
        Self(format!("{pizza_id}-{size}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LineId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Request to add pizzas to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    /// Catalog id of the pizza.
    pub pizza_id: String,

    /// Display name.
    pub name: String,

    /// Unit price for the selected size.
    pub unit_price: Decimal,

    /// Number of pizzas to add.
    pub quantity: NonZeroU32,

    /// Selected size.
    pub size: Size,

    /// Image reference.
    pub image_url: String,
}

/// One distinct (pizza, size) selection in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub(crate) id: LineId,
    pub(crate) pizza_id: String,
    pub(crate) name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) price: Decimal,
    pub(crate) quantity: u32,
    pub(crate) size: Size,
    pub(crate) image_url: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub(crate) discount: Decimal,
}

impl CartLine {
    pub(crate) fn from_request(request: NewCartLine) -> Self {
        Self {
            id: LineId::new(&request.pizza_id, request.size),
            pizza_id: request.pizza_id,
            name: request.name,
            price: request.unit_price,
            quantity: request.quantity.get(),
            size: request.size,
            image_url: request.image_url,
            discount: Decimal::ZERO,
        }
    }

    /// Line id.
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Catalog id of the pizza.
    pub fn pizza_id(&self) -> &str {
        &self.pizza_id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price for the line's size.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Number of pizzas, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Image reference.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Bulk discount applied to this line.
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Price of the line before discount.
    pub fn subtotal(&self) -> Decimal {
        line_total(self.price, self.quantity)
    }

    /// Price of the line after discount.
    pub fn total(&self) -> Decimal {
        self.subtotal().saturating_sub(self.discount)
    }
}
