//! Cart snapshot
//!
//! The persisted shape of the cart:
//! `{ items: [...], total, totalDiscount }`. Older snapshots lack `totalDiscount`
//! (and per-line `discount`); both default to zero and are recomputed on restore.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};

/// Serialized cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Cart lines in insertion order.
    #[serde(default)]
    pub items: Vec<CartLine>,

    /// Stored total.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Stored total discount.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_discount: Decimal,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().to_vec(),
            total: cart.total(),
            total_discount: cart.total_discount(),
        }
    }
}

impl From<CartSnapshot> for Cart {
    /// Stored totals are ignored; they are always recomputed from the lines.
    fn from(snapshot: CartSnapshot) -> Self {
        Cart::from_lines(snapshot.items)
    }
}
