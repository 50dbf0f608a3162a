//! Cart
//!
//! The cart ledger: an insertion-ordered list of [`CartLine`]s and the totals derived from
//! them. Every mutation recomputes discounts and totals from scratch and reports a
//! [`CartChange`] so callers can decide what to persist.

use rust_decimal::Decimal;
use tracing::debug;

use crate::pricing::{BulkDiscount, Totals, totals};

mod line;
pub mod snapshot;

pub use line::{CartLine, LineId, NewCartLine};
pub use snapshot::CartSnapshot;

/// What a cart mutation did, so persistence can follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CartChange {
    /// The lines changed; the snapshot should be rewritten.
    Updated,

    /// Nothing changed.
    Unchanged,

    /// The cart was emptied; the snapshot should be erased.
    Cleared,
}

/// Cart ledger
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    totals: Totals,
    policy: BulkDiscount,
}

impl Cart {
    /// Create an empty cart with the standard bulk discount.
    pub fn new() -> Self {
        Self::with_policy(BulkDiscount::STANDARD)
    }

    /// Create an empty cart with a custom bulk discount.
    pub fn with_policy(policy: BulkDiscount) -> Self {
        Self {
            lines: Vec::new(),
            totals: Totals::default(),
            policy,
        }
    }

    /// Rebuild a cart from stored lines, repairing anything the totals depend on.
    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();

        for mut line in lines {
            line.quantity = line.quantity.max(1);
            line.id = LineId::new(&line.pizza_id, line.size);

            if let Some(existing) = cart.lines.iter_mut().find(|existing| existing.id == line.id) {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                cart.lines.push(line);
            }
        }

        cart.recompute_totals();
        cart
    }

    /// Add pizzas to the cart, merging into an existing line for the same pizza and size.
    ///
    /// A merged quantity saturates at `u32::MAX`.
    pub fn add_line(&mut self, request: NewCartLine) -> CartChange {
        let id = LineId::new(&request.pizza_id, request.size);

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = line.quantity.saturating_add(request.quantity.get());
            debug!(line = %id, quantity = line.quantity, "merged into cart line");
        } else {
            debug!(line = %id, quantity = request.quantity.get(), "added cart line");
            self.lines.push(CartLine::from_request(request));
        }

        self.recompute_totals();

        CartChange::Updated
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_line(&mut self, id: &LineId) -> CartChange {
        let before = self.lines.len();

        self.lines.retain(|line| &line.id != id);

        if self.lines.len() == before {
            return CartChange::Unchanged;
        }

        debug!(line = %id, "removed cart line");
        self.recompute_totals();

        CartChange::Updated
    }

    /// Set a line's quantity, clamped to `1..=u32::MAX`. Unknown ids are ignored.
    pub fn set_quantity(&mut self, id: &LineId, quantity: i64) -> CartChange {
        let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) else {
            return CartChange::Unchanged;
        };

        line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        debug!(line = %id, quantity = line.quantity, "set cart line quantity");

        self.recompute_totals();

        CartChange::Updated
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartChange {
        self.lines.clear();
        self.totals = Totals::default();

        CartChange::Cleared
    }

    /// Recompute every line discount and the cart totals from the current lines.
    fn recompute_totals(&mut self) {
        for line in &mut self.lines {
            line.discount = self.policy.discount_for(line.price, line.quantity);
        }

        self.totals = totals(&self.lines);
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a line by id.
    pub fn get(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Sum of discounted line totals.
    pub fn total(&self) -> Decimal {
        self.totals.total
    }

    /// Sum of line discounts.
    pub fn total_discount(&self) -> Decimal {
        self.totals.total_discount
    }

    /// Sum of line totals before discount.
    pub fn subtotal(&self) -> Decimal {
        self.totals.subtotal()
    }

    /// Current totals.
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Bulk discount in effect.
    pub fn policy(&self) -> BulkDiscount {
        self.policy
    }

    /// Number of pizzas across all lines, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
