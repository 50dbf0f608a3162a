//! Pricing
//!
//! The bulk discount rule and the totals derived from a set of cart lines.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::cart::CartLine;

/// Percentage off a single line once its quantity reaches a threshold.
///
/// The rule is evaluated per line: two lines of the same pizza in different sizes
/// never combine to reach the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkDiscount {
    threshold: u32,
    rate: Decimal,
}

impl BulkDiscount {
    /// 10% off any line with 3 or more pizzas.
    pub const STANDARD: Self = Self {
        threshold: 3,
        rate: Decimal::from_parts(10, 0, 0, false, 2),
    };

    /// Create a discount of `rate` (a fraction, e.g. `0.10`) from `threshold` units.
    ///
    /// The rate is clamped to `0..=1`, so a discount never exceeds its line.
    pub fn new(threshold: u32, rate: Decimal) -> Self {
        Self {
            threshold,
            rate: rate.clamp(Decimal::ZERO, Decimal::ONE),
        }
    }

    /// Quantity at which the discount starts to apply.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Discount rate as a fraction.
    pub fn rate(&self) -> Percentage {
        Percentage::from(self.rate)
    }

    /// Whether a line of `quantity` units qualifies.
    pub fn applies_to(&self, quantity: u32) -> bool {
        quantity >= self.threshold
    }

    /// Discount owed on a line, zero when it does not qualify.
    pub fn discount_for(&self, unit_price: Decimal, quantity: u32) -> Decimal {
        if self.applies_to(quantity) {
            self.rate() * line_total(unit_price, quantity)
        } else {
            Decimal::ZERO
        }
    }

    /// Promotional text for the menu banner.
    pub fn banner(&self) -> String {
        let percent = (self.rate * Decimal::ONE_HUNDRED).normalize();

        format!(
            "Bulk Discount Available! Order {} or more of the same pizza and size to get {percent}% off that item.",
            self.threshold
        )
    }
}

impl Default for BulkDiscount {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Undiscounted price of `quantity` units, saturating at the `Decimal` bounds.
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price.saturating_mul(Decimal::from(quantity))
}

/// Ledger totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of discounted line totals.
    pub total: Decimal,

    /// Sum of line discounts.
    pub total_discount: Decimal,
}

impl Totals {
    /// Sum of undiscounted line totals.
    pub fn subtotal(&self) -> Decimal {
        self.total.saturating_add(self.total_discount)
    }
}

/// Totals for a set of lines whose discounts are already up to date.
pub fn totals<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Totals {
    lines.into_iter().fold(Totals::default(), |acc, line| {
        let gross = line_total(line.price(), line.quantity());

        Totals {
            total: acc.total.saturating_add(gross.saturating_sub(line.discount())),
            total_discount: acc.total_discount.saturating_add(line.discount()),
        }
    })
}
