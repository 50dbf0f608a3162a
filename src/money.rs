//! Money

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// The currency every menu price is quoted in.
pub fn currency() -> &'static Currency {
    iso::USD
}

/// Converts a ledger amount into displayable money, rounded to whole cents.
pub fn to_money(amount: Decimal) -> Money<'static, Currency> {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Money::from_decimal(cents, currency())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_money_rounds_half_cents_away_from_zero() {
        let money = to_money(Decimal::new(38_975, 3));

        assert_eq!(money, Money::from_minor(3_898, iso::USD));
    }

    #[test]
    fn to_money_keeps_whole_amounts() {
        assert_eq!(to_money(Decimal::from(27)), Money::from_minor(2_700, iso::USD));
    }
}
