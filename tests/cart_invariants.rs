//! Property tests for the cart ledger.
//!
//! Arbitrary sequences of add, remove and quantity changes must leave the cart with
//! unique lines, quantities of at least one and totals equal to a from-scratch
//! recomputation over the current lines. Prices cover the whole cent range the menu
//! accepts.

use std::num::NonZeroU32;

use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use pizzeria::{
    catalog::{MAX_PRICE, MIN_PRICE},
    prelude::*,
};

const PIZZAS: [(&str, &str); 3] = [
    ("1", "Margherita"),
    ("2", "Pepperoni"),
    ("7", "Seafood Delight"),
];

#[derive(Debug, Clone)]
enum Op {
    Add {
        pizza: usize,
        size: Size,
        quantity: u32,
        cents: i64,
    },
    Remove {
        pizza: usize,
        size: Size,
    },
    SetQuantity {
        pizza: usize,
        size: Size,
        quantity: i64,
    },
    Clear,
}

fn size() -> impl Strategy<Value = Size> {
    prop_oneof![Just(Size::Small), Just(Size::Medium), Just(Size::Large)]
}

fn cents() -> impl Strategy<Value = i64> {
    let to_cents = |price: Decimal| (price * Decimal::ONE_HUNDRED).to_i64().unwrap_or_default();

    to_cents(MIN_PRICE)..=to_cents(MAX_PRICE)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..PIZZAS.len(), size(), 1_u32..6, cents()).prop_map(
            |(pizza, size, quantity, cents)| Op::Add {
                pizza,
                size,
                quantity,
                cents,
            }
        ),
        2 => (0..PIZZAS.len(), size()).prop_map(|(pizza, size)| Op::Remove { pizza, size }),
        3 => (0..PIZZAS.len(), size(), -3_i64..8).prop_map(|(pizza, size, quantity)| {
            Op::SetQuantity {
                pizza,
                size,
                quantity,
            }
        }),
        1 => Just(Op::Clear),
    ]
}

fn pizza(index: usize) -> (&'static str, &'static str) {
    let [first, ..] = PIZZAS;
    PIZZAS.get(index).copied().unwrap_or(first)
}

fn line_id(index: usize, size: Size) -> LineId {
    let (id, _) = pizza(index);
    LineId::new(id, size)
}

fn apply(cart: &mut Cart, op: &Op) -> CartChange {
    match *op {
        Op::Add {
            pizza: index,
            size,
            quantity,
            cents,
        } => {
            let (id, name) = pizza(index);

            cart.add_line(NewCartLine {
                pizza_id: id.to_string(),
                name: name.to_string(),
                unit_price: Decimal::new(cents, 2) + size.price_adjustment(),
                quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
                size,
                image_url: String::new(),
            })
        }
        Op::Remove { pizza, size } => cart.remove_line(&line_id(pizza, size)),
        Op::SetQuantity {
            pizza,
            size,
            quantity,
        } => cart.set_quantity(&line_id(pizza, size), quantity),
        Op::Clear => cart.clear(),
    }
}

/// Apply every op, checking that only `clear` reports `Cleared`.
fn replay(ops: &[Op]) -> Result<Cart, TestCaseError> {
    let mut cart = Cart::new();

    for op in ops {
        let change = apply(&mut cart, op);
        prop_assert_eq!(change == CartChange::Cleared, matches!(op, Op::Clear));
    }

    Ok(cart)
}

fn expected_totals(cart: &Cart) -> (Decimal, Decimal) {
    cart.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(total, discount), line| {
            let gross = line.price() * Decimal::from(line.quantity());
            let line_discount = if line.quantity() >= 3 {
                gross * Decimal::new(1, 1)
            } else {
                Decimal::ZERO
            };

            (total + gross - line_discount, discount + line_discount)
        },
    )
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn totals_never_drift(ops in prop::collection::vec(op(), 0..40)) {
        let mut cart = Cart::new();

        for op in &ops {
            let change = apply(&mut cart, op);
            if change == CartChange::Cleared {
                prop_assert!(cart.is_empty());
            }

            let (total, discount) = expected_totals(&cart);
            prop_assert_eq!(cart.total(), total);
            prop_assert_eq!(cart.total_discount(), discount);
            prop_assert!(cart.total() >= Decimal::ZERO);

            for line in cart.iter() {
                prop_assert!(line.quantity() >= 1);
                prop_assert_eq!(line.id(), &LineId::new(line.pizza_id(), line.size()));
            }

            let mut ids: Vec<&LineId> = cart.iter().map(CartLine::id).collect();
            ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            ids.dedup();
            prop_assert_eq!(ids.len(), cart.len());
        }
    }

    #[test]
    fn unchanged_means_nothing_changed(ops in prop::collection::vec(op(), 0..20), last in op()) {
        let mut cart = replay(&ops)?;

        let before = cart.clone();
        if apply(&mut cart, &last) == CartChange::Unchanged {
            prop_assert_eq!(cart, before);
        }
    }

    #[test]
    fn snapshot_restores_the_same_cart(ops in prop::collection::vec(op(), 0..20)) {
        let cart = replay(&ops)?;

        let json = serde_json::to_string(&CartSnapshot::from(&cart))
            .map_err(|error| TestCaseError::fail(error.to_string()))?;
        let snapshot: CartSnapshot = serde_json::from_str(&json)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(Cart::from(snapshot), cart);
    }
}
