//! End-to-end ordering against a file-backed store.
//!
//! Each step reopens the session from disk, the way separate shell invocations do.

use std::{fs, num::NonZeroU32};

use rust_decimal::Decimal;
use testresult::TestResult;

use pizzeria::{
    persistence::{CART_KEY, MENU_KEY, ORDERS_KEY},
    prelude::*,
};

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

#[test]
fn cart_and_orders_survive_restarts() -> TestResult {
    let dir = tempfile::tempdir()?;

    let mut session = Session::open(FileStore::new(dir.path()))?;
    session.add_to_cart("1", Size::Medium, qty(2))?;
    session.add_to_cart("1", Size::Medium, qty(1))?;
    session.add_to_cart("2", Size::Small, qty(1))?;

    let mut session = Session::open(FileStore::new(dir.path()))?;
    assert_eq!(session.cart().len(), 2);
    assert_eq!(session.cart().item_count(), 4);

    // 3 x 12 less 10%, plus one small pepperoni at 12
    assert_eq!(session.cart().total(), Decimal::new(444, 1));
    assert_eq!(session.cart().total_discount(), Decimal::new(36, 1));

    let confirmation = session.checkout().ok_or("Expected confirmation")?;
    assert_eq!(confirmation.order.total(), Decimal::new(444, 1));
    assert!(!dir.path().join(format!("{CART_KEY}.json")).exists());

    let session = Session::open(FileStore::new(dir.path()))?;
    assert!(session.cart().is_empty());
    assert_eq!(session.orders().len(), 1);

    let stats = session.orders().stats();
    assert_eq!(stats.order_count, 1);
    assert_eq!(stats.pizzas_ordered, 4);
    assert_eq!(stats.total_saved, Decimal::new(36, 1));

    Ok(())
}

#[test]
fn orders_are_listed_most_recent_first() -> TestResult {
    let dir = tempfile::tempdir()?;

    let mut session = Session::open(FileStore::new(dir.path()))?;
    session.add_to_cart("3", Size::Large, qty(1))?;
    let first = session.checkout().ok_or("Expected first order")?.order;

    session.add_to_cart("4", Size::Large, qty(1))?;
    let second = session.checkout().ok_or("Expected second order")?.order;

    let session = Session::open(FileStore::new(dir.path()))?;
    let ids: Vec<_> = session.orders().orders().iter().map(Order::id).collect();

    assert_eq!(ids, vec![second.id(), first.id()]);

    Ok(())
}

#[test]
fn corrupt_files_start_empty() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join(format!("{CART_KEY}.json")), "not json")?;
    fs::write(dir.path().join(format!("{ORDERS_KEY}.json")), "[1, 2")?;
    fs::write(dir.path().join(format!("{MENU_KEY}.json")), "{}")?;

    let session = Session::open(FileStore::new(dir.path()))?;

    assert!(session.cart().is_empty());
    assert!(session.orders().is_empty());
    assert_eq!(session.catalog().len(), 7, "unreadable menu falls back to seed");

    Ok(())
}

#[test]
fn stored_totals_are_recomputed_on_load() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join(format!("{CART_KEY}.json")),
        r#"{
            "items": [{
                "id": "1-Large",
                "pizzaId": "1",
                "name": "Margherita",
                "price": 14.0,
                "quantity": 3,
                "size": "Large",
                "imageUrl": ""
            }],
            "total": 1.0,
            "totalDiscount": 0.0
        }"#,
    )?;

    let session = Session::open(FileStore::new(dir.path()))?;

    assert_eq!(session.cart().total(), Decimal::new(378, 1));
    assert_eq!(session.cart().total_discount(), Decimal::new(42, 1));

    Ok(())
}
