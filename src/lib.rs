//! Pizzeria
//!
//! Pizzeria is the ordering core of a pizza shop: a menu catalog, a cart ledger that prices
//! lines by size and applies bulk discounts, an order history built from checked-out carts,
//! and a write-through adapter that keeps all three in a key-value store.

pub mod cart;
pub mod catalog;
pub mod money;
pub mod orders;
pub mod persistence;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod session;
pub mod sizes;
pub mod storage;
