//! Orders
//!
//! Immutable snapshots of the cart taken at checkout, kept most recent first.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};

pub mod stats;

pub use stats::OrderStats;

/// A completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: Uuid,
    items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    total_discount: Decimal,
    date: Timestamp,
}

impl Order {
    /// Snapshot a cart as an order.
    pub fn from_cart(cart: &Cart, id: Uuid, date: Timestamp) -> Self {
        Self {
            id,
            items: cart.lines().to_vec(),
            total: cart.total(),
            total_discount: cart.total_discount(),
            date,
        }
    }

    /// Order id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Lines as they were at checkout.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Amount paid.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Amount saved through bulk discounts.
    pub fn total_discount(&self) -> Decimal {
        self.total_discount
    }

    /// When the order was placed.
    pub fn date(&self) -> Timestamp {
        self.date
    }

    /// Number of pizzas in the order.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// First eight characters of the id, as shown in the history.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string().chars().take(8).collect()
    }
}

/// Append-only order history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLog {
    #[serde(default)]
    orders: Vec<Order>,
}

impl OrderLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checkout of `cart` now. Empty carts record nothing.
    pub fn record_order(&mut self, cart: &Cart) -> Option<&Order> {
        self.record_order_at(cart, Uuid::now_v7(), Timestamp::now())
    }

    /// Record a checkout with an explicit id and time. Empty carts record nothing.
    pub fn record_order_at(&mut self, cart: &Cart, id: Uuid, date: Timestamp) -> Option<&Order> {
        if cart.is_empty() {
            return None;
        }

        let order = Order::from_cart(cart, id, date);

        info!(
            order = %order.id,
            lines = order.items.len(),
            total = %order.total,
            "recorded order"
        );

        self.orders.insert(0, order);
        self.orders.first()
    }

    /// Orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Find an order by id.
    pub fn get(&self, id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Aggregates over the whole history.
    pub fn stats(&self) -> OrderStats {
        OrderStats::from_orders(&self.orders)
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
