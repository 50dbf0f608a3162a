//! Order history aggregates, computed on read.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{catalog::Catalog, orders::Order};

/// Label for sales of pizzas that are no longer on the menu.
pub const OTHER_CATEGORY: &str = "Other";

/// Summary figures for the order history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// Number of orders placed.
    pub order_count: usize,

    /// Sum of order totals.
    pub total_spent: Decimal,

    /// Sum of order discounts.
    pub total_saved: Decimal,

    /// Number of pizzas across all orders.
    pub pizzas_ordered: u64,
}

impl OrderStats {
    /// Aggregate a list of orders.
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |acc, order| Self {
            order_count: acc.order_count + 1,
            total_spent: acc.total_spent + order.total(),
            total_saved: acc.total_saved + order.total_discount(),
            pizzas_ordered: acc.pizzas_ordered + order.item_count(),
        })
    }
}

/// Pizzas sold per menu category, largest first, ties by name.
///
/// Lines are matched to the catalog by pizza id; pizzas missing from the catalog are
/// counted under [`OTHER_CATEGORY`].
pub fn sales_by_category(orders: &[Order], catalog: &Catalog) -> Vec<(String, u64)> {
    let mut sales: FxHashMap<String, u64> = FxHashMap::default();

    for line in orders.iter().flat_map(Order::items) {
        let category = catalog
            .get(line.pizza_id())
            .map_or(OTHER_CATEGORY, |product| product.category.as_str());

        *sales.entry(category.to_string()).or_default() += u64::from(line.quantity());
    }

    let mut sales: Vec<(String, u64)> = sales.into_iter().collect();
    sales.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });

    sales
}
