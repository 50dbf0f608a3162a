//! Receipt
//!
//! Terminal rendering of the cart and the order history.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLine},
    catalog::Catalog,
    money::to_money,
    orders::{Order, OrderLog, stats::sales_by_category},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write the cart as a table followed by its totals.
///
/// # Errors
///
/// Returns [`ReceiptError::Io`] if the output cannot be written.
pub fn write_cart(mut out: impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }

    writeln!(out, "\n{}", lines_table(cart.lines(), true))?;

    write_summary_line(&mut out, "Subtotal:", &to_money(cart.subtotal()).to_string())?;

    if cart.total_discount() > Decimal::ZERO {
        write_summary_line(
            &mut out,
            "Bulk savings:",
            &format!("-{}", to_money(cart.total_discount())),
        )?;
    }

    write_summary_line(&mut out, "Total:", &to_money(cart.total()).to_string())?;
    write_summary_line(&mut out, "Pizzas:", &cart.item_count().to_string())?;

    Ok(())
}

/// Write a single order with its lines.
///
/// # Errors
///
/// Returns [`ReceiptError::Io`] if the output cannot be written.
pub fn write_order(mut out: impl io::Write, order: &Order) -> Result<(), ReceiptError> {
    writeln!(
        out,
        "\nOrder #{}  {}  Completed",
        order.short_id(),
        order.date().strftime("%A, %B %-d, %Y at %H:%M:%S UTC")
    )?;

    writeln!(out, "{}", lines_table(order.items(), false))?;

    write_summary_line(&mut out, "Total:", &to_money(order.total()).to_string())?;

    if order.total_discount() > Decimal::ZERO {
        write_summary_line(
            &mut out,
            "You saved:",
            &to_money(order.total_discount()).to_string(),
        )?;
    }

    Ok(())
}

/// Write the order history: headline figures, sales per category, then every order.
///
/// # Errors
///
/// Returns [`ReceiptError::Io`] if the output cannot be written.
pub fn write_order_history(
    mut out: impl io::Write,
    orders: &OrderLog,
    catalog: &Catalog,
) -> Result<(), ReceiptError> {
    if orders.is_empty() {
        writeln!(
            out,
            "No orders yet. Browse the menu and start your delicious journey!"
        )?;
        return Ok(());
    }

    let stats = orders.stats();

    writeln!(out, "Order History")?;
    write_summary_line(&mut out, "Total orders:", &stats.order_count.to_string())?;
    write_summary_line(&mut out, "Total spent:", &to_money(stats.total_spent).to_string())?;
    write_summary_line(&mut out, "Total saved:", &to_money(stats.total_saved).to_string())?;
    write_summary_line(&mut out, "Pizzas ordered:", &stats.pizzas_ordered.to_string())?;

    let mut builder = Builder::default();
    builder.push_record(["Category", "Pizzas"]);

    for (category, count) in sales_by_category(orders.orders(), catalog) {
        builder.push_record([category, count.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..2), Alignment::right());

    writeln!(out, "\n{table}")?;

    for order in orders.orders() {
        write_order(&mut out, order)?;
    }

    Ok(())
}

fn lines_table(lines: &[CartLine], with_ids: bool) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Pizza", "Size", "Qty", "Price", "Discount", "Total"];
    if with_ids {
        header.insert(0, "Line");
    }
    builder.push_record(header);

    for line in lines {
        let discount = if line.discount() > Decimal::ZERO {
            format!("-{}", to_money(line.discount()))
        } else {
            "-".to_string()
        };

        let mut row = vec![
            line.name().to_string(),
            line.size().to_string(),
            line.quantity().to_string(),
            to_money(line.price()).to_string(),
            discount,
            to_money(line.total()).to_string(),
        ];
        if with_ids {
            row.insert(0, line.id().to_string());
        }
        builder.push_record(row);
    }

    let first_numeric = if with_ids { 3 } else { 2 };

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(first_numeric..), Alignment::right());

    table.to_string()
}

fn write_summary_line(out: &mut impl io::Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, " {label:<16}{value:>12}")
}
