use std::{io, num::NonZeroU32};

use clap::Args;
use pizzeria::{
    cart::{CartChange, LineId},
    money::to_money,
    receipt,
    session::Session,
    sizes::Size,
    storage::KeyValueStore,
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Menu id of the pizza
    pizza_id: String,

    /// Pizza size (small, medium, large)
    #[arg(long, default_value_t = Size::Medium)]
    size: Size,

    /// Number of pizzas
    #[arg(long, default_value = "1")]
    quantity: NonZeroU32,
}

#[derive(Debug, Args)]
pub(crate) struct QuantityArgs {
    /// Cart line id, e.g. `1-Medium`
    line_id: String,

    /// New quantity; values below one are treated as one
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    /// Cart line id, e.g. `1-Medium`
    line_id: String,
}

pub(crate) fn add<S: KeyValueStore>(
    args: &AddArgs,
    session: &mut Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let line = session.add_to_cart(&args.pizza_id, args.size, args.quantity)?;

    writeln!(
        out,
        "Added {} x {} ({}) to cart as line {}",
        args.quantity,
        line.name(),
        line.size(),
        line.id()
    )?;

    let line_total = to_money(line.total());
    let discount = line.discount();
    writeln!(out, "Line total: {line_total}")?;
    if !discount.is_zero() {
        writeln!(out, "Bulk discount applied: -{}", to_money(discount))?;
    }

    writeln!(out, "Cart: {} pizzas", session.cart().item_count())?;

    Ok(())
}

pub(crate) fn set_quantity<S: KeyValueStore>(
    args: &QuantityArgs,
    session: &mut Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let id = LineId::from(args.line_id.as_str());

    if session.update_quantity(&id, args.quantity) == CartChange::Unchanged {
        return Err(CliError::UnknownLine(args.line_id.clone()));
    }

    receipt::write_cart(out, session.cart())?;

    Ok(())
}

pub(crate) fn remove<S: KeyValueStore>(
    args: &RemoveArgs,
    session: &mut Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let id = LineId::from(args.line_id.as_str());

    if session.remove_from_cart(&id) == CartChange::Unchanged {
        return Err(CliError::UnknownLine(args.line_id.clone()));
    }

    writeln!(out, "Removed {id}")?;
    receipt::write_cart(out, session.cart())?;

    Ok(())
}

pub(crate) fn show<S: KeyValueStore>(
    session: &Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    receipt::write_cart(out, session.cart())?;

    Ok(())
}

pub(crate) fn checkout<S: KeyValueStore>(
    session: &mut Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let Some(confirmation) = session.checkout() else {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    };

    let order = &confirmation.order;

    writeln!(out, "Order placed! Thank you for your order.")?;
    receipt::write_order(&mut *out, order)?;
    writeln!(
        out,
        "\nThis confirmation closes after {} seconds.",
        confirmation.dismiss_after.as_secs()
    )?;

    Ok(())
}
