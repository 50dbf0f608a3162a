use std::io;

use pizzeria::{receipt, session::Session, storage::KeyValueStore};

use super::CliError;

pub(crate) fn show<S: KeyValueStore>(
    session: &Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    receipt::write_order_history(out, session.orders(), session.catalog())?;

    Ok(())
}
