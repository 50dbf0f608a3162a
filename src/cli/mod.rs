use std::io;

use clap::{Parser, Subcommand};
use pizzeria::{
    receipt::ReceiptError,
    session::{Session, SessionError},
    storage::KeyValueStore,
};
use thiserror::Error;

use crate::config::ShellConfig;

mod cart;
mod menu;
mod orders;

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("No cart line `{0}`; run `pizzeria cart` to see line ids")]
    UnknownLine(String),

    #[error("Failed to write output: {0}")]
    Receipt(#[from] ReceiptError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "pizzeria", about = "Browse the menu, fill a cart and place pizza orders", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: ShellConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the menu
    Menu(menu::MenuArgs),
    /// Add a pizza to the cart
    Add(cart::AddArgs),
    /// Change the quantity of a cart line
    Quantity(cart::QuantityArgs),
    /// Remove a line from the cart
    Remove(cart::RemoveArgs),
    /// Show the cart
    Cart,
    /// Place an order for everything in the cart
    Checkout,
    /// Show the order history
    Orders,
    /// Add a new pizza to the menu
    AddPizza(menu::AddPizzaArgs),
}

impl Cli {
    /// Parse the command line after loading `.env`, if present.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) fn run<S: KeyValueStore>(
        self,
        session: &mut Session<S>,
        out: &mut impl io::Write,
    ) -> Result<(), CliError> {
        match self.command {
            Commands::Menu(args) => menu::list(&args, session, out),
            Commands::Add(args) => cart::add(&args, session, out),
            Commands::Quantity(args) => cart::set_quantity(&args, session, out),
            Commands::Remove(args) => cart::remove(&args, session, out),
            Commands::Cart => cart::show(session, out),
            Commands::Checkout => cart::checkout(session, out),
            Commands::Orders => orders::show(session, out),
            Commands::AddPizza(args) => menu::add_pizza(args, session, out),
        }
    }
}
