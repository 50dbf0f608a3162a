//! Pizzeria shell

use std::{io, process::ExitCode};

use pizzeria::{session::Session, storage::FileStore};
use tracing::error;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;

fn main() -> ExitCode {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(error) => {
            _ = error.print();

            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1));
        }
    };

    if let Err(error) = observability::init(&cli.config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging is not initialised, stderr is the only channel left"
        )]
        {
            eprintln!("Failed to initialise logging: {error}");
        }

        return ExitCode::FAILURE;
    }

    let store = FileStore::new(&cli.config.data_dir);

    let mut session = match Session::open(store) {
        Ok(session) => session,
        Err(error) => {
            error!(%error, "failed to open session");
            report(&error);

            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();

    match cli.run(&mut session, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");
            report(&error);

            ExitCode::FAILURE
        }
    }
}

fn report(error: &dyn std::error::Error) {
    #[expect(clippy::print_stderr, reason = "user-facing error output")]
    {
        eprintln!("Error: {error}");
    }
}
