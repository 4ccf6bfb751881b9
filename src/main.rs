//! dataxi - A local credential vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dataxi::cli::output;
use dataxi::cli::{execute, Cli};
use dataxi::error::{Error, StoreError, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DATAXI_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dataxi=debug")
        } else {
            EnvFilter::new("dataxi=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(std::env::var_os("NO_COLOR").is_none())
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.dir) {
        let suggestion = match &e {
            Error::Store(StoreError::NotFound(_)) => Some("run: dataxi list"),
            Error::Store(StoreError::AlreadyExists(_)) => {
                Some("run: dataxi delete <conn_id> first")
            }
            Error::Store(StoreError::Parse { .. }) => {
                Some("fix the file by hand or run: dataxi reset")
            }
            Error::Store(StoreError::InvalidRecord(_)) => {
                Some("fix the record by hand or run: dataxi delete <conn_id>")
            }
            Error::Validation(ValidationError::ConfirmationRequired(_)) => Some("rerun with --yes"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
