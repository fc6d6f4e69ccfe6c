//! Unit Converter
//!
//! Interactive terminal front end. Reads queries such as
//! `10 feet to meters` from stdin, one per line, and answers on stdout
//! until `exit` or end of input.
//!
//! Logs go to stderr; set `RUST_LOG` (default `warn`) to see them.

use std::io::{self, BufReader};
use std::process::ExitCode;
use converter::{Converter, Session};
use converter_units::UNITS;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // stdout carries the conversation, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    tracing::info!(version = VERSION, units = UNITS.len(), "unit converter started");

    let stdin = io::stdin();
    let reader = BufReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut session = Session::new(Converter::new(), reader, stdout.lock());

    match session.run() {
        Ok(()) => {
            tracing::info!("session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "I/O failure, stopping");
            ExitCode::FAILURE
        }
    }
}
