//! envschema CLI - validate an environment against a JSON schema.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install the tracing subscriber (stderr) at the requested verbosity.
//! - Run the selected command and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Schema semantics or value parsing (see the `envschema` crate).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - The process environment is read, never modified.

mod args;
mod commands;
mod dotenv;
mod error;
mod formatters;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn run(cli: &Cli) -> Result<()> {
    match cli.command {
        Commands::Check => commands::check::run(cli),
        Commands::Keys => commands::keys::run(cli),
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides the level chosen with -v.
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity().into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
