//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map global options onto `LoaderOptions`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not read `.env` files (see `dotenv` module).

use clap::{ArgAction, Parser, Subcommand};
use envschema::LoaderOptions;
use envschema::constants::DEFAULT_KEY_SEPARATOR;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "envschema")]
#[command(about = "Load and validate environment variables against a JSON schema", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envschema --schema schema.json check\n  envschema --schema schema.json --prefix APP_ check -o yaml\n  envschema --schema schema.json keys -o table\n  DOTENV_DISABLED=1 envschema -s schema.json check\n"
)]
pub struct Cli {
    /// Path to the JSON schema document
    #[arg(short, long, global = true, env = "ENVSCHEMA_SCHEMA", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Prefix prepended to every environment key
    #[arg(long, global = true, env = "ENVSCHEMA_PREFIX", default_value = "")]
    pub prefix: String,

    /// Separator placed between path segments of synthesized keys
    #[arg(long, global = true, env = "ENVSCHEMA_SEPARATOR", default_value = DEFAULT_KEY_SEPARATOR)]
    pub separator: String,

    /// Treat leaves without an explicit `required` flag as required
    #[arg(long, global = true)]
    pub required_by_default: bool,

    /// `.env` file consulted for keys missing from the process environment
    #[arg(long, global = true, env = "ENVSCHEMA_ENV_FILE", default_value = ".env", value_name = "FILE")]
    pub env_file: PathBuf,

    /// Output format (json, yaml, table)
    #[arg(short, long, global = true, default_value = "json")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase diagnostic output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the environment against the schema and print the resulting configuration
    Check,

    /// List the environment keys the schema expects
    Keys,
}

impl Cli {
    /// Loader diagnostics level selected by `-v` flags.
    pub fn verbosity(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions::new()
            .with_prefix(self.prefix.clone())
            .with_separator(self.separator.clone())
            .with_required_by_default(self.required_by_default)
            .with_verbosity(self.verbosity())
    }
}
