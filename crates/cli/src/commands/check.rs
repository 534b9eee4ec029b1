//! Check command implementation.

use anyhow::{Context, Result};
use envschema::{EnvLoader, Overlay, ProcessEnv};
use tracing::info;

use crate::args::Cli;
use crate::commands::{emit, read_schema};
use crate::dotenv::read_env_file;
use crate::formatters::{OutputFormat, format_config};

pub fn run(cli: &Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let schema = read_schema(cli.schema.as_deref())?;
    let fallback = read_env_file(&cli.env_file)?;

    let loader = EnvLoader::new(schema).with_options(cli.loader_options());
    let source = Overlay::new(ProcessEnv, &fallback);
    let config = loader
        .load(&source)
        .context("Environment does not satisfy schema")?;
    info!(entries = config.as_map().len(), "Environment satisfies schema");

    let output = format_config(&config, format)?;
    emit(&output, format, cli.output_file.as_deref())
}
