//! Keys command implementation.

use anyhow::Result;
use envschema::EnvLoader;

use crate::args::Cli;
use crate::commands::{emit, read_schema};
use crate::formatters::{OutputFormat, format_keys};

pub fn run(cli: &Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let schema = read_schema(cli.schema.as_deref())?;
    let keys = EnvLoader::new(schema)
        .with_options(cli.loader_options())
        .describe();

    let output = format_keys(&keys, format)?;
    emit(&output, format, cli.output_file.as_deref())
}
