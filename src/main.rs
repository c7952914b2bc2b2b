//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `micro_schema_parser` library that
//! handles command-line argument parsing, logger initialization, and
//! reading the input document. All parsing and rendering is implemented in
//! the library crate.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use micro_schema_parser::config::{
    DEFAULT_CLASS_NAMESPACE, DEFAULT_CONTAINER_ID, DEFAULT_SCHEMA_NAME,
};
use micro_schema_parser::initialization::init_logger;
use micro_schema_parser::{LogLevel, MicroSchemaParser, OutputFormat, ParserOptions};

#[derive(Debug, Parser)]
#[command(
    name = "micro_schema_parser",
    about = "Extracts microdata schema annotations from an HTML document and renders them as a table or JSON"
)]
struct Cli {
    /// HTML file to parse (reads stdin when omitted)
    file: Option<PathBuf>,

    /// itemtype suffix to scan for
    #[arg(long, default_value = DEFAULT_SCHEMA_NAME)]
    schema_name: String,

    /// Id of the generated container element
    #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
    container_id: String,

    /// Class prefix for all generated elements
    #[arg(long, default_value = DEFAULT_CLASS_NAMESPACE)]
    class_namespace: String,

    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.log_level.clone().into()).context("Failed to initialize logger")?;

    let html = read_input(cli.file.as_deref())?;

    let mut parser = MicroSchemaParser::new(ParserOptions {
        schema_name: cli.schema_name,
        container_id: cli.container_id,
        class_namespace: cli.class_namespace,
    });
    parser.parse(&html);

    let output = match cli.format {
        OutputFormat::Table => parser.render_table(),
        OutputFormat::Json => parser.render_json(),
    };
    println!("{output}");

    if parser.is_error() {
        process::exit(1);
    }
    Ok(())
}

/// Reads the input document from the given file, or from stdin when no file
/// was supplied.
fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}
