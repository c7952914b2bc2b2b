//! Configuration types and CLI options.

use clap::ValueEnum;

/// Default `itemtype` suffix to scan for.
pub const DEFAULT_SCHEMA_NAME: &str = "Product";
/// Default id of the owned output container.
pub const DEFAULT_CONTAINER_ID: &str = "jsSchemaParser";
/// Default CSS class prefix used to namespace all generated class names.
pub const DEFAULT_CLASS_NAMESPACE: &str = "schema-parser";

/// Logging level for the application.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Rendering selected on the command line.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One HTML table per discovered schema root
    Table,
    /// The full result set as JSON inside a textarea
    Json,
}

/// Session options for a [`MicroSchemaParser`](crate::MicroSchemaParser).
///
/// # Examples
///
/// ```
/// use micro_schema_parser::ParserOptions;
///
/// let options = ParserOptions {
///     schema_name: "Offer".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(options.container_id, "jsSchemaParser");
/// ```
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// `itemtype` suffix selecting the schema roots to scan for.
    pub schema_name: String,
    /// Id of the owned output container element.
    pub container_id: String,
    /// Class prefix for all generated elements (`{prefix}__container`,
    /// `{prefix}__table`, `{prefix}__error`, `{prefix}__textarea`).
    pub class_namespace: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            schema_name: DEFAULT_SCHEMA_NAME.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            class_namespace: DEFAULT_CLASS_NAMESPACE.to_string(),
        }
    }
}
