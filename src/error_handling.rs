//! Error types for parsing and initialization.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors captured during a parse invocation.
///
/// These never escape [`MicroSchemaParser::parse`](crate::MicroSchemaParser::parse):
/// they are recorded in the session state, logged, and shown through the
/// error display by the rendering calls. There is no retry; a failed parse
/// must be re-invoked explicitly after correcting the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The supplied scan root is not a usable document.
    #[error("the supplied scan root is not a valid document")]
    InvalidRoot,

    /// No element matched the configured schema selector.
    #[error("the schema type {schema} was not found in this page")]
    SchemaNotFound {
        /// The schema name that was scanned for.
        schema: String,
    },

    /// Schema roots were found but none produced any extracted data.
    #[error("invalid schema types: cannot parse")]
    EmptyResult,
}
