//! Logger initialization.

use log::LevelFilter;

use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` overrides it, so `--log-level` takes precedence over
/// the environment while `RUST_LOG` still works for per-module filtering
/// during development.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger was already set.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // html5ever is chatty about recoverable parse quirks
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("micro_schema_parser", level);

    builder.try_init()?;
    Ok(())
}
