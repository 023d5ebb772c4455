//! Logging and observability
//!
//! Console-only structured logging built on `tracing`. The level comes from
//! the CLI as a string; an unrecognized value never aborts the run, it falls
//! back to INFO with a warning.
//!
//! # Example
//!
//! ```no_run
//! use colswap::logging::init_logging;
//!
//! init_logging("debug").expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::warn!(column = "zipcode", "Column not found");
//! ```

use crate::domain::errors::SwapError;
use crate::domain::result::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Sets up a console subscriber filtered to the requested level. The
/// `RUST_LOG` environment variable, when set, takes precedence over the CLI
/// level. Python-style level names (`WARNING`, `CRITICAL`) are accepted as
/// aliases for their tracing counterparts.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let parsed = parse_log_level(log_level_str);
    let level = parsed.unwrap_or(Level::INFO);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("colswap={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| SwapError::Other(format!("Failed to initialize logging: {e}")))?;

    if parsed.is_none() {
        tracing::warn!(
            log_level = log_level_str,
            "Invalid log level, using INFO instead"
        );
    }

    Ok(())
}

/// Parse a log level from its CLI string, case-insensitively
fn parse_log_level(level_str: &str) -> Option<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" | "critical" => Some(Level::ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("INFO", Level::INFO; "info uppercase")]
    #[test_case("debug", Level::DEBUG; "debug lowercase")]
    #[test_case("WARNING", Level::WARN; "python warning")]
    #[test_case("warn", Level::WARN; "warn")]
    #[test_case("CRITICAL", Level::ERROR; "python critical")]
    #[test_case("Trace", Level::TRACE; "mixed case")]
    fn test_parse_log_level(input: &str, expected: Level) {
        assert_eq!(parse_log_level(input), Some(expected));
    }

    #[test]
    fn test_parse_unknown_level() {
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }
}
