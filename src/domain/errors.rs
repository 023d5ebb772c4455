//! Domain error types
//!
//! This module defines the error hierarchy for Colswap. All errors are
//! domain-specific and don't expose third-party types in their variants.

use thiserror::Error;

/// Main Colswap error type
///
/// This is the primary error type used throughout the application. Every
/// variant is fatal: the run logs the error and produces no output. The one
/// recoverable condition, a configured pair naming a column absent from the
/// table, is handled inside the engine as a per-pair skip and never surfaces
/// here.
#[derive(Debug, Error)]
pub enum SwapError {
    /// Configuration-related errors (unreadable, unparsable, or invalid shape)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Data file extension is not one of csv, xlsx, xls
    #[error("Unsupported file format '{0}'. Only CSV and Excel files are supported")]
    UnsupportedFormat(String),

    /// Data file parsed to zero rows or zero columns
    #[error("Data file '{0}' is empty")]
    EmptyData(String),

    /// Structural table errors (ragged rows and the like)
    #[error("Table error: {0}")]
    Table(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Spreadsheet read errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SwapError {
    fn from(err: std::io::Error) -> Self {
        SwapError::Io(err.to_string())
    }
}

// Conversion from csv errors
impl From<csv::Error> for SwapError {
    fn from(err: csv::Error) -> Self {
        SwapError::Csv(err.to_string())
    }
}

// Conversion from calamine errors
impl From<calamine::Error> for SwapError {
    fn from(err: calamine::Error) -> Self {
        SwapError::Spreadsheet(err.to_string())
    }
}

// Conversion from yaml parse errors
impl From<serde_yaml::Error> for SwapError {
    fn from(err: serde_yaml::Error) -> Self {
        SwapError::Configuration(format!("YAML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_error_display() {
        let err = SwapError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = SwapError::UnsupportedFormat(".txt".to_string());
        assert!(err.to_string().contains(".txt"));
        assert!(err.to_string().contains("Only CSV and Excel"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let swap_err: SwapError = io_err.into();
        assert!(matches!(swap_err, SwapError::Io(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{invalid: yaml: here")
            .unwrap_err();
        let swap_err: SwapError = yaml_err.into();
        assert!(matches!(swap_err, SwapError::Configuration(_)));
        assert!(swap_err.to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_swap_error_implements_std_error() {
        let err = SwapError::EmptyData("data.csv".to_string());
        // Verify it implements std::error::Error
        let _: &dyn std::error::Error = &err;
    }
}
