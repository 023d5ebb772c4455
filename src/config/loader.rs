//! Configuration loader with YAML parsing and shape validation
//!
//! Loading is strict: every deviation from the documented shape is a fatal
//! [`SwapError::Configuration`] and the run produces no output.

use super::schema::SwapConfig;
use crate::domain::errors::SwapError;
use crate::domain::result::Result;
use crate::domain::ColumnPair;
use std::fs;
use std::path::Path;

/// Loads the swap configuration from a YAML file
///
/// This function:
/// 1. Reads the YAML file
/// 2. Parses it into [`SwapConfig`] (the file must be a mapping containing
///    the key `columns_to_swap`)
/// 3. Validates the pair list and produces the typed [`ColumnPair`] sequence,
///    in file order
///
/// # Arguments
///
/// * `path` - Path to the YAML configuration file
///
/// # Errors
///
/// Returns [`SwapError::Configuration`] if:
/// - The file does not exist or cannot be read
/// - The YAML is not a mapping with a `columns_to_swap` key
/// - The pair list fails shape validation
///
/// # Examples
///
/// ```no_run
/// use colswap::config::load_config;
///
/// let pairs = load_config("swap_config.yaml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<Vec<ColumnPair>> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(SwapError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        SwapError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Parse YAML
    let config: SwapConfig = serde_yaml::from_str(&contents)
        .map_err(|e| SwapError::Configuration(format!("Failed to parse YAML: {e}")))?;

    // Validate the pair list
    config.validate().map_err(|e| {
        SwapError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config("columns_to_swap:\n  - [age, city]\n");
        let pairs = load_config(file.path()).unwrap();
        assert_eq!(pairs, vec![ColumnPair::new("age", "city")]);
    }

    #[test]
    fn test_load_config_ignores_extra_keys() {
        let file = write_config("version: 3\ncolumns_to_swap:\n  - [age, city]\nnotes: ok\n");
        let pairs = load_config(file.path()).unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/swap_config.yaml").unwrap_err();
        assert!(matches!(err, SwapError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_config_not_a_mapping() {
        let file = write_config("just a scalar\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, SwapError::Configuration(_)));
    }

    #[test]
    fn test_config_missing_key() {
        let file = write_config("other_key: [a, b]\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("columns_to_swap"));
    }

    #[test]
    fn test_config_pairs_not_a_sequence() {
        let file = write_config("columns_to_swap: \"age,city\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, SwapError::Configuration(_)));
        assert!(err.to_string().contains("validation failed"));
    }
}
