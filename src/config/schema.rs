//! Configuration schema types
//!
//! This module defines the structure the YAML configuration file maps to,
//! plus the shape validation that turns the raw pair list into typed
//! [`ColumnPair`] values.

use crate::domain::ColumnPair;
use serde::{Deserialize, Serialize};

/// Raw swap configuration as it appears in the YAML file
///
/// `columns_to_swap` is kept as a raw YAML value so that shape errors (a
/// string where a sequence is expected, a three-element pair, a non-string
/// name) can be reported one by one with the offending entry named, instead
/// of as a single opaque deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    /// The configured column pairs, validated by [`SwapConfig::validate`]
    pub columns_to_swap: serde_yaml::Value,
}

impl SwapConfig {
    /// Validates the raw pair list and produces the typed configuration
    ///
    /// # Errors
    ///
    /// Returns a message describing the first violation:
    /// - `columns_to_swap` is not a sequence
    /// - an entry is not a sequence of exactly two elements
    /// - a column name is not a string
    /// - a pair names the same column twice
    pub fn validate(&self) -> Result<Vec<ColumnPair>, String> {
        let entries = self
            .columns_to_swap
            .as_sequence()
            .ok_or_else(|| "'columns_to_swap' must be a sequence of column pairs".to_string())?;

        let mut pairs = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let entry_seq = entry.as_sequence().ok_or_else(|| {
                format!(
                    "entry {} of 'columns_to_swap' must be a sequence of two column names",
                    idx + 1
                )
            })?;

            if entry_seq.len() != 2 {
                return Err(format!(
                    "entry {} of 'columns_to_swap' has {} elements, expected 2",
                    idx + 1,
                    entry_seq.len()
                ));
            }

            let mut names = entry_seq.iter().map(|value| {
                value.as_str().map(str::to_string).ok_or_else(|| {
                    format!(
                        "entry {} of 'columns_to_swap' contains a non-string column name",
                        idx + 1
                    )
                })
            });
            // len() == 2 checked above
            let left = names.next().unwrap_or(Err(String::new()))?;
            let right = names.next().unwrap_or(Err(String::new()))?;

            if left == right {
                return Err(format!(
                    "entry {} of 'columns_to_swap' names the same column '{}' twice",
                    idx + 1,
                    left
                ));
            }

            pairs.push(ColumnPair::new(left, right));
        }

        Ok(pairs)
    }
}
