//! Tabular data model
//!
//! This module provides the in-memory [`Table`] the engine mutates and the
//! [`ColumnPair`] swap target. A table is an ordered sequence of named
//! columns, each an ordered sequence of cell values aligned by row index;
//! every column has the same length. Cells are plain strings: output is
//! always CSV, so value fidelity reduces to text fidelity.

use crate::domain::errors::SwapError;
use crate::domain::result::Result;
use std::fmt;

/// A named column of cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, unique within a table
    pub name: String,
    /// Cell values, one per row
    pub values: Vec<String>,
}

impl Column {
    /// Creates a new column
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// An ordered pair of column names configured for a swap
///
/// The order matters: for a pair `(left, right)` the engine assigns
/// `right := original left` and `left := permuted original right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    /// First column of the pair
    pub left: String,
    /// Second column of the pair
    pub right: String,
}

impl ColumnPair {
    /// Creates a new column pair
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl fmt::Display for ColumnPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}')", self.left, self.right)
    }
}

/// In-memory tabular dataset
///
/// Columns keep the order they were loaded in; the writer serializes them in
/// that same order. The engine mutates a table in place through
/// [`set_values`](Table::set_values); the row count never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from a header row and data rows
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Table`] if any row's field count differs from the
    /// header's, or if two columns share a name.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (name_idx, name) in headers.iter().enumerate() {
            if headers[..name_idx].contains(name) {
                return Err(SwapError::Table(format!(
                    "duplicate column name '{name}'"
                )));
            }
        }

        let width = headers.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SwapError::Table(format!(
                    "row {} has {} fields, expected {}",
                    row_idx + 1,
                    row.len(),
                    width
                )));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        Ok(Self { columns })
    }

    /// Number of data rows
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Whether a column with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Cell values of a column, in row order
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Replaces a column's values in place, keeping its position
    ///
    /// A no-op when the column does not exist; callers check existence first.
    pub fn set_values(&mut self, name: &str, values: Vec<String>) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.name == name) {
            column.values = values;
        }
    }

    /// Iterates rows as cell slices in column order, for serialization
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &str>> {
        (0..self.num_rows()).map(move |row_idx| {
            self.columns
                .iter()
                .map(move |c| c.values[row_idx].as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_rows(
            vec!["name".into(), "age".into(), "city".into()],
            vec![
                vec!["alice".into(), "34".into(), "Lyon".into()],
                vec!["bob".into(), "58".into(), "Oslo".into()],
                vec!["carol".into(), "21".into(), "Kyoto".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows_shape() {
        let table = sample_table();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["name", "age", "city"]
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Table::from_rows(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()], vec!["3".into()]],
        );
        assert!(matches!(result, Err(SwapError::Table(_))));
    }

    #[test]
    fn test_from_rows_rejects_duplicate_names() {
        let result = Table::from_rows(vec!["a".into(), "a".into()], vec![]);
        assert!(matches!(result, Err(SwapError::Table(_))));
    }

    #[test]
    fn test_values_lookup() {
        let table = sample_table();
        assert_eq!(table.values("age").unwrap(), &["34", "58", "21"]);
        assert!(table.values("zipcode").is_none());
        assert!(table.contains("city"));
        assert!(!table.contains("zipcode"));
    }

    #[test]
    fn test_set_values_keeps_position() {
        let mut table = sample_table();
        table.set_values("age", vec!["1".into(), "2".into(), "3".into()]);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["name", "age", "city"]
        );
        assert_eq!(table.values("age").unwrap(), &["1", "2", "3"]);
    }

    #[test]
    fn test_set_values_missing_column_is_noop() {
        let mut table = sample_table();
        let before = table.clone();
        table.set_values("zipcode", vec!["x".into()]);
        assert_eq!(table, before);
    }

    #[test]
    fn test_rows_iterate_in_column_order() {
        let table = sample_table();
        let rows: Vec<Vec<&str>> = table.rows().map(|r| r.collect()).collect();
        assert_eq!(rows[0], vec!["alice", "34", "Lyon"]);
        assert_eq!(rows[2], vec!["carol", "21", "Kyoto"]);
    }

    #[test]
    fn test_empty_table_counts() {
        let table = Table::from_rows(vec![], vec![]).unwrap();
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_columns(), 0);
    }

    #[test]
    fn test_column_pair_display() {
        let pair = ColumnPair::new("age", "city");
        assert_eq!(pair.to_string(), "('age', 'city')");
    }
}
