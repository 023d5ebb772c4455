//! Table readers and the CSV writer
//!
//! The data file's extension selects the reader: `.csv` goes through the CSV
//! reader, `.xlsx` and `.xls` through the spreadsheet reader, and anything
//! else is a fatal unsupported-format error. Output is always CSV regardless
//! of the input format.

pub mod csv;
pub mod excel;

use crate::domain::errors::SwapError;
use crate::domain::result::Result;
use crate::domain::Table;
use std::path::Path;

/// Supported input formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma-separated values
    Csv,
    /// Office Open XML spreadsheet
    Xlsx,
    /// Legacy Excel spreadsheet
    Xls,
}

impl DataFormat {
    /// Determines the format from a path's extension, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnsupportedFormat`] for any extension other than
    /// `csv`, `xlsx`, or `xls`, including a missing extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(DataFormat::Csv),
            "xlsx" => Ok(DataFormat::Xlsx),
            "xls" => Ok(DataFormat::Xls),
            _ => Err(SwapError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads the data file into a [`Table`], dispatching on the extension
///
/// # Errors
///
/// - [`SwapError::UnsupportedFormat`] for an unrecognized extension
/// - [`SwapError::Io`] if the file does not exist
/// - [`SwapError::Csv`] / [`SwapError::Spreadsheet`] on parse failures
/// - [`SwapError::EmptyData`] if the file parses to zero rows or zero columns
pub fn load_table(path: &Path) -> Result<Table> {
    let format = DataFormat::from_path(path)?;

    if !path.exists() {
        return Err(SwapError::Io(format!(
            "Data file not found: {}",
            path.display()
        )));
    }

    let table = match format {
        DataFormat::Csv => csv::read_csv(path)?,
        DataFormat::Xlsx | DataFormat::Xls => excel::read_excel(path)?,
    };

    if table.num_rows() == 0 || table.num_columns() == 0 {
        return Err(SwapError::EmptyData(path.display().to_string()));
    }

    Ok(table)
}

/// Writes the table to the destination path as CSV
///
/// Always CSV, whatever format the table was loaded from. No row index
/// column is emitted.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    csv::write_csv(table, path)
}
