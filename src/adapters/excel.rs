//! Excel spreadsheet reader
//!
//! Reads the first worksheet of an `.xlsx` or `.xls` workbook. The first row
//! becomes the header row; every cell is rendered to its display text, since
//! the output side is always CSV.

use crate::domain::errors::SwapError;
use crate::domain::result::Result;
use crate::domain::Table;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Reads the first worksheet of a workbook into a [`Table`]
///
/// # Errors
///
/// Returns [`SwapError::Spreadsheet`] if the workbook cannot be opened, has
/// no worksheets, or the sheet fails to parse.
pub fn read_excel(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        SwapError::Spreadsheet(format!("No worksheets in '{}'", path.display()))
    })??;

    let mut sheet_rows = range.rows();

    let headers: Vec<String> = match sheet_rows.next() {
        Some(header_row) => header_row.iter().map(render_cell).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<String>> = sheet_rows
        .map(|row| row.iter().map(render_cell).collect())
        .collect();

    Table::from_rows(headers, rows)
}

/// Renders a cell to the text the CSV output will carry
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
