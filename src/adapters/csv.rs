//! CSV reader and writer
//!
//! Reading takes the header row from the first record and requires every
//! data row to have the same field count (the `csv` reader enforces this).
//! Writing emits the header row followed by the data rows, columns in table
//! order, no row index.

use crate::domain::result::Result;
use crate::domain::Table;
use std::path::Path;

/// Reads a CSV file into a [`Table`]
///
/// # Errors
///
/// Returns [`SwapError::Csv`](crate::domain::SwapError::Csv) if the file
/// cannot be opened or a record fails to parse, and
/// [`SwapError::Table`](crate::domain::SwapError::Table) on duplicate
/// column names.
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::from_rows(headers, rows)
}

/// Writes a [`Table`] to a CSV file
///
/// The file is created (or truncated) only when this is called; callers run
/// the full transformation first so a failed run never leaves a partial
/// output file behind.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SwapError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_csv() {
        let file = write_file("name,age,city\nalice,34,Lyon\nbob,58,Oslo\n");
        let table = read_csv(file.path()).unwrap();

        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["name", "age", "city"]
        );
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.values("city").unwrap(), &["Lyon", "Oslo"]);
    }

    #[test]
    fn test_read_csv_quoted_fields() {
        let file = write_file("name,city\n\"doe, jane\",Lyon\n");
        let table = read_csv(file.path()).unwrap();
        assert_eq!(table.values("name").unwrap(), &["doe, jane"]);
    }

    #[test]
    fn test_read_csv_ragged_row_is_error() {
        let file = write_file("a,b\n1,2\n3\n");
        let err = read_csv(file.path()).unwrap_err();
        assert!(matches!(err, SwapError::Csv(_)));
    }

    #[test]
    fn test_write_csv_roundtrip() {
        let table = Table::from_rows(
            vec!["name".into(), "age".into()],
            vec![
                vec!["alice".into(), "34".into()],
                vec!["bob".into(), "58".into()],
            ],
        )
        .unwrap();

        let out = NamedTempFile::new().unwrap();
        write_csv(&table, out.path()).unwrap();

        let written = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(written, "name,age\nalice,34\nbob,58\n");
    }

    #[test]
    fn test_write_csv_preserves_column_order() {
        let table = Table::from_rows(
            vec!["z".into(), "a".into(), "m".into()],
            vec![vec!["1".into(), "2".into(), "3".into()]],
        )
        .unwrap();

        let out = NamedTempFile::new().unwrap();
        write_csv(&table, out.path()).unwrap();

        let written = std::fs::read_to_string(out.path()).unwrap();
        assert!(written.starts_with("z,a,m\n"));
    }
}
