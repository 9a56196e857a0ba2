//! Delimited table reader
//!
//! Reads a whole CSV file into memory, decodes it and splits it into
//! header-keyed rows. Each row is either a `Row` or the `RowError` the CSV
//! reader raised for it; the caller decides what to do with failures.
//! Ragged rows are not failures.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{ConvertError, ConvertResult, RowError};
use super::Row;

/// UTF-8 byte-order marker
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// How to decode an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Plain UTF-8; a leading BOM is kept as content
    Utf8,
    /// UTF-8 with an optional leading BOM that is stripped
    Utf8Sig,
}

impl Encoding {
    /// Decode raw bytes into text
    pub fn decode(&self, mut bytes: Vec<u8>) -> Result<String, std::string::FromUtf8Error> {
        if *self == Encoding::Utf8Sig && bytes.starts_with(UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }
        String::from_utf8(bytes)
    }
}

/// A parsed table: header names plus one outcome per data row, in file order
#[derive(Debug)]
pub struct Table {
    pub headers: StringRecord,
    pub rows: Vec<Result<Row, RowError>>,
}

impl Table {
    /// Header names that are not present in this table
    pub fn missing_columns<'a>(&self, columns: &[&'a str]) -> Vec<&'a str> {
        columns
            .iter()
            .copied()
            .filter(|col| !self.headers.iter().any(|h| h == *col))
            .collect()
    }
}

/// Read and parse a table from disk.
///
/// The file is fully read and closed before parsing starts.
pub fn read_table(path: &Path, encoding: Encoding) -> ConvertResult<Table> {
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    let content = encoding.decode(bytes).map_err(|e| ConvertError::Utf8 {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_table(&content).map_err(|e| ConvertError::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse CSV text with a header row
pub fn parse_table(content: &str) -> Result<Table, csv::Error> {
    parse_reader(content.as_bytes())
}

/// Parse CSV with a header row from any reader.
///
/// Only an unreadable header row fails the whole table.
pub fn parse_reader<R: Read>(source: R) -> Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // rows may be shorter or longer than the header
        .from_reader(source);

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // Header is line 1; used only when the reader gives no position
        let fallback_line = index as u64 + 2;

        let outcome = match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                Ok(Row::from_record(&headers, &record, line))
            }
            Err(e) => Err(RowError {
                line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                fields: Vec::new(),
                reason: e.to_string(),
            }),
        };
        rows.push(outcome);
    }

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_sig_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"Category,Food\n");
        let text = Encoding::Utf8Sig.decode(bytes).unwrap();
        assert_eq!(text, "Category,Food\n");
    }

    #[test]
    fn test_utf8_sig_without_bom_is_unchanged() {
        let text = Encoding::Utf8Sig.decode(b"Category\n".to_vec()).unwrap();
        assert_eq!(text, "Category\n");
    }

    #[test]
    fn test_plain_utf8_keeps_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"Dificulty\n");
        let text = Encoding::Utf8.decode(bytes).unwrap();
        assert_eq!(text, "\u{feff}Dificulty\n");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(Encoding::Utf8.decode(vec![0x66, 0xff, 0x6f]).is_err());
    }

    #[test]
    fn test_parse_table_preserves_order_and_lines() {
        let table = parse_table("Food,Grams\nMilk,244\nEgg,50\n").unwrap();
        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.rows.len(), 2);

        let first = table.rows[0].as_ref().unwrap();
        let second = table.rows[1].as_ref().unwrap();
        assert_eq!(first.get("Food"), Some("Milk"));
        assert_eq!(first.line(), 2);
        assert_eq!(second.get("Food"), Some("Egg"));
        assert_eq!(second.line(), 3);
    }

    #[test]
    fn test_parse_table_accepts_ragged_rows() {
        let table = parse_table("Food,Grams\nMilk\nEgg,50,extra,\n").unwrap();
        assert_eq!(table.rows.len(), 2);

        let short = table.rows[0].as_ref().unwrap();
        assert_eq!(short.get("Food"), Some("Milk"));
        assert_eq!(short.get("Grams"), None);

        let long = table.rows[1].as_ref().unwrap();
        assert_eq!(long.get("Grams"), Some("50"));
    }

    #[test]
    fn test_parse_reader_reports_undecodable_record_and_continues() {
        let bytes: &[u8] = b"Food,Grams\nMilk,244\n\xff\xfe,1\nEgg,50\n";

        let table = parse_reader(bytes).unwrap();

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].as_ref().unwrap().get("Food"), Some("Milk"));
        let err = table.rows[1].as_ref().unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.fields.is_empty());
        assert_eq!(table.rows[2].as_ref().unwrap().get("Food"), Some("Egg"));
    }

    #[test]
    fn test_parse_table_handles_quoted_fields() {
        let table = parse_table("Food,Measure\n\"Milk, skim\",\"1 cup\"\n").unwrap();
        let row = table.rows[0].as_ref().unwrap();
        assert_eq!(row.get("Food"), Some("Milk, skim"));
    }

    #[test]
    fn test_parse_table_empty_input() {
        let table = parse_table("").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_missing_columns() {
        let table = parse_table("Category,Food\n").unwrap();
        assert_eq!(table.missing_columns(&["Food", "Fiber"]), vec!["Fiber"]);
    }

    #[test]
    fn test_read_table_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table(&dir.path().join("nope.csv"), Encoding::Utf8).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
