//! Header-keyed row
//!
//! A row is a mapping from column name to raw text value.

use std::collections::HashMap;

use csv::StringRecord;

/// One data row of a delimited table, keyed by header name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: u64,
    values: HashMap<String, String>,
}

impl Row {
    /// Build a row from a record.
    ///
    /// Fields past the last header are dropped. Headers past the last field
    /// are left out, so lookups on them fall back to the column default.
    /// Duplicate header names keep the right-most value.
    pub fn from_record(headers: &StringRecord, record: &StringRecord, line: u64) -> Self {
        let values = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self { line, values }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Value for `column`, or `default` when the column is absent
    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }
}
