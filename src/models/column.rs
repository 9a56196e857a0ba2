//! Source column definitions
//!
//! Each output field is read from one named input column, with a fixed
//! default used when the column is absent from the header.

use crate::table::Row;

/// An input column and the value used when it is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub default: &'static str,
}

impl Column {
    /// A text column, defaulting to the empty string
    pub const fn text(name: &'static str) -> Self {
        Self { name, default: "" }
    }

    /// A number-as-text column, defaulting to "0"
    pub const fn numeric(name: &'static str) -> Self {
        Self { name, default: "0" }
    }

    /// Read this column from a row, applying the default
    pub fn read(&self, row: &Row) -> String {
        row.get_or(self.name, self.default).to_string()
    }
}

/// A record type built from one table row
pub trait TableRecord: Sized {
    /// Plural noun used in progress messages
    const LABEL: &'static str;

    /// The default table: every column this record reads
    fn columns() -> &'static [Column];

    fn from_row(row: &Row) -> Self;

    fn column_names() -> Vec<&'static str> {
        Self::columns().iter().map(|c| c.name).collect()
    }
}
