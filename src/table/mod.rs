//! Tabular input module
//!
//! Reads delimited files into header-keyed rows.

pub mod reader;
pub mod row;

pub use reader::{parse_reader, parse_table, read_table, Encoding, Table, UTF8_BOM};
pub use row::Row;
