//! Table-to-document conversion
//!
//! Shared pipeline behind the food item and exercise converters: read the
//! whole table, map each row to a record, then write the document once.

pub mod exercises;
pub mod food_items;
pub mod output;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::RowPolicy;
use crate::error::{ConvertError, ConvertResult, RowError};
use crate::models::TableRecord;
use crate::table::{read_table, Encoding, Table};

pub use exercises::{convert_exercises, load_exercises};
pub use food_items::{convert_food_items, load_food_items};
pub use output::{read_json, write_json};

/// Outcome of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub converted: usize,
    pub skipped: Vec<RowError>,
    pub output: PathBuf,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Map table rows to records, applying `policy` to rows the CSV reader
/// rejected. Records keep input order with no gaps.
pub fn collect_records<T: TableRecord>(
    table: Table,
    input: &Path,
    policy: RowPolicy,
) -> ConvertResult<(Vec<T>, Vec<RowError>)> {
    let mut records: Vec<T> = Vec::with_capacity(table.rows.len());
    let mut skipped = Vec::new();

    for outcome in table.rows {
        match outcome {
            Ok(row) => records.push(T::from_row(&row)),
            Err(row_error) => match policy {
                RowPolicy::Skip => {
                    tracing::warn!(
                        line = row_error.line,
                        row = ?row_error.fields,
                        "Error processing row, skipping: {}",
                        row_error.reason
                    );
                    skipped.push(row_error);
                }
                RowPolicy::Abort => {
                    return Err(ConvertError::Row {
                        path: input.to_path_buf(),
                        row: row_error,
                    });
                }
            },
        }
    }

    Ok((records, skipped))
}

/// Convert one CSV table into a JSON document of `T` records.
///
/// Under `RowPolicy::Abort` the first rejected row fails the conversion
/// before anything is written.
pub fn convert_table<T>(
    input: &Path,
    output: &Path,
    encoding: Encoding,
    policy: RowPolicy,
) -> ConvertResult<ConversionSummary>
where
    T: TableRecord + Serialize,
{
    let table = read_table(input, encoding)?;

    for column in table.missing_columns(&T::column_names()) {
        tracing::warn!(
            "Column '{}' not found in {}, using default value",
            column,
            file_label(input)
        );
    }

    let (records, skipped) = collect_records::<T>(table, input, policy)?;

    write_json(output, &records)?;

    tracing::info!(
        "Converted {} {} to {}",
        records.len(),
        T::LABEL,
        file_label(output)
    );

    Ok(ConversionSummary {
        converted: records.len(),
        skipped,
        output: output.to_path_buf(),
    })
}
