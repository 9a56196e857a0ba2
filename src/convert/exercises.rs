//! Exercise catalog conversion

use std::path::Path;

use crate::config::ConvertConfig;
use crate::error::ConvertResult;
use crate::models::Exercise;
use crate::table::Encoding;
use super::{convert_table, read_json, ConversionSummary};

/// Convert the exercise catalog into the exercise document.
///
/// The output directory must already exist.
pub fn convert_exercises(config: &ConvertConfig) -> ConvertResult<ConversionSummary> {
    convert_table::<Exercise>(
        &config.resolve(&config.exercise_input),
        &config.resolve(&config.exercise_output),
        Encoding::Utf8,
        config.exercise_row_policy,
    )
}

/// Load a written exercise document
pub fn load_exercises(path: &Path) -> ConvertResult<Vec<Exercise>> {
    read_json(path)
}
