//! Conversion driver
//!
//! Prepares the output directory, then runs the food item and exercise
//! conversions in that order. The first fatal error stops the run.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ConvertConfig;
use crate::convert::{convert_exercises, convert_food_items, ConversionSummary};
use crate::error::{ConvertError, ConvertResult};

/// Results of a full run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub food_items: ConversionSummary,
    pub exercises: ConversionSummary,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn converted_rows(&self) -> usize {
        self.food_items.converted + self.exercises.converted
    }

    pub fn skipped_rows(&self) -> usize {
        self.food_items.skipped.len() + self.exercises.skipped.len()
    }
}

/// Create the output directory if it does not exist yet
pub fn prepare_output_dir(config: &ConvertConfig) -> ConvertResult<PathBuf> {
    let dir = config.resolve(&config.output_dir);
    fs::create_dir_all(&dir).map_err(|e| ConvertError::io(&dir, e))?;
    tracing::debug!("Output directory ready: {}", dir.display());
    Ok(dir)
}

/// Run both conversions
pub fn run(config: &ConvertConfig) -> ConvertResult<RunSummary> {
    prepare_output_dir(config)?;

    let food_items = convert_food_items(config)?;
    let exercises = convert_exercises(config)?;

    tracing::info!("Conversion completed successfully!");

    Ok(RunSummary {
        food_items,
        exercises,
        finished_at: Utc::now(),
    })
}
