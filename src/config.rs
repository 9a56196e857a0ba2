//! Converter configuration
//!
//! The file layout is fixed; only the base directory moves.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What to do with a row that cannot be mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Log the row and continue with the next one
    Skip,
    /// Fail the whole conversion on the first bad row
    Abort,
}

/// Input and output locations for both conversions
#[derive(Debug, Clone, Serialize)]
pub struct ConvertConfig {
    pub base_dir: PathBuf,
    pub output_dir: PathBuf,
    pub food_input: PathBuf,
    pub food_output: PathBuf,
    pub exercise_input: PathBuf,
    pub exercise_output: PathBuf,
    pub exercise_row_policy: RowPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            output_dir: PathBuf::from("WB"),
            food_input: PathBuf::from("fooditems.csv"),
            food_output: PathBuf::from("fooditems.json"),
            exercise_input: PathBuf::from("allexercises.csv"),
            exercise_output: Path::new("WB").join("allexercises.json"),
            exercise_row_policy: RowPolicy::Abort,
        }
    }
}

impl ConvertConfig {
    /// Default layout under `dir`
    pub fn rooted_at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            base_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_exercise_row_policy(mut self, policy: RowPolicy) -> Self {
        self.exercise_row_policy = policy;
        self
    }

    /// Resolve a configured path against the base directory
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.base_dir.join(relative)
    }
}
