//! Exercise model
//!
//! One row of the exercise catalog.

use serde::{Deserialize, Serialize};

use crate::table::Row;
use super::{Column, TableRecord};

// Misspelled in the source catalog; matched as-is
const DIFFICULTY: Column = Column::text("Dificulty");
const CATEGORY: Column = Column::text("Category");
const EXERCISE: Column = Column::text("Exercise");
const VISUAL_EXAMPLE: Column = Column::text("Visual Example");

static COLUMNS: [Column; 4] = [DIFFICULTY, CATEGORY, EXERCISE, VISUAL_EXAMPLE];

/// A catalog exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub difficulty: String,
    pub category: String,
    pub exercise: String,
    pub visual_example: String,
}

impl TableRecord for Exercise {
    const LABEL: &'static str = "exercises";

    fn columns() -> &'static [Column] {
        &COLUMNS
    }

    fn from_row(row: &Row) -> Self {
        Self {
            difficulty: DIFFICULTY.read(row),
            category: CATEGORY.read(row),
            exercise: EXERCISE.read(row),
            visual_example: VISUAL_EXAMPLE.read(row),
        }
    }
}
