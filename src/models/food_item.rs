//! Food Item model
//!
//! One row of the nutrition table. Every value stays text; nutrient
//! amounts are never parsed.

use serde::{Deserialize, Serialize};

use crate::table::Row;
use super::{Column, TableRecord};

const CATEGORY: Column = Column::text("Category");
const FOOD: Column = Column::text("Food");
const MEASURE: Column = Column::text("Measure");
const GRAMS: Column = Column::text("Grams");
const CALORIES: Column = Column::numeric("Calories");
const PROTEIN: Column = Column::numeric("Protein");
const CARB: Column = Column::numeric("Carb");
const FIBER: Column = Column::numeric("Fiber");
const FAT: Column = Column::numeric("Fat");
const SATURATED_FAT: Column = Column::numeric("Saturated fat");

static COLUMNS: [Column; 10] = [
    CATEGORY,
    FOOD,
    MEASURE,
    GRAMS,
    CALORIES,
    PROTEIN,
    CARB,
    FIBER,
    FAT,
    SATURATED_FAT,
];

/// A food item with nutritional information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub category: String,
    pub food_item: String,
    pub measure: String,
    pub grams: String,
    pub calories: String,
    pub protein: String,
    pub carb: String,
    pub fiber: String,
    pub fat: String,
    pub saturated_fat: String,
}

impl TableRecord for FoodItem {
    const LABEL: &'static str = "food items";

    fn columns() -> &'static [Column] {
        &COLUMNS
    }

    fn from_row(row: &Row) -> Self {
        Self {
            category: CATEGORY.read(row),
            food_item: FOOD.read(row),
            measure: MEASURE.read(row),
            grams: GRAMS.read(row),
            calories: CALORIES.read(row),
            protein: PROTEIN.read(row),
            carb: CARB.read(row),
            fiber: FIBER.read(row),
            fat: FAT.read(row),
            saturated_fat: SATURATED_FAT.read(row),
        }
    }
}
