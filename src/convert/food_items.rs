//! Food item conversion
//!
//! `fooditems.csv` may start with a byte-order marker. Rows the CSV reader
//! rejects are logged and skipped.

use std::path::Path;

use crate::config::{ConvertConfig, RowPolicy};
use crate::error::ConvertResult;
use crate::models::FoodItem;
use crate::table::Encoding;
use super::{convert_table, read_json, ConversionSummary};

/// Convert the nutrition table into the food item document
pub fn convert_food_items(config: &ConvertConfig) -> ConvertResult<ConversionSummary> {
    convert_table::<FoodItem>(
        &config.resolve(&config.food_input),
        &config.resolve(&config.food_output),
        Encoding::Utf8Sig,
        RowPolicy::Skip,
    )
}

/// Load a written food item document
pub fn load_food_items(path: &Path) -> ConvertResult<Vec<FoodItem>> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::UTF8_BOM;
    use std::fs;

    const HEADER: &str = "Category,Food,Measure,Grams,Calories,Protein,Carb,Fiber,Fat,Saturated fat";

    fn write_input(config: &ConvertConfig, bytes: &[u8]) {
        fs::write(config.resolve(&config.food_input), bytes).unwrap();
    }

    #[test]
    fn test_converts_nutrition_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::rooted_at(dir.path());
        write_input(
            &config,
            format!(
                "{}\nDairy,Milk,1 cup,244,150,8,12,0,8,5\nFruits,Crème de pêche,1 oz,28,90,0,12,0,0,0\n",
                HEADER
            )
            .as_bytes(),
        );

        let summary = convert_food_items(&config).unwrap();
        assert_eq!(summary.converted, 2);
        assert!(summary.skipped.is_empty());

        let output = config.resolve(&config.food_output);
        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("Crème de pêche"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value[0],
            serde_json::json!({
                "category": "Dairy",
                "foodItem": "Milk",
                "measure": "1 cup",
                "grams": "244",
                "calories": "150",
                "protein": "8",
                "carb": "12",
                "fiber": "0",
                "fat": "8",
                "saturatedFat": "5"
            })
        );
    }

    #[test]
    fn test_strips_byte_order_marker() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::rooted_at(dir.path());
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(format!("{}\nDairy,Milk,1 cup,244,150,8,12,0,8,5\n", HEADER).as_bytes());
        write_input(&config, &bytes);

        convert_food_items(&config).unwrap();

        let items = load_food_items(&config.resolve(&config.food_output)).unwrap();
        assert_eq!(items[0].category, "Dairy");
    }

    #[test]
    fn test_missing_fiber_column() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::rooted_at(dir.path());
        write_input(
            &config,
            b"Category,Food,Measure,Grams,Calories,Protein,Carb,Fat,Saturated fat\n\
              Dairy,Milk,1 cup,244,150,8,12,8,5\n",
        );

        convert_food_items(&config).unwrap();

        let items = load_food_items(&config.resolve(&config.food_output)).unwrap();
        assert_eq!(items[0].fiber, "0");
    }

    #[test]
    fn test_ragged_rows_are_kept_in_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::rooted_at(dir.path());
        write_input(
            &config,
            format!(
                "{}\nDairy,Milk,1 cup,244,150,8,12,0,8,5,\nDairy,Cheese,1 oz\nMeat,Bacon,2 slices,16,95,4,1,0,8,7\n",
                HEADER
            )
            .as_bytes(),
        );

        let summary = convert_food_items(&config).unwrap();
        assert_eq!(summary.converted, 3);
        assert!(summary.skipped.is_empty());

        let items = load_food_items(&summary.output).unwrap();
        assert_eq!(items[0].saturated_fat, "5");
        assert_eq!(items[1].food_item, "Cheese");
        assert_eq!(items[1].measure, "1 oz");
        assert_eq!(items[1].grams, "");
        assert_eq!(items[1].calories, "0");
        assert_eq!(items[1].saturated_fat, "0");
        assert_eq!(items[2].food_item, "Bacon");
    }
}
