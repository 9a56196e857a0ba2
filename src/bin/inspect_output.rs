//! Load the converted documents and summarize them
//! Usage: cargo run --bin inspect_output -- [dir]

use std::collections::BTreeSet;

use wb_convert::build_info::BuildInfo;
use wb_convert::convert::{load_exercises, load_food_items};
use wb_convert::ConvertConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let dir = args.get(1).map(|s| s.as_str()).unwrap_or(".");
    let config = ConvertConfig::rooted_at(dir);

    println!("{}", serde_json::to_string_pretty(&BuildInfo::current())?);

    let food_path = config.resolve(&config.food_output);
    let food_items = load_food_items(&food_path)?;
    println!("Loaded {} food items from {}", food_items.len(), food_path.display());

    let categories: BTreeSet<&str> = food_items.iter().map(|f| f.category.as_str()).collect();
    println!("  {} categories", categories.len());
    for category in &categories {
        let count = food_items.iter().filter(|f| f.category == *category).count();
        println!("    {}: {}", category, count);
    }

    let exercise_path = config.resolve(&config.exercise_output);
    let exercises = load_exercises(&exercise_path)?;
    println!("Loaded {} exercises from {}", exercises.len(), exercise_path.display());

    let difficulties: BTreeSet<&str> = exercises.iter().map(|e| e.difficulty.as_str()).collect();
    let categories: BTreeSet<&str> = exercises.iter().map(|e| e.category.as_str()).collect();
    println!(
        "  {} difficulty levels, {} categories",
        difficulties.len(),
        categories.len()
    );

    Ok(())
}
