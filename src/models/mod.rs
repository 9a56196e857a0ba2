//! Data models
//!
//! Flat records written to the app's JSON documents.

mod column;
mod exercise;
mod food_item;

pub use column::{Column, TableRecord};
pub use exercise::Exercise;
pub use food_item::FoodItem;
