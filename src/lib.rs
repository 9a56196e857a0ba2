//! WB Data Converter Library
//!
//! Converts the WB app's nutrition and exercise CSV tables into the JSON
//! documents bundled with the app.

pub mod build_info;
pub mod config;
pub mod convert;
pub mod driver;
pub mod error;
pub mod models;
pub mod table;

pub use config::{ConvertConfig, RowPolicy};
pub use error::{ConvertError, ConvertResult, RowError};
