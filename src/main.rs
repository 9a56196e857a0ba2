//! WB Data Converter
//!
//! Converts `fooditems.csv` and `allexercises.csv` in the working directory
//! into `fooditems.json` and `WB/allexercises.json`.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use wb_convert::{build_info, driver, ConvertConfig};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wb_convert=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ConvertConfig::default();

    match driver::run(&config) {
        Ok(summary) => {
            tracing::info!(
                converted = summary.converted_rows(),
                skipped = summary.skipped_rows(),
                finished_at = %summary.finished_at.format("%Y-%m-%dT%H:%M:%SZ"),
                "Run summary"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
