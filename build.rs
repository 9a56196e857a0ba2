//! Build script for wb-convert
//!
//! Increments a build counter kept in OUT_DIR and embeds build metadata.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string()));
    let counter_path = out_dir.join("build_number.txt");

    let previous: u64 = fs::read_to_string(&counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    // A failed write only means the counter restarts next build
    let _ = fs::write(&counter_path, build_number.to_string());

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=WB_CONVERT_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=WB_CONVERT_BUILD_TIMESTAMP={}", timestamp);
}
