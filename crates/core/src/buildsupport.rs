//! Helpers for driving the generator from a consumer crate's `build.rs`.
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     signpost_core::buildsupport::generate().unwrap();
//! }
//! ```
//!
//! Units land under `OUT_DIR` mirroring the crate's module layout, so each
//! one can be pulled into its matching module:
//!
//! ```ignore
//! // src/app/mod.rs
//! include!(concat!(env!("OUT_DIR"), "/app/order_screen__route.rs"));
//! ```

use crate::error::{Result, SignpostError};
use crate::generator::Generator;
use crate::model::GenerateReport;
use std::path::PathBuf;

/// Runs the pipeline from the consuming crate's `src/` into `OUT_DIR`.
pub fn generate() -> Result<GenerateReport> {
    let manifest_dir = build_env("CARGO_MANIFEST_DIR")?;
    let out_dir = build_env("OUT_DIR")?;

    let source_root = PathBuf::from(manifest_dir).join("src");
    println!("cargo:rerun-if-changed={}", source_root.display());

    Generator::new(source_root, PathBuf::from(out_dir)).run()
}

fn build_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SignpostError::Env(format!(
            "{key} is not set; buildsupport::generate must run inside a build script"
        ))
    })
}
