use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub(crate) struct Scanner;

impl Scanner {
    /// Collects every `.rs` file below `root`, honoring ignore files, in a
    /// stable sorted order.
    pub(crate) fn collect_paths(root: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkBuilder::new(root)
            .build()
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                    return Some(path.to_path_buf());
                }
                None
            })
            .collect();
        // Walk order is filesystem-dependent; sort so reporting is stable.
        paths.sort();
        paths
    }

    /// Reads and parses one file, reporting and skipping anything unreadable
    /// or unparsable.
    pub(crate) fn parse_one(path: &Path) -> Option<syn::File> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                return None;
            }
        };
        match syn::parse_file(&text) {
            Ok(ast) => Some(ast),
            Err(err) => {
                warn!(
                    "skipping {}: not parsable as Rust source: {err}",
                    path.display()
                );
                None
            }
        }
    }
}
