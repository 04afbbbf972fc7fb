//! Declaration discovery: walk a source root, parse every Rust file, and
//! extract the route declarations found in it.

mod extract;
mod scanner;

use crate::error::Result;
use crate::model::RouteDeclaration;
use rayon::prelude::*;
use scanner::Scanner;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Outcome of one discovery pass over a source root.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Well-formed declarations, in stable (path-sorted file) order.
    pub declarations: Vec<RouteDeclaration>,
    /// Files or declarations excluded with a diagnostic.
    pub excluded: usize,
}

/// Scans `source_root` for declarations carrying the route marker.
///
/// Malformed declarations and unparsable files are reported as warnings and
/// excluded; they never abort the pass. A missing source root is an I/O
/// error.
pub fn discover(source_root: &Path) -> Result<Discovery> {
    std::fs::metadata(source_root)?;

    let paths = Scanner::collect_paths(source_root);

    // Parse and extract per file in parallel; the syntax tree never leaves
    // its thread, only the extracted declarations do. Input order is
    // preserved, so the table order stays stable.
    let outcomes: Vec<extract::Extraction> = paths
        .par_iter()
        .map(|path| match Scanner::parse_one(path) {
            Some(ast) => extract::extract(&module_path_of(source_root, path), &ast, path),
            None => extract::Extraction::skipped_file(),
        })
        .collect();

    let mut declarations = Vec::new();
    let mut excluded = 0;
    for outcome in outcomes {
        declarations.extend(outcome.declarations);
        excluded += outcome.excluded;
    }

    warn_duplicate_paths(&declarations);

    Ok(Discovery {
        declarations,
        excluded,
    })
}

/// Module path of the items at the top level of `file`, derived from its
/// position under the source root (`lib.rs`/`main.rs` at the root and any
/// `mod.rs` contribute no segment). Inline `mod` nesting inside the file is
/// handled by the extractor.
fn module_path_of(source_root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(source_root).unwrap_or(file);

    let mut segments: Vec<String> = rel
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| c.as_os_str().to_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    if let Some(stem) = rel.file_stem().and_then(|s| s.to_str()) {
        let crate_root_file = segments.is_empty() && (stem == "lib" || stem == "main");
        if stem != "mod" && !crate_root_file {
            segments.push(stem.to_string());
        }
    }

    segments.join("::")
}

/// Duplicate paths are allowed: each declaration still generates its own
/// independently-correct resolver. The collision is surfaced so callers are
/// not left guessing which resolver to invoke.
fn warn_duplicate_paths(declarations: &[RouteDeclaration]) {
    let mut seen: HashMap<String, &RouteDeclaration> = HashMap::new();
    for decl in declarations {
        // Matching is case-insensitive, so case-variant paths collide too.
        let key = decl.path.to_ascii_lowercase();
        if let Some(first) = seen.get(key.as_str()) {
            warn!(
                "route path {:?} is declared by both `{}` and `{}`; each generated resolver matches only its own declaration",
                decl.path,
                first.qualified_name(),
                decl.qualified_name()
            );
        } else {
            seen.insert(key, decl);
        }
    }
}
