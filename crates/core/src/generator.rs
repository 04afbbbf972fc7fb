use crate::discover;
use crate::emit;
use crate::error::Result;
use crate::model::GenerateReport;
use crate::persist;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// The full pipeline: discover route declarations below a source root, then
/// render and persist one resolver unit per declaration.
///
/// A run is single-pass and run-to-completion. Malformed declarations only
/// produce diagnostics; an output write failure aborts the run with an error.
pub struct Generator {
    source_root: PathBuf,
    out_dir: PathBuf,
    note: Option<String>,
}

impl Generator {
    pub fn new(source_root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            out_dir: out_dir.into(),
            note: None,
        }
    }

    /// Attaches a free-form note that is logged at the start of the run. It
    /// has no effect on the generated output.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn run(&self) -> Result<GenerateReport> {
        if let Some(note) = &self.note {
            info!("{note}");
        }

        let discovery = discover::discover(&self.source_root)?;
        let mut report = GenerateReport {
            discovered: discovery.declarations.len(),
            generated: 0,
            excluded: discovery.excluded,
        };

        if discovery.declarations.is_empty() {
            info!("no route declarations found; nothing to do");
            return Ok(report);
        }

        let mut written: HashSet<PathBuf> = HashSet::new();
        for decl in &discovery.declarations {
            info!(
                "discovered route declaration `{}` with path {:?}",
                decl.qualified_name(),
                decl.path
            );
            let unit = emit::render(decl)?;
            // The file name flattens the type name, so distinct siblings can
            // map to the same path. Keep the first unit instead of silently
            // clobbering it.
            if !written.insert(unit.relative_path.clone()) {
                warn!(
                    "skipping `{}`: its output path {} is already taken by an earlier declaration",
                    decl.qualified_name(),
                    unit.relative_path.display()
                );
                report.excluded += 1;
                continue;
            }
            persist::write_unit(&self.out_dir, &unit)?;
            report.generated += 1;
        }

        Ok(report)
    }
}
