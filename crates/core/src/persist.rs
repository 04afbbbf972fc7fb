//! Persistence of rendered units into the generated-output directory.

use crate::error::Result;
use crate::model::GeneratedUnit;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes one unit below `out_dir`, replacing any previous file at the same
/// location.
///
/// The unit is written to a temporary file in the destination directory and
/// then renamed over the target, so a failed run never leaves a partial
/// file behind. Any I/O failure is fatal for the run.
pub fn write_unit(out_dir: &Path, unit: &GeneratedUnit) -> Result<()> {
    let target = out_dir.join(&unit.relative_path);
    let parent = target.parent().unwrap_or(out_dir);
    fs::create_dir_all(parent)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(unit.source.as_bytes())?;
    staged.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unit() -> GeneratedUnit {
        GeneratedUnit {
            package_name: "app".to_string(),
            type_name: "OrderScreen__Route".to_string(),
            relative_path: PathBuf::from("app/order_screen__route.rs"),
            source: "pub struct OrderScreen__Route;\n".to_string(),
        }
    }

    #[test]
    fn writes_the_unit_at_its_derived_path() {
        let out = tempfile::tempdir().unwrap();
        write_unit(out.path(), &unit()).unwrap();

        let written = fs::read_to_string(out.path().join("app/order_screen__route.rs")).unwrap();
        assert_eq!(written, unit().source);
        // No stray temp files left behind.
        assert_eq!(fs::read_dir(out.path().join("app")).unwrap().count(), 1);
    }

    #[test]
    fn overwrites_a_pre_existing_file() {
        let out = tempfile::tempdir().unwrap();
        let target = out.path().join("app/order_screen__route.rs");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "stale").unwrap();

        write_unit(out.path(), &unit()).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), unit().source);
    }

    #[test]
    fn write_failure_surfaces_an_error() {
        // A file where the package directory should be makes create_dir_all fail.
        let out = tempfile::tempdir().unwrap();
        fs::write(out.path().join("app"), "not a directory").unwrap();

        assert!(write_unit(out.path(), &unit()).is_err());
    }
}
