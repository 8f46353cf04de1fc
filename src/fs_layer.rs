//! Filesystem collaborators: discovery, destination clearing, writes.
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::emit::MockModule;
use crate::error::{GenError, Result};

/// Recursively find `*.interface.<ext>` files below `src`, sorted.
pub fn discover_declarations(src: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&src.to_string_lossy());
    let pattern = format!("{root}/**/*.interface.{ext}");
    let mut out = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) if path.is_file() => out.push(path),
            Ok(_) => {}
            Err(error) => tracing::warn!(%error, "skipping unreadable entry during discovery"),
        }
    }
    out.sort();
    Ok(out)
}

pub fn read_declaration(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GenError::Read { path: path.to_path_buf(), source })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub removed: usize,
    pub failed: usize,
}

/// Create `dst` if missing and empty it.
///
/// Only files directly inside `dst` are removed unless `recursive` is set, in
/// which case subdirectories go too. Failing to create or list `dst` is fatal;
/// an entry that cannot be removed is logged and skipped.
pub fn prepare_destination(dst: &Path, recursive: bool) -> Result<ClearReport> {
    let setup = |source| GenError::DestinationSetup { path: dst.to_path_buf(), source };
    fs::create_dir_all(dst).map_err(setup)?;
    let mut listing_failures = 0;
    let mut paths = Vec::new();
    for entry in fs::read_dir(dst).map_err(setup)? {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(error) => {
                tracing::warn!(%error, dst = %dst.display(), "cannot list destination entry");
                listing_failures += 1;
            }
        }
    }
    let mut report = remove_entries(paths, recursive);
    report.failed += listing_failures;
    Ok(report)
}

fn remove_entries(paths: impl IntoIterator<Item = PathBuf>, recursive: bool) -> ClearReport {
    let mut report = ClearReport::default();
    for path in paths {
        let removal = fs::symlink_metadata(&path).and_then(|meta| {
            if !meta.is_dir() {
                fs::remove_file(&path).map(|()| true)
            } else if recursive {
                fs::remove_dir_all(&path).map(|()| true)
            } else {
                Ok(false)
            }
        });
        match removal {
            Ok(true) => report.removed += 1,
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "could not remove stale output, skipping");
                report.failed += 1;
            }
        }
    }
    report
}

#[derive(Debug)]
pub struct WriteOutcome {
    pub interface: String,
    pub path: PathBuf,
    pub result: Result<()>,
}

impl WriteOutcome {
    pub fn is_ok(&self) -> bool { self.result.is_ok() }
}

/// Write every module as an independent task; all tasks are joined and each
/// failure is captured in its own outcome.
pub fn write_modules(dst: &Path, modules: &[MockModule]) -> Vec<WriteOutcome> {
    modules
        .par_iter()
        .map(|module| {
            let path = dst.join(&module.file_name);
            let result = fs::write(&path, &module.content)
                .map_err(|source| GenError::Write { path: path.clone(), source });
            match &result {
                Ok(()) => tracing::debug!(interface = %module.interface, path = %path.display(), "wrote mock module"),
                Err(error) => tracing::error!(interface = %module.interface, %error, "Error writing {}!", module.interface),
            }
            WriteOutcome { interface: module.interface.clone(), path, result }
        })
        .collect()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discovers_nested_declarations_only() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("User.interface.ts"), "").unwrap();
        fs::write(root.join("a/b/Order.interface.ts"), "").unwrap();
        fs::write(root.join("a/user.service.ts"), "").unwrap();
        fs::write(root.join("a/Thing.interface.js"), "").unwrap();

        let found = discover_declarations(root, "ts").unwrap();
        assert_eq!(found, vec![root.join("User.interface.ts"), root.join("a/b/Order.interface.ts")]);
        assert_eq!(discover_declarations(root, "js").unwrap(), vec![root.join("a/Thing.interface.js")]);
    }

    #[test]
    fn clearing_is_shallow_by_default() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("out");
        fs::create_dir_all(dst.join("keep")).unwrap();
        fs::write(dst.join("old.stubs.ts"), "x").unwrap();
        fs::write(dst.join("keep/nested.ts"), "x").unwrap();

        assert_eq!(prepare_destination(&dst, false).unwrap(), ClearReport { removed: 1, failed: 0 });
        assert!(!dst.join("old.stubs.ts").exists());
        assert!(dst.join("keep/nested.ts").exists());

        assert_eq!(prepare_destination(&dst, true).unwrap(), ClearReport { removed: 1, failed: 0 });
        assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
    }

    #[test]
    fn creates_missing_destination() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("x/y");
        assert_eq!(prepare_destination(&dst, false).unwrap(), ClearReport::default());
        assert!(dst.is_dir());
    }

    #[test]
    fn unremovable_entry_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let stale = tmp.path().join("Old.stubs.ts");
        fs::write(&stale, "x").unwrap();
        // vanished between listing and removal
        let gone = tmp.path().join("Gone.stubs.ts");

        let report = remove_entries(vec![gone, stale.clone()], false);
        assert_eq!(report, ClearReport { removed: 1, failed: 1 });
        assert!(!stale.exists());
    }

    #[test]
    fn one_failed_write_does_not_stop_others() {
        let tmp = TempDir::new().unwrap();
        // a directory squatting on the target name makes that write fail
        fs::create_dir(tmp.path().join("Bad.stubs.ts")).unwrap();
        let modules = vec![
            MockModule { interface: "Good".into(), file_name: "Good.stubs.ts".into(), content: "a".into() },
            MockModule { interface: "Bad".into(), file_name: "Bad.stubs.ts".into(), content: "b".into() },
        ];
        let outcomes = write_modules(tmp.path(), &modules);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_ok());
        assert!(matches!(outcomes[1].result, Err(GenError::Write { .. })));
        assert_eq!(fs::read_to_string(tmp.path().join("Good.stubs.ts")).unwrap(), "a");
    }
}
