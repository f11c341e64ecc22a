//! Input collection: explicit files plus recursive directory walks.

use std::fs;
use std::path::{Path, PathBuf};

/// Failure while expanding the input set.
///
/// Unlike [`crate::LoadError`], walk failures are configuration-level: an
/// unreadable directory means the run cannot know its own work list.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("failed to read directory {path}: {detail}")]
    ReadDir { path: String, detail: String },
}

/// Expand a mixed list of files and directories into a sorted, de-duplicated
/// document path list.
///
/// Directories are walked recursively and contribute files whose extension
/// matches `ext` (case-insensitive). Explicitly listed files are taken as-is
/// regardless of extension; a listed file that does not exist stays in the
/// work list so its read failure is reported per-document rather than
/// aborting the run.
pub fn collect_paths(inputs: &[PathBuf], ext: &str) -> Result<Vec<PathBuf>, WalkError> {
    let mut out: Vec<PathBuf> = Vec::new();
    for input in inputs {
        if input.is_dir() {
            walk_dir(input, ext, &mut out)?;
        } else {
            out.push(input.clone());
        }
    }
    out.sort();
    out.dedup();
    Ok(out)
}

fn walk_dir(dir: &Path, ext: &str, out: &mut Vec<PathBuf>) -> Result<(), WalkError> {
    let entries = fs::read_dir(dir).map_err(|e| WalkError::ReadDir {
        path: dir.display().to_string(),
        detail: e.to_string(),
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| WalkError::ReadDir {
            path: dir.display().to_string(),
            detail: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, ext, out)?;
        } else if matches_ext(&path, ext) {
            out.push(path);
        }
    }
    Ok(())
}

fn matches_ext(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
