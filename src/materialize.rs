use crate::constants::MARKER_SUFFIX;
use crate::error::MaterializeError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

/// Strips the marker suffix from a template file name.
///
/// Returns `None` when `file_name` is not a template: the suffix is absent
/// or case-mismatched, or the remainder after stripping is empty or only
/// dots (`.example`, `..example` have no stem to materialize).
pub fn materialized_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(MARKER_SUFFIX)?;
    if stem.is_empty() || stem.bytes().all(|byte| byte == b'.') {
        return None;
    }
    Some(stem)
}

/// Destination path for a template file, `None` when `path` is not one.
///
/// Non-UTF-8 file names never match the suffix and yield `None`.
pub fn target_path(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    let stem = materialized_name(file_name)?;
    Some(path.with_file_name(stem))
}

/// Walks `root` and copies every template file to its materialized sibling.
///
/// Copies are unconditional: an existing destination is overwritten without
/// warning. Directories are traversal-only; symlinked directories are not
/// followed. The first walk or copy failure aborts the run, leaving files
/// copied so far in place.
#[instrument(skip(root), fields(root = %root.display()))]
pub fn materialize(root: &Path) -> Result<(), MaterializeError> {
    let mut copied = 0_usize;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            MaterializeError::Walk { path, source: err }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(target) = target_path(entry.path()) else {
            continue;
        };
        fs::copy(entry.path(), &target)
            .map_err(|err| MaterializeError::copy(entry.path(), &target, err))?;
        debug!(
            template = %entry.path().display(),
            materialized = %target.display(),
            "copied template"
        );
        copied += 1;
    }
    info!(copied, "materialized template files");
    Ok(())
}
