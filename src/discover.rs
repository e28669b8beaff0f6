//! Workflow file discovery (non-recursive).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;

/// Lists files in `dir` whose extension is `extension`.
///
/// Order is the directory listing order unless `sorted` is set. `exclude` drops one
/// path from the result (the portal registry when it lives next to the workflows).
pub fn discover_workflows(
    dir: &Path,
    extension: &str,
    exclude: Option<&Path>,
    sorted: bool,
) -> Result<Vec<PathBuf>, LoadError> {
    let excluded = exclude.map(canonical);
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))? {
        let entry = entry.map_err(|e| LoadError::io(dir, e))?;
        let path = entry.path();

        if !path.is_file() || path.extension().is_none_or(|ext| ext != extension) {
            continue;
        }
        if excluded.as_deref() == Some(canonical(&path).as_path()) {
            debug!(path = %path.display(), "skipping portal registry");
            continue;
        }
        paths.push(path);
    }

    if sorted {
        paths.sort();
    }
    debug!(dir = %dir.display(), count = paths.len(), "discovered workflows");
    Ok(paths)
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
