//! Recursive scan of the extraction root for a locale's files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

/// Enumerates all files under `root` whose extension matches `extension`,
/// case-insensitively (`.ENU` and `.enu` both match a locale tagged `enu`).
/// Traversal order is name-sorted so results are deterministic.
pub fn files_with_extension(root: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
