use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::detect_language;
use crate::error::IoError;

pub fn walk_source_files(
    root: &Path,
    excluded_dirs: &[&str],
    exclude_hidden: bool,
) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    // The root itself is never filtered, even when hidden.
    for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
        if e.depth() == 0 || !e.file_type().is_dir() {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        if exclude_hidden && name.starts_with('.') {
            return false;
        }
        !excluded_dirs.contains(&name.as_ref())
    }) {
        let entry = entry.map_err(|e| IoError::directory_scan_error(root, e.to_string()))?;

        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if exclude_hidden && file_name.starts_with('.') {
            continue;
        }
        if detect_language(entry.path()).is_some() {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
