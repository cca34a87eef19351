mod utils;

pub use utils::walk_source_files;

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::IoError;

const DEPENDENCY_DIRS: [&str; 1] = ["node_modules"];

/// Collect JSX-bearing source files under `root`, sorted by path.
///
/// A file path is returned as-is. Hidden directories are skipped, and so is
/// `node_modules/` unless `include_node_modules` is set.
pub fn discover_files(root: &Path, include_node_modules: bool) -> Result<Vec<PathBuf>, IoError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.exists() {
        return Err(IoError::file_not_found(root));
    }

    let excluded: &[&str] = if include_node_modules {
        &[]
    } else {
        &DEPENDENCY_DIRS
    };
    let files = walk_source_files(root, excluded, true)?;

    debug!(
        root = %root.display(),
        count = files.len(),
        include_node_modules,
        "discovered source files"
    );
    Ok(files)
}
