use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::utils::constants::SPREADSHEET_EXTENSIONS;

/// List spreadsheet files in `directory` whose name starts with `prefix`.
///
/// A missing directory is an error; a directory with no matching files is
/// an empty result. Paths are returned sorted lexicographically so that
/// concatenation order is stable across platforms (the raw readdir order
/// is not).
pub fn discover_spreadsheets(directory: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(DashboardError::NotFound(directory.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(prefix)
            && SPREADSHEET_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        {
            files.push(path);
        }
    }

    files.sort();
    debug!(
        directory = %directory.display(),
        prefix,
        count = files.len(),
        "discovered spreadsheet files"
    );

    Ok(files)
}
