use crate::error::{PublishError, Result};
use crate::io::FrontMatterReader;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Expand directories into the markdown files below them, sorted by path.
///
/// Every other path is kept as given, in order, so that a missing file still
/// fails when it is read. An entry that cannot be walked fails the whole
/// resolution.
pub fn resolve_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let failed = e.path().unwrap_or(path.as_path()).to_path_buf();
                PublishError::io(failed, e.into())
            })?;
            if entry.file_type().is_file() && FrontMatterReader::is_markdown_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}
