//! Atomic rewrite of article files

use crate::error::{PublishError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes patched article text back to disk
#[derive(Debug, Clone, Default)]
pub struct ArticleWriter;

impl ArticleWriter {
    pub fn new() -> Self {
        Self
    }

    /// Overwrite `path` with `content`. Returns whether the file changed.
    pub fn write(&self, path: &Path, content: &str) -> Result<bool> {
        if let Ok(existing) = fs::read_to_string(path) {
            if existing == content {
                return Ok(false);
            }
        }

        self.write_atomic(path, content)?;
        Ok(true)
    }

    /// Write to a temp file in the same directory, then rename over the
    /// target. Permissions of an existing target are carried over.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| PublishError::io(path, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| PublishError::io(path, e))?;
        temp_file.flush().map_err(|e| PublishError::io(path, e))?;

        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(temp_file.path(), metadata.permissions())
                .map_err(|e| PublishError::io(path, e))?;
        }

        temp_file
            .persist(path)
            .map_err(|e| PublishError::io(path, e.error))?;
        Ok(())
    }
}
