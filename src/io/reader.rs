//! Article reading and front matter parsing
//!
//! Files are read whole; the front matter is parsed with `gray_matter` into a
//! YAML mapping while the raw text is kept for in-place patching.

use crate::core::{ArticleFile, FrontMatter, MetadataBlock};
use crate::error::{PublishError, Result};
use gray_matter::engine::{Engine, YAML};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Largest article file the reader accepts, in bytes
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Front matter reader
#[derive(Debug, Clone, Default)]
pub struct FrontMatterReader;

impl FrontMatterReader {
    pub fn new() -> Self {
        Self
    }

    /// Read an article from a file path
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<ArticleFile> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(PublishError::file_not_found(path));
        }

        let metadata = fs::metadata(path).map_err(|e| PublishError::io(path, e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(PublishError::invalid_front_matter(
                path,
                format!(
                    "file too large: {} bytes (limit: {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| PublishError::io(path, e))?;
        self.parse_content(&content, path)
    }

    /// Parse an article from string content. `path` is recorded for the
    /// canonical URL and for error messages only.
    ///
    /// The body is everything after the closing delimiter line, untouched.
    pub fn parse_content(&self, content: &str, path: &Path) -> Result<ArticleFile> {
        let (front_matter, body) = match MetadataBlock::locate(content) {
            Some(block) => (
                self.extract_front_matter(&content[block.inner.clone()], path)?,
                &content[block.closing.end..],
            ),
            None => (Mapping::new(), content),
        };

        Ok(ArticleFile::new(
            path,
            content.to_string(),
            FrontMatter::new(front_matter),
            body.to_string(),
        ))
    }

    fn extract_front_matter(&self, inner: &str, path: &Path) -> Result<Mapping> {
        match YAML::parse(inner.trim()).deserialize() {
            Ok(Value::Mapping(map)) => {
                if let Some((key, _)) = map.iter().find(|(k, _)| !k.is_string()) {
                    return Err(PublishError::invalid_front_matter(
                        path,
                        format!("non-string key found: {:?}", key),
                    ));
                }
                Ok(map)
            }
            Ok(Value::Null) => Ok(Mapping::new()),
            Ok(other) => Err(PublishError::invalid_front_matter(
                path,
                format!("expected mapping, found {:?}", other),
            )),
            Err(e) => Err(PublishError::invalid_front_matter(
                path,
                format!("failed to deserialize front matter: {}", e),
            )),
        }
    }

    /// Check if a file is a markdown file
    pub fn is_markdown_file<P: AsRef<Path>>(path: P) -> bool {
        match path.as_ref().extension() {
            Some(ext) => {
                let ext_str = ext.to_string_lossy().to_lowercase();
                matches!(ext_str.as_str(), "md" | "markdown")
            }
            None => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".md").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_file_with_front_matter() {
        let content = r#"---
title: Test Document
tags: [rust, cli]
dev_to_id: 42
---
# Hello World

This is the body content."#;

        let file = create_test_file(content);
        let reader = FrontMatterReader::new();
        let doc = reader.read_file(file.path()).unwrap();

        assert_eq!(doc.front_matter().title().as_deref(), Some("Test Document"));
        assert_eq!(doc.front_matter().tags(), vec!["rust", "cli"]);
        assert_eq!(doc.front_matter().dev_to_id(), Some(42));
        assert_eq!(doc.body(), "# Hello World\n\nThis is the body content.");
        assert_eq!(doc.content(), content);
    }

    #[test]
    fn test_read_file_without_front_matter() {
        let content = "# Hello World\n\nThis is just markdown content.";

        let file = create_test_file(content);
        let doc = FrontMatterReader::new().read_file(file.path()).unwrap();

        assert!(doc.front_matter().value.is_empty());
        assert_eq!(doc.body(), content);
    }

    #[test]
    fn test_missing_file() {
        let result = FrontMatterReader::new().read_file("/nonexistent/post.md");
        assert!(matches!(
            result.unwrap_err(),
            PublishError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_sequence_front_matter_is_rejected() {
        let file = create_test_file("---\n- a\n- b\n---\nBody");
        let result = FrontMatterReader::new().read_file(file.path());
        assert!(matches!(
            result.unwrap_err(),
            PublishError::InvalidFrontMatter { .. }
        ));
    }

    #[test]
    fn test_body_is_text_after_block_verbatim() {
        let reader = FrontMatterReader::new();

        let doc = reader
            .parse_content("---\ntitle: Hi\n---\n# Hello\n\nBody\n", Path::new("post.md"))
            .unwrap();
        assert_eq!(doc.body(), "# Hello\n\nBody\n");

        let doc = reader
            .parse_content(
                "---\ntitle: Hi\n---\n\n    indented code\n\ntext  \n\n",
                Path::new("post.md"),
            )
            .unwrap();
        assert_eq!(doc.body(), "\n    indented code\n\ntext  \n\n");
    }

    #[test]
    fn test_crlf_body_keeps_line_endings() {
        let doc = FrontMatterReader::new()
            .parse_content("---\r\ntitle: Hi\r\n---\r\nBody\r\n", Path::new("post.md"))
            .unwrap();
        assert_eq!(doc.front_matter().title().as_deref(), Some("Hi"));
        assert_eq!(doc.body(), "Body\r\n");
    }

    #[test]
    fn test_block_must_start_the_file() {
        let content = "\n---\ntitle: Hi\npublished: false\n---\nBody";
        let doc = FrontMatterReader::new()
            .parse_content(content, Path::new("post.md"))
            .unwrap();

        assert!(doc.front_matter().value.is_empty());
        assert!(!doc.front_matter().is_unpublished());
        assert_eq!(doc.body(), content);
    }

    #[test]
    fn test_empty_block() {
        let doc = FrontMatterReader::new()
            .parse_content("---\n---\nBody\n", Path::new("post.md"))
            .unwrap();
        assert!(doc.front_matter().value.is_empty());
        assert_eq!(doc.body(), "Body\n");
    }

    #[test]
    fn test_file_size_limit() {
        let file = NamedTempFile::with_suffix(".md").unwrap();
        file.as_file().set_len(MAX_FILE_SIZE + 1).unwrap();
        let err = FrontMatterReader::new().read_file(file.path()).unwrap_err();
        assert!(matches!(err, PublishError::InvalidFrontMatter { .. }));
    }

    #[test]
    fn test_is_markdown_file() {
        assert!(FrontMatterReader::is_markdown_file("test.md"));
        assert!(FrontMatterReader::is_markdown_file("test.MARKDOWN"));
        assert!(!FrontMatterReader::is_markdown_file("test.txt"));
        assert!(!FrontMatterReader::is_markdown_file("test"));
    }
}
