//! Article document model
//!
//! An [`ArticleFile`] keeps the raw text next to the parsed front matter and
//! body. The raw text is what gets patched and written back; the parsed view
//! is only used to decide what to send and what to patch.

use crate::core::article::{self, ArticlePayload};
use crate::core::block;
use crate::core::front_matter::{FrontMatter, DEV_TO_ID, DEV_TO_URL};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A markdown article loaded from disk
#[derive(Debug, Clone)]
pub struct ArticleFile {
    path: PathBuf,
    content: String,
    front_matter: FrontMatter,
    body: String,
}

impl ArticleFile {
    /// Create a document from its path, raw text and parsed parts
    pub fn new(path: impl Into<PathBuf>, content: String, front_matter: FrontMatter, body: String) -> Self {
        Self {
            path: path.into(),
            content,
            front_matter,
            body,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file text exactly as read
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Canonical URL used both in the payload and for the remote lookup
    pub fn canonical_url(&self, canonical_base: &str) -> String {
        article::canonical_url_for(&self.front_matter, &self.path, canonical_base)
    }

    pub fn payload(&self, canonical_base: &str) -> ArticlePayload {
        ArticlePayload::from_front_matter(
            &self.front_matter,
            &self.body,
            self.canonical_url(canonical_base),
        )
    }

    /// Text of the file after a successful publish that returned `id`/`url`.
    ///
    /// Unlinked files get both ids inserted at the top of the block; linked
    /// files only get their URL line refreshed when it changed. A key line
    /// that is already present (an empty placeholder, say) is rewritten in
    /// place rather than duplicated. Any `published: false` becomes
    /// `published: true`.
    pub fn linked_content(&self, id: u64, url: &str) -> Result<String> {
        let mut content = self.content.clone();

        if self.front_matter.dev_to_id().is_none() {
            content = match block::replace_key_line(&content, DEV_TO_ID, &id.to_string())? {
                Some(replaced) => replaced,
                None => block::insert_after_opening(&content, &[format!("{}: {}", DEV_TO_ID, id)]),
            };
        }

        if self.front_matter.dev_to_url().as_deref() != Some(url) {
            let line = format!("{}: {}", DEV_TO_URL, url);
            content = match block::replace_key_line(&content, DEV_TO_URL, url)? {
                Some(replaced) => replaced,
                None => block::insert_after_key(&content, DEV_TO_ID, &line)?.unwrap_or(content),
            };
        }

        block::normalize_published(&content)
    }
}
