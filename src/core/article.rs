//! Remote article types
//!
//! [`ArticlePayload`] is what gets sent to the platform, [`RemoteArticle`] is
//! what comes back. The payload is built from an article's front matter and
//! body with the defaulting rules applied here, in one place.

use crate::core::front_matter::FrontMatter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default prefix for canonical URLs of articles without an explicit one
pub const DEFAULT_CANONICAL_BASE: &str = "https://github.com/sadjow/articles/blob/main/";

/// Article fields submitted on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body_markdown: String,
    pub published: bool,
    pub tags: Vec<String>,
    pub description: String,
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

/// Request body wrapper: the API expects `{"article": {...}}`
#[derive(Debug, Serialize)]
pub struct ArticleEnvelope<'a> {
    pub article: &'a ArticlePayload,
}

/// An article as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteArticle {
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ArticlePayload {
    /// Build the payload for an article.
    ///
    /// `published` is always sent as `true`: unpublished articles never get
    /// this far.
    pub fn from_front_matter(front: &FrontMatter, body: &str, canonical_url: String) -> Self {
        Self {
            title: front.title(),
            body_markdown: body.to_string(),
            published: true,
            tags: front.tags(),
            description: front.description().unwrap_or_default(),
            canonical_url,
            main_image: front.cover_image(),
            series: front.series(),
        }
    }

    pub fn envelope(&self) -> ArticleEnvelope<'_> {
        ArticleEnvelope { article: self }
    }
}

/// Canonical URL for an article: the explicit front matter value, or the
/// base joined with the file's repository-relative path.
pub fn canonical_url_for(front: &FrontMatter, path: &Path, base: &str) -> String {
    front
        .canonical_url()
        .unwrap_or_else(|| default_canonical_url(path, base))
}

/// `base` followed by the path with forward slashes and no leading `./`.
pub fn default_canonical_url(path: &Path, base: &str) -> String {
    let relative = path.to_string_lossy().replace('\\', "/");
    let mut relative = relative.as_str();
    while let Some(rest) = relative.strip_prefix("./") {
        relative = rest;
    }
    format!("{}{}", base, relative)
}
