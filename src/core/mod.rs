//! Core types for article publishing
//!
//! - ArticleFile: a markdown article with its raw text and parsed front matter
//! - FrontMatter: typed, read-only accessors over the parsed YAML mapping
//! - ArticlePayload / RemoteArticle: what is sent to and received from the API
//! - block: textual edits of the front matter block

pub mod article;
pub mod block;
pub mod document;
pub mod front_matter;

pub use article::{ArticleEnvelope, ArticlePayload, RemoteArticle, DEFAULT_CANONICAL_BASE};
pub use block::MetadataBlock;
pub use document::ArticleFile;
pub use front_matter::FrontMatter;
