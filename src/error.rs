//! Error types for the devto-publish library
//!
//! Every failure in the publish pipeline surfaces as a [`PublishError`]. The
//! binary decides what to do with it; apart from the existing-article lookup
//! (which degrades to "not found"), all of them abort the batch.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum PublishError {
    /// No input paths were given on the command line
    #[error("No articles provided")]
    NoArticles,

    /// The API key is required outside dry-run mode
    #[error("DEV_TO_API_KEY environment variable is required")]
    MissingApiKey,

    /// File not found or not a regular file
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error while reading or writing an article file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter that cannot be used as a key-value mapping
    #[error("Invalid front matter in {path}: {reason}")]
    InvalidFrontMatter { path: PathBuf, reason: String },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status
    #[error("{body}")]
    Rejected { status: u16, body: String },

    /// Response body that is not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid front matter error
    pub fn invalid_front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new rejected-response error
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of a rejected request, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the run may carry on after this error.
    ///
    /// Only remote failures qualify, and only the existing-article lookup
    /// makes use of it.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Rejected { .. } | Self::Decode(_) => true,
            Self::NoArticles
            | Self::MissingApiKey
            | Self::FileNotFound { .. }
            | Self::Io { .. }
            | Self::InvalidFrontMatter { .. }
            | Self::Regex(_) => false,
        }
    }
}
