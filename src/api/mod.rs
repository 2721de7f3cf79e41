//! Remote article API
//!
//! [`ArticleApi`] is the seam between the publisher and the platform. The
//! production implementation is [`DevToClient`]; tests substitute their own.

pub mod devto;

pub use devto::{DevToClient, DEFAULT_API_URL};

use crate::core::{ArticlePayload, RemoteArticle};
use crate::error::Result;
use async_trait::async_trait;

/// Operations the publisher needs from the platform.
///
/// Every call carries the API key; implementations must turn non-2xx
/// responses into [`crate::PublishError::Rejected`].
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// Articles already published by the owner of `api_key`
    async fn published_articles(&self, api_key: &str) -> Result<Vec<RemoteArticle>>;

    /// Create a new article
    async fn create_article(&self, api_key: &str, article: &ArticlePayload) -> Result<RemoteArticle>;

    /// Replace the article with the given id
    async fn update_article(
        &self,
        api_key: &str,
        id: u64,
        article: &ArticlePayload,
    ) -> Result<RemoteArticle>;
}
