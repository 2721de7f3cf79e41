//! The publish pipeline
//!
//! One file at a time: read, check eligibility, build the payload, resolve an
//! existing remote article, create or update it, then record the remote id
//! and URL back into the file.

use crate::api::ArticleApi;
use crate::core::{ArticleFile, ArticlePayload, RemoteArticle, DEFAULT_CANONICAL_BASE};
use crate::error::{PublishError, Result};
use crate::io::{ArticleWriter, FrontMatterReader};
use log::{debug, info, warn};
use std::path::Path;

/// Run-wide settings, fixed for the duration of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// API key; only required outside dry-run mode
    pub api_key: Option<String>,
    /// Report what would be published without any network call or write
    pub dry_run: bool,
    /// Prefix for canonical URLs of articles without an explicit one
    pub canonical_base: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            dry_run: false,
            canonical_base: DEFAULT_CANONICAL_BASE.to_string(),
        }
    }
}

/// How a single file ended up
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    /// `published: false`; nothing was sent or written
    Skipped,
    /// Dry run; the payload that would have been sent
    DryRun(ArticlePayload),
    /// A new remote article was created
    Created(RemoteArticle),
    /// An existing remote article was updated
    Updated(RemoteArticle),
}

/// Publishes article files through an [`ArticleApi`]
pub struct Publisher<A> {
    config: PublisherConfig,
    api: A,
    reader: FrontMatterReader,
    writer: ArticleWriter,
}

impl<A: ArticleApi> Publisher<A> {
    pub fn new(config: PublisherConfig, api: A) -> Self {
        Self {
            config,
            api,
            reader: FrontMatterReader::new(),
            writer: ArticleWriter::new(),
        }
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Publish one article file.
    pub async fn publish<P: AsRef<Path>>(&self, path: P) -> Result<PublishOutcome> {
        let path = path.as_ref();
        debug!("Processing file: {}", path.display());

        let article = self.reader.read_file(path)?;
        if article.front_matter().is_unpublished() {
            info!("Skipping {} - published: false", path.display());
            return Ok(PublishOutcome::Skipped);
        }

        let payload = article.payload(&self.config.canonical_base);
        if self.config.dry_run {
            return Ok(PublishOutcome::DryRun(payload));
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(PublishError::MissingApiKey)?;

        let (remote, updated) = match self.resolve_existing(api_key, &article, &payload).await? {
            Some(id) => {
                info!("Updating existing article (ID: {})", id);
                (self.api.update_article(api_key, id, &payload).await?, true)
            }
            None => {
                info!("Publishing new article");
                (self.api.create_article(api_key, &payload).await?, false)
            }
        };

        let content = article.linked_content(remote.id, &remote.url)?;
        if self.writer.write(path, &content)? {
            debug!("Recorded article {} in {}", remote.id, path.display());
        }

        Ok(if updated {
            PublishOutcome::Updated(remote)
        } else {
            PublishOutcome::Created(remote)
        })
    }

    /// Id of the remote article this file maps to: the stored `dev_to_id`,
    /// else a published article with the same canonical URL.
    ///
    /// A lookup that fails remotely counts as "not found", so the caller goes
    /// on to create the article, possibly duplicating one the lookup missed.
    /// Any other error is returned.
    async fn resolve_existing(
        &self,
        api_key: &str,
        article: &ArticleFile,
        payload: &ArticlePayload,
    ) -> Result<Option<u64>> {
        if let Some(id) = article.front_matter().dev_to_id() {
            return Ok(Some(id));
        }

        match self.api.published_articles(api_key).await {
            Ok(articles) => Ok(articles
                .into_iter()
                .find(|remote| remote.canonical_url.as_deref() == Some(payload.canonical_url.as_str()))
                .map(|remote| remote.id)),
            Err(e) if e.is_recoverable() => {
                warn!("Error fetching articles: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
