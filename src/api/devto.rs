//! dev.to (Forem) REST client

use crate::api::ArticleApi;
use crate::core::{ArticlePayload, RemoteArticle};
use crate::error::{PublishError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Base URL of the public dev.to API
pub const DEFAULT_API_URL: &str = "https://dev.to/api";

/// Page size for the published-articles listing (the API maximum)
const PUBLISHED_PAGE_SIZE: u32 = 1000;

const API_KEY_HEADER: &str = "api-key";

/// HTTP client for a Forem instance
#[derive(Debug, Clone)]
pub struct DevToClient {
    http: Client,
    base_url: String,
}

impl DevToClient {
    /// Client for the public dev.to API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client for another Forem instance, or a local stub
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, api_key: &str) -> Result<T> {
        let response = request.header(API_KEY_HEADER, api_key).send().await?;
        decode(response).await
    }
}

/// Decode a 2xx JSON body, or turn anything else into `Rejected` with the
/// body kept verbatim.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    debug!("Response {} ({} bytes)", status, body.len());

    if !status.is_success() {
        return Err(PublishError::rejected(status.as_u16(), body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ArticleApi for DevToClient {
    async fn published_articles(&self, api_key: &str) -> Result<Vec<RemoteArticle>> {
        let url = self.url("/articles/me/published");
        debug!("GET {}", url);
        let request = self
            .http
            .get(url)
            .query(&[("per_page", PUBLISHED_PAGE_SIZE)]);
        self.send(request, api_key).await
    }

    async fn create_article(&self, api_key: &str, article: &ArticlePayload) -> Result<RemoteArticle> {
        let url = self.url("/articles");
        debug!("POST {}", url);
        let request = self.http.post(url).json(&article.envelope());
        self.send(request, api_key).await
    }

    async fn update_article(
        &self,
        api_key: &str,
        id: u64,
        article: &ArticlePayload,
    ) -> Result<RemoteArticle> {
        let url = self.url(&format!("/articles/{}", id));
        debug!("PUT {}", url);
        let request = self.http.put(url).json(&article.envelope());
        self.send(request, api_key).await
    }
}
