//! devto-publish: publish markdown articles with YAML front matter to dev.to
//!
//! Each article file is synchronised with one remote article. The first
//! successful publish creates it and records `dev_to_id` / `dev_to_url` in the
//! file's front matter; later runs update that same article in place.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use devto_publish::{DevToClient, PublishOutcome, Publisher, PublisherConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PublisherConfig {
//!         api_key: std::env::var("DEV_TO_API_KEY").ok(),
//!         ..Default::default()
//!     };
//!     let publisher = Publisher::new(config, DevToClient::new()?);
//!
//!     match publisher.publish("posts/hello.md").await? {
//!         PublishOutcome::Created(article) => println!("created {}", article.url),
//!         PublishOutcome::Updated(article) => println!("updated {}", article.url),
//!         PublishOutcome::Skipped | PublishOutcome::DryRun(_) => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: article model, payload construction and front matter block edits
//! - [`io`]: reading, atomic writing and input path resolution
//! - [`api`]: the [`ArticleApi`] seam and its dev.to implementation
//! - [`publisher`]: the per-file pipeline
//! - [`error`]: error types

// Public API exports
pub use crate::error::{PublishError, Result};

pub use crate::api::{ArticleApi, DevToClient, DEFAULT_API_URL};
pub use crate::core::{ArticleFile, ArticlePayload, FrontMatter, RemoteArticle, DEFAULT_CANONICAL_BASE};
pub use crate::io::{resolve_files, ArticleWriter, FrontMatterReader};
pub use crate::publisher::{PublishOutcome, Publisher, PublisherConfig};

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod publisher;
