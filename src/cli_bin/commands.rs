//! Command handler for publishing a batch of articles

use crate::cli_bin::args::Cli;
use anyhow::{Context, Result};
use devto_publish::{
    resolve_files, ArticleApi, ArticlePayload, DevToClient, PublishError, PublishOutcome,
    Publisher, RemoteArticle,
};
use log::debug;
use std::path::Path;

/// Publish every article named on the command line, in order.
///
/// Stops at the first failure; files after it are left alone.
pub async fn publish_command(cli: &Cli) -> Result<()> {
    if cli.files.is_empty() {
        return Err(PublishError::NoArticles.into());
    }

    let files = resolve_files(&cli.files)?;
    debug!("Publishing {} file(s)", files.len());

    let client = DevToClient::with_base_url(&cli.api_url)?;
    let publisher = Publisher::new(cli.publisher_config(), client);

    for file in &files {
        publish_one(&publisher, file).await?;
    }
    Ok(())
}

async fn publish_one<A: ArticleApi>(publisher: &Publisher<A>, path: &Path) -> Result<()> {
    let outcome = publisher
        .publish(path)
        .await
        .with_context(|| format!("Failed to publish {}", path.display()))?;

    match outcome {
        PublishOutcome::Skipped => {
            println!("Skipping {} - published: false", path.display());
        }
        PublishOutcome::DryRun(payload) => print_dry_run(&payload),
        PublishOutcome::Created(remote) => print_published("Published", &remote),
        PublishOutcome::Updated(remote) => print_published("Updated", &remote),
    }
    Ok(())
}

fn print_dry_run(payload: &ArticlePayload) {
    println!("DRY RUN: Would publish article:");
    println!("   Title: {}", payload.title.as_deref().unwrap_or_default());
    println!("   Tags: {}", payload.tags.join(", "));
    println!("   Description: {}", payload.description);
    println!("   Canonical URL: {}", payload.canonical_url);
}

fn print_published(action: &str, remote: &RemoteArticle) {
    match &remote.title {
        Some(title) => println!("{}: {}", action, title),
        None => println!("{} article {}", action, remote.id),
    }
    println!("   URL: {}", remote.url);
}
