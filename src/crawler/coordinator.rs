//! Crawl coordinator - frontier scheduling and round dispatch
//!
//! This module owns the crawl state machine:
//! - Fetching the seed page once to derive the output directory title
//!   (the only failure that aborts a crawl)
//! - Round-synchronized breadth-first dispatch over a bounded worker pool
//! - Merging discovered links into the frontier between rounds
//!
//! The visited and to-visit sets are owned by the coordinating task and
//! mutated only between joins, so they need no locking. The one piece of
//! state workers share is the `processed` guard set inside [`CrawlShared`].

use crate::archive::{is_archive_host, mirror_repository};
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_text};
use crate::crawler::page::{fetch_and_transform, is_markdown_url, PageResult};
use crate::crawler::parser::extract_title;
use crate::output::{docs_root, sanitize_title};
use crate::url::parse_normalized;
use crate::{MirrorError, Result};
use reqwest::Client;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Title used when the seed page has no usable `<title>`
const UNTITLED: &str = "Untitled";

/// State shared by every worker task of one crawl invocation
///
/// Built fresh per crawl; nothing here outlives the invocation, so one
/// crawl can never contaminate the next.
pub(crate) struct CrawlShared {
    /// HTTP client reused across all fetches
    pub client: Client,

    /// The seed URL; defines the crawl scope
    pub base_url: Url,

    /// Sanitized seed page title; names the output directory
    pub base_title: String,

    /// Root directory receiving this crawl's output
    pub docs_root: PathBuf,

    /// Secondary idempotency guard: URLs a worker has started processing.
    /// Checked and marked before any network I/O.
    pub processed: Mutex<HashSet<Url>>,
}

/// Counters reported at the end of a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// Number of dispatch rounds the crawl ran
    pub rounds: usize,

    /// Total URLs dispatched to workers
    pub pages_dispatched: usize,

    /// Pages whose content was persisted
    pub pages_saved: usize,
}

/// Crawls a documentation site starting from the seed URL
///
/// The seed page is fetched once, outside the worker pool, solely to
/// derive the output directory title; any failure there aborts the crawl.
/// After that the crawl always runs to completion: per-page failures are
/// logged and skipped.
///
/// # Arguments
///
/// * `seed_url` - The URL to start from; its scheme, host, and path prefix
///   define the crawl scope
/// * `config` - Crawler configuration (worker pool size, timeouts, output)
///
/// # Returns
///
/// * `Ok(CrawlStats)` - The crawl ran to completion (an empty frontier)
/// * `Err(MirrorError::SeedFetch)` - The seed could not be fetched or parsed
///
/// # Example
///
/// ```no_run
/// use docmirror::config::Config;
/// use docmirror::crawler::crawl;
///
/// # async fn example() -> docmirror::Result<()> {
/// let stats = crawl("https://docs.example.com/guide", &Config::default()).await?;
/// println!("saved {} pages", stats.pages_saved);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(seed_url: &str, config: &Config) -> Result<CrawlStats> {
    let seed = parse_normalized(seed_url).map_err(|e| MirrorError::SeedFetch {
        url: seed_url.to_string(),
        reason: e.to_string(),
    })?;

    let client = build_http_client(config.crawler.request_timeout_secs)?;

    // No title, no crawl: the seed page names the output directory.
    let seed_body = fetch_text(&client, &seed)
        .await
        .map_err(|e| MirrorError::SeedFetch {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;

    let base_title = match extract_title(&seed_body) {
        Some(title) => {
            let sanitized = sanitize_title(&title);
            if sanitized.is_empty() {
                UNTITLED.to_string()
            } else {
                sanitized
            }
        }
        None => UNTITLED.to_string(),
    };

    tracing::info!("Starting crawl of {} into \"{}\"", seed, base_title);

    let shared = Arc::new(CrawlShared {
        client,
        base_url: seed.clone(),
        base_title,
        docs_root: docs_root(config),
        processed: Mutex::new(HashSet::new()),
    });

    let semaphore = Arc::new(Semaphore::new(config.crawler.max_workers));

    let mut visited: HashSet<Url> = HashSet::new();
    let mut to_visit: HashSet<Url> = HashSet::from([seed]);
    let mut stats = CrawlStats::default();

    while !to_visit.is_empty() {
        // Snapshot the round's batch and mark it visited before dispatch,
        // so later rounds can never re-queue an in-flight URL.
        let batch: Vec<Url> = to_visit.drain().collect();
        visited.extend(batch.iter().cloned());
        stats.rounds += 1;
        stats.pages_dispatched += batch.len();

        tracing::info!("Round {}: dispatching {} URLs", stats.rounds, batch.len());

        let mut tasks: JoinSet<PageResult> = JoinSet::new();
        for url in batch {
            let shared = Arc::clone(&shared);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    // The semaphore is never closed while a crawl runs.
                    Err(_) => return PageResult::default(),
                };
                process_url(&shared, &url).await
            });
        }

        // Frontier merge happens only here, on the coordinating task.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => {
                    if result.content.is_some() {
                        stats.pages_saved += 1;
                    }
                    to_visit.extend(
                        result
                            .discovered_links
                            .into_iter()
                            .filter(|link| !visited.contains(link)),
                    );
                }
                Err(e) => tracing::error!("Worker task failed: {}", e),
            }
        }
    }

    tracing::info!(
        "Crawl complete: {} rounds, {} pages dispatched, {} saved",
        stats.rounds,
        stats.pages_dispatched,
        stats.pages_saved
    );

    Ok(stats)
}

/// Routes one URL to the page transformer or the archive fallback
///
/// Markdown files win over the archive-host rule: a `.md` URL on a
/// source-hosting site is fetched as a raw leaf, not expanded into a
/// repository snapshot.
async fn process_url(shared: &CrawlShared, url: &Url) -> PageResult {
    if is_archive_host(url) && !is_markdown_url(url) {
        match mirror_repository(&shared.client, url, &shared.docs_root).await {
            Ok(Some(dest)) => {
                tracing::info!("Mirrored repository {} to {}", url, dest.display())
            }
            Ok(None) => tracing::warn!("Repository {} had no matching content directory", url),
            Err(e) => tracing::error!("Archive job for {} failed: {}", url, e),
        }
        // Terminal either way: the archive path discovers no links.
        PageResult::default()
    } else {
        fetch_and_transform(shared, url).await
    }
}
