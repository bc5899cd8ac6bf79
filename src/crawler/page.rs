//! Page transformer: fetch one URL, persist its content, report its links
//!
//! Each worker task runs [`fetch_and_transform`] for exactly one URL.
//! Raw markdown files are fetched verbatim through their raw-content URL
//! and treated as leaves; HTML pages have their main content region
//! converted to Markdown and persisted, and contribute their in-scope
//! links to the next crawl round. Every failure below the seed fetch is a
//! per-page event: logged, swallowed, and never allowed to abort the
//! crawl.

use crate::crawler::coordinator::CrawlShared;
use crate::crawler::fetcher::fetch_text;
use crate::crawler::parser::parse_page;
use crate::output::{convert_html, save_page};
use crate::url::{in_scope, strip_fragment};
use std::collections::HashSet;
use url::Url;

/// Result of transforming a single page
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    /// Title of the page, when one could be derived
    pub page_title: Option<String>,

    /// The persisted Markdown content; `None` means nothing was persisted
    /// for this page (skip or failure, not necessarily an error)
    pub content: Option<String>,

    /// In-scope links discovered on the page, fragment-free
    pub discovered_links: HashSet<Url>,
}

impl PageResult {
    fn empty() -> Self {
        Self::default()
    }
}

/// Returns true if the URL points at a raw markdown document
pub(crate) fn is_markdown_url(url: &Url) -> bool {
    url.path().ends_with(".md")
}

/// Fetches one URL, persists its content, and returns its in-scope links
///
/// The shared `processed` set is checked and marked *before* any network
/// I/O, so two workers racing on the same URL never both fetch it; the
/// loser returns an empty result.
pub(crate) async fn fetch_and_transform(shared: &CrawlShared, url: &Url) -> PageResult {
    let url = strip_fragment(url);

    // Check-and-mark must stay a single critical section.
    {
        let mut processed = shared.processed.lock().unwrap();
        if !processed.insert(url.clone()) {
            return PageResult::empty();
        }
    }

    tracing::info!("Processing {}", url);

    if is_markdown_url(&url) {
        return fetch_raw_markdown(shared, &url).await;
    }

    let body = match fetch_text(&shared.client, &url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            return PageResult::empty();
        }
    };

    let parsed = parse_page(&body, &url);

    let mut content = None;
    match parsed.main_content {
        Some(main_html) => match convert_html(&main_html) {
            Ok(markdown) => {
                match save_page(&shared.docs_root, &shared.base_title, &url, &markdown) {
                    Ok(_) => content = Some(markdown),
                    Err(e) => tracing::warn!("Failed to save {}: {}", url, e),
                }
            }
            Err(e) => tracing::warn!("Markdown conversion failed for {}: {}", url, e),
        },
        None => tracing::info!("No main content region found on {}, skipping", url),
    }

    let discovered_links = parsed
        .links
        .into_iter()
        .filter(|link| in_scope(&shared.base_url, link))
        .collect();

    PageResult {
        page_title: parsed.title,
        content,
        discovered_links,
    }
}

/// Fetches a raw markdown file and persists it verbatim
///
/// Raw files are leaves: they are not parsed for further links.
async fn fetch_raw_markdown(shared: &CrawlShared, url: &Url) -> PageResult {
    let raw_url = raw_markdown_url(url);
    tracing::debug!("Fetching raw markdown from {}", raw_url);

    let text = match fetch_text(&shared.client, &raw_url).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to fetch raw markdown from {}: {}", raw_url, e);
            return PageResult::empty();
        }
    };

    let content = match save_page(&shared.docs_root, &shared.base_title, url, &text) {
        Ok(_) => Some(text),
        Err(e) => {
            tracing::warn!("Failed to save {}: {}", url, e);
            None
        }
    };

    PageResult {
        page_title: Some(title_from_filename(url)),
        content,
        discovered_links: HashSet::new(),
    }
}

/// Rewrites known source-hosting URL shapes to their raw-content form
///
/// `github.com` pages serve markdown wrapped in a viewer; the content
/// itself lives on `raw.githubusercontent.com` without the `/tree/main`
/// or `/blob/main` path segments. URLs that do not match a known shape
/// pass through unchanged.
fn raw_markdown_url(url: &Url) -> Url {
    let rewritten = url
        .as_str()
        .replace("github.com", "raw.githubusercontent.com")
        .replace("/tree/main", "")
        .replace("/blob/main", "");

    match Url::parse(&rewritten) {
        Ok(raw) => raw,
        Err(_) => url.clone(),
    }
}

/// Derives a human-readable title from a markdown file name
///
/// `getting-started.md` becomes `Getting Started`.
fn title_from_filename(url: &Url) -> String {
    let name = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");
    let stem = name.strip_suffix(".md").unwrap_or(name);

    stem.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_is_markdown_url() {
        assert!(is_markdown_url(&url("https://example.com/docs/readme.md")));
        assert!(!is_markdown_url(&url("https://example.com/docs/readme")));
        assert!(!is_markdown_url(&url("https://example.com/docs/readme.html")));
    }

    #[test]
    fn test_raw_markdown_url_rewrites_blob() {
        let raw = raw_markdown_url(&url("https://github.com/user/repo/blob/main/docs/intro.md"));
        assert_eq!(
            raw.as_str(),
            "https://raw.githubusercontent.com/user/repo/docs/intro.md"
        );
    }

    #[test]
    fn test_raw_markdown_url_rewrites_tree() {
        let raw = raw_markdown_url(&url("https://github.com/user/repo/tree/main/README.md"));
        assert_eq!(
            raw.as_str(),
            "https://raw.githubusercontent.com/user/repo/README.md"
        );
    }

    #[test]
    fn test_raw_markdown_url_leaves_other_hosts() {
        let original = url("https://example.com/docs/notes.md");
        assert_eq!(raw_markdown_url(&original), original);
    }

    #[test]
    fn test_title_from_filename() {
        assert_eq!(
            title_from_filename(&url("https://example.com/docs/getting-started.md")),
            "Getting Started"
        );
    }

    #[test]
    fn test_title_from_filename_single_word() {
        assert_eq!(
            title_from_filename(&url("https://example.com/README.md")),
            "Readme"
        );
    }
}
