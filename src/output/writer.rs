//! Persistence writer
//!
//! Maps a URL onto a deterministic on-disk path that mirrors the URL's
//! path segments under a title-derived root directory, and writes rendered
//! Markdown there.

use crate::config::Config;
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable that overrides the docs root for a crawl
pub const DOCS_DIR_ENV: &str = "DOCMIRROR_DOCS_DIR";

/// Resolves the docs root directory for a crawl
///
/// Read once per crawl invocation: the `DOCMIRROR_DOCS_DIR` environment
/// variable wins, otherwise the configured `output.docs-dir` is used.
pub fn docs_root(config: &Config) -> PathBuf {
    match std::env::var(DOCS_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(&config.output.docs_dir),
    }
}

/// Sanitizes a page title into a directory name
///
/// Keeps alphanumerics, spaces, hyphens, and underscores; every other
/// character becomes an underscore.
///
/// # Examples
///
/// ```
/// use docmirror::output::sanitize_title;
///
/// assert_eq!(sanitize_title("Tokio - An async runtime"), "Tokio - An async runtime");
/// assert_eq!(sanitize_title("Docs / v2.1"), "Docs _ v2_1");
/// ```
pub fn sanitize_title(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Writes page content to its mirrored location under the docs root
///
/// The relative file path is derived from the URL's path segments. If the
/// last segment contains a dot its extension is stripped; an empty path
/// maps to `index`. The final segment gets a `.md` extension. Intermediate
/// directories are created as needed and an existing file at the same path
/// is overwritten unconditionally.
///
/// # Arguments
///
/// * `root` - The docs root directory for this crawl
/// * `base_title` - The sanitized seed-page title (top-level directory)
/// * `url` - The page URL being mirrored
/// * `content` - The rendered Markdown to write
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path of the written file
/// * `Err(std::io::Error)` - Directory creation or the write failed
pub fn save_page(
    root: &Path,
    base_title: &str,
    url: &Url,
    content: &str,
) -> std::io::Result<PathBuf> {
    let relative = mirrored_path(url);
    let full_path = root.join(base_title).join(relative);

    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&full_path, content)?;
    tracing::info!("Saved: {}", full_path.display());
    Ok(full_path)
}

/// Derives the relative mirror path for a URL
fn mirrored_path(url: &Url) -> PathBuf {
    let mut parts: Vec<String> = url
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(last) = parts.last_mut() {
        if let Some(dot) = last.rfind('.') {
            last.truncate(dot);
        }
    }

    if parts.is_empty() {
        parts.push("index".to_string());
    }

    if let Some(last) = parts.last_mut() {
        last.push_str(".md");
    }

    parts.iter().collect()
}
