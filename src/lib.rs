//! Docmirror: a documentation-harvesting crawler
//!
//! This crate implements a crawler that mirrors a documentation site into a
//! local directory tree of Markdown files, confined to the seed URL's path
//! prefix. GitHub repository URLs are handled by downloading and unpacking
//! a ZIP snapshot instead of crawling page-by-page.

pub mod archive;
pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for docmirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch seed page {url}: {reason}")]
    SeedFetch { url: String, reason: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while processing a repository archive
///
/// Every variant is recovered inside the archive job itself; none of them
/// abort the surrounding crawl.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Not a recognizable repository URL: {0}")]
    InvalidUrl(String),

    #[error("Archive download from {url} failed with status {status}")]
    Download { url: String, status: u16 },

    #[error("Archive download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to extract archive: {0}")]
    Extract(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docmirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for archive operations
pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlStats, PageResult};
pub use url::{in_scope, parse_normalized, strip_fragment};
