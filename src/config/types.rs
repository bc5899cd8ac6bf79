use serde::Deserialize;

/// Default directory that receives mirrored documentation, relative to the
/// working directory. Overridable per crawl via `DOCMIRROR_DOCS_DIR`.
pub const DEFAULT_DOCS_DIR: &str = ".docmirror/docs";

/// Main configuration structure for docmirror
///
/// Every field has a default, so the tool runs without a config file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of concurrent page fetches per round
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory for mirrored documentation trees
    #[serde(rename = "docs-dir", default = "default_docs_dir")]
    pub docs_dir: String,
}

fn default_max_workers() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_docs_dir() -> String {
    DEFAULT_DOCS_DIR.to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
        }
    }
}
