//! Configuration module for docmirror
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use docmirror::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("docmirror.toml")).unwrap();
//! println!("Crawl will use {} workers", config.crawler.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, DEFAULT_DOCS_DIR};

// Re-export parser functions
pub use parser::load_config;
