//! Output module for rendering and persisting mirrored pages
//!
//! This module handles:
//! - HTML to Markdown conversion (via `htmd`)
//! - Mapping URLs to mirrored on-disk paths
//! - Writing files under the title-derived output tree

mod markdown;
mod writer;

pub use markdown::convert_html;
pub use writer::{docs_root, sanitize_title, save_page, DOCS_DIR_ENV};
