//! URL handling module for docmirror
//!
//! This module provides fragment-stripping normalization and the crawl
//! scope check (scheme + host + path-prefix).

mod normalize;
mod scope;

pub use normalize::{parse_normalized, strip_fragment};
pub use scope::in_scope;
