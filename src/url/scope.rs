use url::Url;

/// Checks whether a candidate URL is in-bounds for the current crawl
///
/// A candidate is in scope iff its scheme and host both match the base URL
/// and its path starts with the base URL's path.
///
/// The path comparison is a raw string prefix test, not a path-segment
/// test: a base path of `/docs` also matches `/docs-old/x`. This is a
/// known, accepted limitation kept for compatibility with the observed
/// crawl boundaries; do not "fix" it to a segment-aware check.
///
/// Callers must strip the candidate's fragment before the check (fragments
/// never distinguish documents).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docmirror::url::in_scope;
///
/// let base = Url::parse("https://example.com/docs").unwrap();
///
/// let deeper = Url::parse("https://example.com/docs/guide/intro").unwrap();
/// assert!(in_scope(&base, &deeper));
///
/// let sibling = Url::parse("https://example.com/blog").unwrap();
/// assert!(!in_scope(&base, &sibling));
/// ```
pub fn in_scope(base: &Url, candidate: &Url) -> bool {
    base.scheme() == candidate.scheme()
        && base.host_str() == candidate.host_str()
        && candidate.path().starts_with(base.path())
}
