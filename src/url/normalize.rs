use url::Url;

/// Returns a copy of the URL with any fragment (`#...`) removed
///
/// Two URLs that differ only in their fragment refer to the same document,
/// so every comparison, set membership test, and storage operation in the
/// crawler works on fragment-stripped URLs.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docmirror::url::strip_fragment;
///
/// let url = Url::parse("https://example.com/docs/page#section-3").unwrap();
/// assert_eq!(strip_fragment(&url).as_str(), "https://example.com/docs/page");
/// ```
pub fn strip_fragment(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_fragment(None);
    stripped
}

/// Parses a URL string and strips its fragment in one step
///
/// # Arguments
///
/// * `input` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - The parsed, fragment-free URL
/// * `Err(url::ParseError)` - The string is not a valid absolute URL
pub fn parse_normalized(input: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(input)?;
    Ok(strip_fragment(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fragment() {
        let url = Url::parse("https://example.com/page#intro").unwrap();
        assert_eq!(strip_fragment(&url).as_str(), "https://example.com/page");
    }

    #[test]
    fn test_strip_fragment_noop_without_fragment() {
        let url = Url::parse("https://example.com/page").unwrap();
        assert_eq!(strip_fragment(&url), url);
    }

    #[test]
    fn test_strip_fragment_keeps_query() {
        let url = Url::parse("https://example.com/page?tab=api#usage").unwrap();
        assert_eq!(
            strip_fragment(&url).as_str(),
            "https://example.com/page?tab=api"
        );
    }

    #[test]
    fn test_fragment_only_difference_is_identity() {
        let a = parse_normalized("https://example.com/docs#a").unwrap();
        let b = parse_normalized("https://example.com/docs#b").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_normalized_rejects_relative() {
        assert!(parse_normalized("/docs/page").is_err());
        assert!(parse_normalized("not a url").is_err());
    }
}
