//! HTML parsing for the page transformer
//!
//! This module handles parsing fetched HTML to extract:
//! - The page title
//! - The main content region (ordered selector list, first match wins)
//! - All hyperlinks, resolved against the page URL

use crate::url::strip_fragment;
use scraper::{Html, Selector};
use url::Url;

/// Selectors tried in order when locating a page's main content region
///
/// The first selector with a match wins. Semantic containers come first,
/// then the common content-class conventions. Extending the heuristic
/// means appending to this list, not adding conditionals.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=\"main\"]",
    ".content",
    ".post-content",
    ".entry-content",
    ".markdown-body",
    "#content",
    "#main-content",
    ".api-content",
];

/// Extracted information from an HTML page
///
/// All fields are owned so the parsed DOM (which is not `Send`) never has
/// to cross an await point.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the `<title>` tag)
    pub title: Option<String>,

    /// Outer HTML of the main content region, if one was found
    pub main_content: Option<String>,

    /// Every link on the page, resolved to an absolute fragment-free URL
    pub links: Vec<Url>,
}

/// Parses an HTML page and extracts title, main content, and links
///
/// Link extraction walks the *entire* document, not just the main content
/// region; pages without a recognizable content region still contribute
/// their links to the crawl.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The URL the page was fetched from (for resolving relative links)
pub fn parse_page(html: &str, page_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: title_of(&document),
        main_content: find_main_content(&document),
        links: extract_links(&document, page_url),
    }
}

/// Extracts just the `<title>` text from an HTML document
///
/// Used for the seed page, whose title names the output directory.
pub fn extract_title(html: &str) -> Option<String> {
    title_of(&Html::parse_document(html))
}

fn title_of(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Finds the first main-content region via the ordered selector list
fn find_main_content(document: &Html) -> Option<String> {
    for selector_str in MAIN_CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                return Some(element.html());
            }
        }
    }
    None
}

/// Extracts all valid links from the HTML document
fn extract_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_link(href, page_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute, fragment-free URL
///
/// Returns None for links that are never crawlable:
/// - `javascript:`, `mailto:`, `tel:` schemes and data URIs
/// - Fragment-only links (same page anchors)
/// - Unparseable hrefs and non-HTTP(S) results
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(strip_fragment(&absolute))
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/docs/page").unwrap()
    }

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        assert_eq!(extract_title(html), Some("Test Page".to_string()));
    }

    #[test]
    fn test_extract_title_with_whitespace() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        assert_eq!(extract_title(html), Some("Test Page".to_string()));
    }

    #[test]
    fn test_no_title() {
        let html = r#"<html><head></head><body></body></html>"#;
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn test_main_element_wins() {
        let html = r#"<html><body><main><p>Main text</p></main><div class="content">Other</div></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.main_content.unwrap().contains("Main text"));
    }

    #[test]
    fn test_article_fallback() {
        let html = r#"<html><body><article><p>Article text</p></article></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.main_content.unwrap().contains("Article text"));
    }

    #[test]
    fn test_role_main_fallback() {
        let html = r#"<html><body><div role="main"><p>Role text</p></div></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.main_content.unwrap().contains("Role text"));
    }

    #[test]
    fn test_content_class_fallback() {
        let html = r#"<html><body><div class="markdown-body"><p>Rendered</p></div></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.main_content.unwrap().contains("Rendered"));
    }

    #[test]
    fn test_no_main_content() {
        let html = r#"<html><body><div><p>Just a div</p></div></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.main_content.is_none());
    }

    #[test]
    fn test_selector_order_is_fixed() {
        // article appears before .content in the document, but main-content
        // selection follows the selector list order, not document order
        let html = r#"<html><body><div class="content">Class</div><article>Semantic</article></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.main_content.unwrap().contains("Semantic"));
    }

    #[test]
    fn test_links_from_whole_page_not_just_main() {
        let html = r#"<html><body>
            <nav><a href="/docs/nav-target">Nav</a></nav>
            <main><a href="/docs/main-target">Main</a></main>
        </body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert_eq!(parsed.links.len(), 2);
    }

    #[test]
    fn test_relative_link_resolution() {
        let html = r#"<html><body><a href="other">Link</a></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert_eq!(parsed.links[0].as_str(), "https://example.com/docs/other");
    }

    #[test]
    fn test_link_fragments_stripped() {
        let html = r#"<html><body><a href="/docs/page#section">Link</a></body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert_eq!(parsed.links[0].as_str(), "https://example.com/docs/page");
    }

    #[test]
    fn test_skip_special_schemes() {
        let html = r#"<html><body>
            <a href="javascript:void(0)">JS</a>
            <a href="mailto:x@example.com">Mail</a>
            <a href="tel:+123">Tel</a>
            <a href="data:text/html,hi">Data</a>
        </body></html>"#;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_skip_fragment_only_links() {
        let html = r##"<html><body><a href="#top">Top</a></body></html>"##;
        let parsed = parse_page(html, &page_url());
        assert!(parsed.links.is_empty());
    }
}
