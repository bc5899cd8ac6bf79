//! HTML to Markdown conversion
//!
//! Wraps the `htmd` converter and applies the post-processing this system
//! needs: emphasis markers inside prose (`*`, `_`) are kept literal rather
//! than backslash-escaped, because the mirrored files are meant to be read
//! as Markdown source.

use htmd::HtmlToMarkdown;

/// Converts an HTML fragment to Markdown text
///
/// Script and style elements are dropped. Backslash escapes that `htmd`
/// places before `*` and `_` are removed afterwards; the converter itself
/// has no switch for that.
///
/// # Arguments
///
/// * `html` - The HTML fragment to convert (typically a main-content region)
///
/// # Returns
///
/// * `Ok(String)` - The converted Markdown
/// * `Err(anyhow::Error)` - The converter failed on this fragment
pub fn convert_html(html: &str) -> anyhow::Result<String> {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .build();

    let markdown = converter.convert(html)?;
    Ok(unescape_emphasis(&markdown))
}

/// Removes backslash escapes before emphasis-marker characters
fn unescape_emphasis(markdown: &str) -> String {
    markdown.replace("\\*", "*").replace("\\_", "_")
}
