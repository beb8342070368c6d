// Utility functions
use scraper::Html;

/// Escapes text for insertion into an HTML fragment, quotes included.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Text content of an HTML fragment with entities decoded, for terminal output.
pub fn html_to_text(html: &str) -> String {
    Html::parse_fragment(html)
        .root_element()
        .text()
        .collect::<String>()
}
