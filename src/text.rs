//! Plain-text extraction from rendered markup.
//!
//! This is a lossy stripper meant for search indexing. It does not drop
//! script/style contents and only knows five named entities, so it must not
//! be used for sanitization.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Strip tags, decode the basic entities and normalize whitespace.
pub fn html_to_plain_text(html: &str) -> String {
    // Tags become spaces so adjacent block contents do not run together
    let text = tag_re().replace_all(html, " ");

    // Fixed decode order: "&amp;lt;" ends up as "<"
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");

    space_re().replace_all(&text, " ").trim().to_string()
}
