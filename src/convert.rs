//! Public conversion entry points.
//!
//! Conversion never fails. Unclassifiable values come back as an empty
//! string, or as the raw text when the value is a string.

use serde_json::Value;

use crate::content::{detect_content_type, parse_content, ContentType, ParsedContent};
use crate::render::{render_blocks, render_plain_paragraph, RenderOptions};
use crate::text::html_to_plain_text;

/// Converts stored document content to markup or plain text.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: RenderOptions,
}

impl Converter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn detect(&self, content: &Value) -> ContentType {
        detect_content_type(content)
    }

    /// Convert any stored content to markup. Markup input is returned
    /// unchanged.
    pub fn convert_to_html(&self, content: &Value) -> String {
        match parse_content(content) {
            Ok(ParsedContent::Html(html)) => html,
            Ok(ParsedContent::Blocks(blocks)) => render_blocks(&blocks, &self.options),
            Ok(ParsedContent::Plain(text)) => render_plain_paragraph(&text, &self.options),
            Err(e) => {
                log::debug!("Unclassified content: {}", e);
                raw_fallback(content)
            }
        }
    }

    /// Extract searchable text from any stored content. Plain text is
    /// returned unchanged.
    pub fn extract_plain_text(&self, content: &Value) -> String {
        match parse_content(content) {
            Ok(ParsedContent::Html(html)) => html_to_plain_text(&html),
            Ok(ParsedContent::Blocks(blocks)) => {
                html_to_plain_text(&render_blocks(&blocks, &self.options))
            }
            Ok(ParsedContent::Plain(text)) => text,
            Err(e) => {
                log::debug!("Unclassified content: {}", e);
                raw_fallback(content)
            }
        }
    }

    pub fn convert_str(&self, content: &str) -> String {
        self.convert_to_html(&Value::String(content.to_string()))
    }

    pub fn extract_str(&self, content: &str) -> String {
        self.extract_plain_text(&Value::String(content.to_string()))
    }
}

fn raw_fallback(content: &Value) -> String {
    content.as_str().map(str::to_string).unwrap_or_default()
}

/// [`Converter::convert_to_html`] with default options.
pub fn convert_to_html(content: &Value) -> String {
    Converter::default().convert_to_html(content)
}

/// [`Converter::extract_plain_text`] with default options.
pub fn extract_plain_text(content: &Value) -> String {
    Converter::default().extract_plain_text(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hello_doc() -> Value {
        json!({
            "b1": {
                "id": "b1",
                "type": "Paragraph",
                "value": [{ "id": "v1", "type": "text", "children": [{ "text": "hello", "bold": true }] }],
                "meta": { "order": 0 }
            }
        })
    }

    fn mixed_doc() -> Value {
        json!({
            "c": {
                "id": "c",
                "type": "Divider",
                "value": [],
                "meta": { "order": 2, "align": "left" }
            },
            "a": {
                "id": "a",
                "type": "HeadingOne",
                "value": [{ "children": [{ "text": "Title" }] }],
                "meta": { "order": 0 }
            },
            "b": {
                "id": "b",
                "type": "todo-list",
                "value": [{ "children": [{ "text": "File brief &amp; exhibits" }], "props": { "checked": true } }],
                "meta": { "order": 1 }
            }
        })
    }

    #[test]
    fn test_bold_paragraph_scenario() {
        assert_eq!(
            convert_to_html(&hello_doc()),
            "<p style=\"text-align: right\" dir=\"rtl\"><strong>hello</strong></p>"
        );
    }

    #[test]
    fn test_serialized_document_matches_value() {
        let text = hello_doc().to_string();
        assert_eq!(
            Converter::default().convert_str(&text),
            convert_to_html(&hello_doc())
        );
    }

    #[test]
    fn test_plain_string_scenario() {
        let content = json!("note to self");
        assert_eq!(detect_content_type(&content), ContentType::Plain);
        assert_eq!(
            convert_to_html(&content),
            "<p style=\"text-align: right\" dir=\"rtl\">note to self</p>"
        );
    }

    #[test]
    fn test_html_is_passed_through() {
        let html = json!("<div><b>x</b></div>");
        assert_eq!(convert_to_html(&html), "<div><b>x</b></div>");
    }

    #[test]
    fn test_unknown_content() {
        assert_eq!(convert_to_html(&Value::Null), "");
        assert_eq!(convert_to_html(&json!(12)), "");
        assert_eq!(convert_to_html(&json!("")), "");
        assert_eq!(extract_plain_text(&json!([1])), "");
    }

    #[test]
    fn test_extract_plain_text_scenario() {
        assert_eq!(extract_plain_text(&json!("<p>A &amp; B</p>")), "A & B");
    }

    #[test]
    fn test_extract_plain_text_is_identity_for_plain() {
        assert_eq!(extract_plain_text(&json!("  raw  text ")), "  raw  text ");
    }

    #[test]
    fn test_extract_plain_text_from_blocks() {
        assert_eq!(
            extract_plain_text(&mixed_doc()),
            "Title \u{2713} File brief & exhibits"
        );
    }

    #[test]
    fn test_converted_output_is_html() {
        for content in [hello_doc(), mixed_doc(), json!("note"), json!("<p>x</p>")] {
            let html = convert_to_html(&content);
            assert_eq!(detect_content_type(&json!(html)), ContentType::Html);
        }
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let doc = mixed_doc();
        assert_eq!(convert_to_html(&doc), convert_to_html(&doc));
        assert_eq!(extract_plain_text(&doc), extract_plain_text(&doc));
    }

    #[test]
    fn test_divider_scenario() {
        let html = convert_to_html(&mixed_doc());
        assert_eq!(html.lines().last(), Some("<hr />"));
    }

    #[test]
    fn test_unknown_block_type_scenario() {
        let doc = json!({
            "x": {
                "id": "x",
                "type": "UnknownX",
                "value": [{ "children": [{ "text": "survives" }] }]
            }
        });
        assert_eq!(
            convert_to_html(&doc),
            "<p style=\"text-align: right\" dir=\"rtl\">survives</p>"
        );
    }

    #[test]
    fn test_converter_options_apply() {
        let converter = Converter::new(RenderOptions {
            escape_text: true,
            ..Default::default()
        });
        assert_eq!(
            converter.convert_str("a < b"),
            "<p style=\"text-align: right\" dir=\"rtl\">a &lt; b</p>"
        );
    }
}
