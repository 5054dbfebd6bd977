//! Content classification.
//!
//! Persisted document fields hold either markup, a serialized block map,
//! or legacy plain text. Classification is heuristic: the block-tree test
//! only samples the first entry of a map, so a map whose first entry looks
//! like a block is accepted even if later entries do not. This is a known
//! approximation and is kept as-is.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ParseError, ParseResult};
use super::models::BlockMap;

/// Kind of content held by a document field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentType {
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "yoopta-like")]
    BlockTree,
    #[serde(rename = "plain")]
    Plain,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::BlockTree => "yoopta-like",
            Self::Plain => "plain",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified content, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedContent {
    Html(String),
    Blocks(BlockMap),
    Plain(String),
}

impl ParsedContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Html(_) => ContentType::Html,
            Self::Blocks(_) => ContentType::BlockTree,
            Self::Plain(_) => ContentType::Plain,
        }
    }
}

/// Shape test for a block map: a non-empty object whose first entry (in
/// key order) is an object carrying `id`, `type` and `value`.
pub fn is_block_tree(value: &Value) -> bool {
    value.as_object().is_some_and(first_entry_is_block)
}

fn first_entry_is_block(map: &Map<String, Value>) -> bool {
    map.values()
        .next()
        .and_then(|first| first.as_object())
        .is_some_and(|first| {
            first.contains_key("id") && first.contains_key("type") && first.contains_key("value")
        })
}

/// Markup heuristic: trimmed text starts with `<` and has a `>` after it.
/// Well-formedness is not checked.
fn looks_like_html(text: &str) -> bool {
    text.trim()
        .strip_prefix('<')
        .is_some_and(|rest| rest.contains('>'))
}

/// Classify a content value without building a block map.
pub fn detect_content_type(content: &Value) -> ContentType {
    match content {
        Value::String(text) => detect_str(text),
        other if is_block_tree(other) => ContentType::BlockTree,
        _ => ContentType::Unknown,
    }
}

/// Classify a raw string field.
pub fn detect_str(text: &str) -> ContentType {
    if text.is_empty() {
        return ContentType::Unknown;
    }
    if looks_like_html(text) {
        return ContentType::Html;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) if is_block_tree(&value) => ContentType::BlockTree,
        _ => ContentType::Plain,
    }
}

/// Classify and parse a content value in one pass.
///
/// Returns an error only for content that is unclassifiable; callers map
/// that to their own fallback.
pub fn parse_content(content: &Value) -> ParseResult<ParsedContent> {
    match content {
        Value::Null => Err(ParseError::Empty),
        Value::String(text) => parse_str(text),
        Value::Object(map) if first_entry_is_block(map) => {
            Ok(ParsedContent::Blocks(BlockMap::from_map(map)))
        }
        Value::Object(map) if map.is_empty() => Err(ParseError::Empty),
        Value::Object(_) => Err(ParseError::Unsupported("object")),
        Value::Array(_) => Err(ParseError::Unsupported("array")),
        Value::Bool(_) => Err(ParseError::Unsupported("boolean")),
        Value::Number(_) => Err(ParseError::Unsupported("number")),
    }
}

/// String variant of [`parse_content`].
pub fn parse_str(text: &str) -> ParseResult<ParsedContent> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    if looks_like_html(text) {
        return Ok(ParsedContent::Html(text.to_string()));
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) if first_entry_is_block(&map) => {
            Ok(ParsedContent::Blocks(BlockMap::from_map(&map)))
        }
        _ => Ok(ParsedContent::Plain(text.to_string())),
    }
}
