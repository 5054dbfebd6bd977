//! Conversion of stored rich-text document content to markup and plain text.
//!
//! Document fields arrive as markup, as a serialized block map produced by
//! the block editor, or as legacy plain text. [`convert_to_html`] and
//! [`extract_plain_text`] accept any of these and never fail.
//!
//! Text runs are emitted without escaping unless
//! [`RenderOptions::escape_text`] is set. Output built from untrusted editor
//! content must be sanitized before it is injected into a page.

pub mod config;
pub mod content;
pub mod convert;
pub mod render;
pub mod text;

pub use content::{detect_content_type, ContentType};
pub use convert::{convert_to_html, extract_plain_text, Converter};
pub use render::RenderOptions;
pub use text::html_to_plain_text;
