use serde::{Deserialize, Serialize};

use crate::content::Align;

/// Background applied to runs marked `highlight: true`.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fef08a";

/// Rendering knobs shared by every renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Alignment used when a block has no usable `meta.align`.
    pub default_align: Align,
    /// Background color for `highlight: true` runs.
    pub highlight_color: String,
    /// Escape text content and link targets. Off by default: editor text
    /// is emitted verbatim, so untrusted content must be sanitized by the
    /// caller unless this is enabled.
    pub escape_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_align: Align::Right,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            escape_text: false,
        }
    }
}

impl RenderOptions {
    /// Text content as it should appear in markup.
    pub(crate) fn text<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        if self.escape_text {
            html_escape::encode_text(text)
        } else {
            text.into()
        }
    }

    /// Value for a double-quoted attribute.
    pub(crate) fn attr<'a>(&self, value: &'a str) -> std::borrow::Cow<'a, str> {
        if self.escape_text {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            value.into()
        }
    }
}
