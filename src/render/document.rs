use serde_json::Value;

use crate::content::BlockMap;

use super::block::render_block;
use super::options::RenderOptions;

/// Render a serialized block map. Text that is not JSON is treated as plain
/// text and wrapped in a single paragraph.
pub fn render_document(content: &str, options: &RenderOptions) -> String {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => render_blocks(&BlockMap::from_map(&map), options),
        Ok(_) => String::new(),
        Err(e) => {
            log::debug!("Content is not JSON ({}), rendering as plain text", e);
            render_plain_paragraph(content, options)
        }
    }
}

/// Render every block in reading order, newline-separated.
pub fn render_blocks(blocks: &BlockMap, options: &RenderOptions) -> String {
    blocks
        .sorted()
        .into_iter()
        .map(|block| render_block(block, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap raw text in one right-to-left paragraph using the default alignment.
pub fn render_plain_paragraph(text: &str, options: &RenderOptions) -> String {
    format!(
        "<p style=\"text-align: {}\" dir=\"rtl\">{}</p>",
        options.default_align.as_str(),
        options.text(text)
    )
}
