//! Block-tree to markup rendering.

mod block;
mod document;
mod inline;
mod options;

pub use block::{block_align, render_block, BlockKind};
pub use document::{render_blocks, render_document, render_plain_paragraph};
pub use inline::{render_group, render_text_node};
pub use options::{RenderOptions, DEFAULT_HIGHLIGHT_COLOR};
