pub mod detect;
mod error;
mod models;

pub use detect::{
    detect_content_type, detect_str, is_block_tree, parse_content, parse_str, ContentType,
    ParsedContent,
};
pub use error::{ParseError, ParseResult};
pub use models::*;
