use anyhow::{bail, Result};
use serde::Serialize;

use blockmark_lib::content::{parse_str, ParsedContent};
use blockmark_lib::html_to_plain_text;
use blockmark_lib::render::{block_align, render_block, BlockKind};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRow {
    pub id: String,
    pub order: i64,
    pub kind: String,
    pub align: String,
    pub preview: String,
}

pub fn run(app: &App, content: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let blocks = match parse_str(content) {
        Ok(ParsedContent::Blocks(blocks)) => blocks,
        Ok(other) => bail!("Input is not a block map (detected {})", other.content_type()),
        Err(e) => bail!("Input is not a block map: {}", e),
    };

    let options = app.converter.options();
    let rows: Vec<BlockRow> = blocks
        .sorted()
        .into_iter()
        .map(|block| BlockRow {
            id: block.id.clone(),
            order: block.meta.order,
            kind: BlockKind::resolve(&block.block_type).to_string(),
            align: block_align(block, options).as_str().to_string(),
            preview: preview(&html_to_plain_text(&render_block(block, options))),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => {
            println!("{}", terminal::render_rows(&rows, use_color));
            println!("\n{} blocks total", rows.len());
        }
    }

    Ok(())
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}\u{2026}", cut)
}
