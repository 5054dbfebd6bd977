use std::fmt;

use crate::content::{Align, Block};

use super::inline::render_group;
use super::options::RenderOptions;

const CHECKED_GLYPH: &str = "\u{2713}";
const UNCHECKED_GLYPH: &str = "\u{2610}";
const CALLOUT_STYLE: &str =
    "background-color: #f3f4f6; border-right: 4px solid #3b82f6; padding: 12px; border-radius: 4px";

/// Canonical block kinds understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    BulletedList,
    NumberedList,
    TodoList,
    Blockquote,
    Callout,
    Code,
    Divider,
    Link,
}

/// Every accepted type name, PascalCase and kebab-case, lowercased.
const TYPE_ALIASES: &[(&str, BlockKind)] = &[
    ("paragraph", BlockKind::Paragraph),
    ("headingone", BlockKind::Heading(1)),
    ("heading-one", BlockKind::Heading(1)),
    ("headingtwo", BlockKind::Heading(2)),
    ("heading-two", BlockKind::Heading(2)),
    ("headingthree", BlockKind::Heading(3)),
    ("heading-three", BlockKind::Heading(3)),
    ("bulletedlist", BlockKind::BulletedList),
    ("bulleted-list", BlockKind::BulletedList),
    ("numberedlist", BlockKind::NumberedList),
    ("numbered-list", BlockKind::NumberedList),
    ("todolist", BlockKind::TodoList),
    ("todo-list", BlockKind::TodoList),
    ("blockquote", BlockKind::Blockquote),
    ("callout", BlockKind::Callout),
    ("code", BlockKind::Code),
    ("divider", BlockKind::Divider),
    ("link", BlockKind::Link),
];

impl BlockKind {
    /// Resolve an editor type name, case-insensitively. Unknown names map
    /// to `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim();
        TYPE_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }

    /// Resolve with the paragraph fallback used for rendering.
    pub fn resolve(name: &str) -> Self {
        Self::from_type_name(name).unwrap_or_else(|| {
            log::debug!("Unknown block type {:?}, rendering as paragraph", name);
            Self::Paragraph
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading(1) => "heading-one",
            Self::Heading(2) => "heading-two",
            Self::Heading(_) => "heading-three",
            Self::BulletedList => "bulleted-list",
            Self::NumberedList => "numbered-list",
            Self::TodoList => "todo-list",
            Self::Blockquote => "blockquote",
            Self::Callout => "callout",
            Self::Code => "code",
            Self::Divider => "divider",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective alignment of a block under the given options.
pub fn block_align(block: &Block, options: &RenderOptions) -> Align {
    block.meta.align.unwrap_or(options.default_align)
}

/// Render a single block to a markup fragment. Never fails: malformed
/// blocks degrade to right alignment, `#` links and the paragraph rule.
pub fn render_block(block: &Block, options: &RenderOptions) -> String {
    let align = format!("text-align: {}", block_align(block, options).as_str());
    let content: String = block
        .value
        .iter()
        .map(|group| render_group(group, options))
        .collect();

    match BlockKind::resolve(&block.block_type) {
        BlockKind::Paragraph => render_paragraph(&align, &content),
        BlockKind::Heading(level) => format!(
            "<h{l} style=\"{align}\" dir=\"rtl\">{content}</h{l}>",
            l = level,
            align = align,
            content = content
        ),
        BlockKind::BulletedList => render_list("ul", &align, &content),
        BlockKind::NumberedList => render_list("ol", &align, &content),
        BlockKind::TodoList => {
            let checked = block
                .first_group()
                .and_then(|g| g.prop_bool("checked"))
                .unwrap_or(false);
            let glyph = if checked { CHECKED_GLYPH } else { UNCHECKED_GLYPH };
            render_paragraph(&align, &format!("{} {}", glyph, content))
        }
        BlockKind::Blockquote => format!(
            "<blockquote class=\"blockquote\" style=\"{}\" dir=\"rtl\">{}</blockquote>",
            align, content
        ),
        BlockKind::Callout => format!(
            "<div class=\"callout\" style=\"{}; {}\" dir=\"rtl\">{}</div>",
            align, CALLOUT_STYLE, content
        ),
        BlockKind::Code => format!("<pre><code>{}</code></pre>", content),
        BlockKind::Divider => "<hr />".to_string(),
        BlockKind::Link => {
            let url = block
                .first_group()
                .and_then(|g| g.prop_str("url"))
                .filter(|u| !u.is_empty())
                .unwrap_or("#");
            let label = if content.is_empty() {
                options.text(url).into_owned()
            } else {
                content
            };
            format!(
                "<p style=\"{}\" dir=\"rtl\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
                align,
                options.attr(url),
                label
            )
        }
    }
}

fn render_paragraph(align: &str, content: &str) -> String {
    let body = if content.is_empty() { "<br />" } else { content };
    format!("<p style=\"{}\" dir=\"rtl\">{}</p>", align, body)
}

/// Each list block is its own one-item list; adjacent items are not merged.
fn render_list(tag: &str, align: &str, content: &str) -> String {
    format!(
        "<{tag} style=\"{align}\" dir=\"rtl\"><li>{content}</li></{tag}>",
        tag = tag,
        align = align,
        content = content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlockMeta, InlineRunGroup, TextNode};
    use serde_json::json;

    fn block(block_type: &str, text: &str) -> Block {
        let mut block = Block::new("b1", block_type);
        block.value = vec![InlineRunGroup::new(vec![TextNode::text(text)])];
        block
    }

    fn render(block: &Block) -> String {
        render_block(block, &RenderOptions::default())
    }

    #[test]
    fn test_alias_table_accepts_both_conventions() {
        assert_eq!(BlockKind::from_type_name("HeadingTwo"), Some(BlockKind::Heading(2)));
        assert_eq!(BlockKind::from_type_name("heading-two"), Some(BlockKind::Heading(2)));
        assert_eq!(BlockKind::from_type_name("BULLETEDLIST"), Some(BlockKind::BulletedList));
        assert_eq!(BlockKind::from_type_name("todo-list"), Some(BlockKind::TodoList));
        assert_eq!(BlockKind::from_type_name("UnknownX"), None);
    }

    #[test]
    fn test_paragraph_defaults_to_right_rtl() {
        assert_eq!(
            render(&block("Paragraph", "hello")),
            "<p style=\"text-align: right\" dir=\"rtl\">hello</p>"
        );
    }

    #[test]
    fn test_paragraph_respects_align() {
        let mut b = block("Paragraph", "x");
        b.meta = BlockMeta {
            order: 0,
            align: Some(Align::Center),
        };
        assert!(render(&b).contains("text-align: center"));
    }

    #[test]
    fn test_empty_paragraph_keeps_line_break() {
        let b = Block::new("b1", "Paragraph");
        let html = render(&b);
        assert!(html.contains("<br />"));
    }

    #[test]
    fn test_empty_heading_has_no_placeholder() {
        let b = Block::new("b1", "HeadingOne");
        assert_eq!(render(&b), "<h1 style=\"text-align: right\" dir=\"rtl\"></h1>");
    }

    #[test]
    fn test_heading_levels() {
        assert!(render(&block("heading-three", "t")).starts_with("<h3 "));
        assert!(render(&block("HeadingTwo", "t")).starts_with("<h2 "));
    }

    #[test]
    fn test_list_items_are_single_item_lists() {
        assert_eq!(
            render(&block("BulletedList", "a")),
            "<ul style=\"text-align: right\" dir=\"rtl\"><li>a</li></ul>"
        );
        assert!(render(&block("numbered-list", "a")).starts_with("<ol "));
    }

    #[test]
    fn test_todo_glyphs() {
        let mut b = block("TodoList", "task");
        assert!(render(&b).contains("\u{2610} task"));

        b.value[0].props = Some(json!({ "checked": true }));
        assert!(render(&b).contains("\u{2713} task"));
    }

    #[test]
    fn test_blockquote_and_callout_markers() {
        let quote = render(&block("Blockquote", "q"));
        assert!(quote.starts_with("<blockquote class=\"blockquote\""));
        assert!(quote.contains("dir=\"rtl\""));

        let callout = render(&block("callout", "c"));
        assert!(callout.starts_with("<div class=\"callout\""));
        assert!(callout.contains("background-color"));
    }

    #[test]
    fn test_code_ignores_alignment() {
        let mut b = block("Code", "let x = 1;");
        b.meta.align = Some(Align::Left);
        assert_eq!(render(&b), "<pre><code>let x = 1;</code></pre>");
    }

    #[test]
    fn test_divider_ignores_content_and_align() {
        let mut b = block("Divider", "ignored");
        b.meta.align = Some(Align::Center);
        assert_eq!(render(&b), "<hr />");
    }

    #[test]
    fn test_link_uses_url_prop() {
        let mut b = block("Link", "docs");
        b.value[0].props = Some(json!({ "url": "https://example.com" }));
        let html = render(&b);
        assert!(html.contains("href=\"https://example.com\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains(">docs</a>"));
    }

    #[test]
    fn test_link_without_text_shows_url() {
        let mut b = Block::new("b1", "link");
        b.value = vec![InlineRunGroup {
            children: vec![],
            props: Some(json!({ "url": "https://example.com" })),
        }];
        assert!(render(&b).contains(">https://example.com</a>"));
    }

    #[test]
    fn test_link_without_props_defaults_to_hash() {
        let html = render(&Block::new("b1", "Link"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains(">#</a>"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_paragraph() {
        assert_eq!(
            render(&block("UnknownX", "still here")),
            "<p style=\"text-align: right\" dir=\"rtl\">still here</p>"
        );
    }

    #[test]
    fn test_default_align_option() {
        let options = RenderOptions {
            default_align: Align::Left,
            ..Default::default()
        };
        assert!(render_block(&block("Paragraph", "x"), &options).contains("text-align: left"));
    }
}
