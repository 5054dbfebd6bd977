use crate::content::{Highlight, InlineRunGroup, TextNode};

use super::options::RenderOptions;

/// Render a text node to a markup fragment.
///
/// A node with children is a pure container: its own text and flags are
/// ignored and its children are rendered in order. Empty leaves render to
/// nothing.
pub fn render_text_node(node: &TextNode, options: &RenderOptions) -> String {
    if !node.children.is_empty() {
        return node
            .children
            .iter()
            .map(|child| render_text_node(child, options))
            .collect();
    }

    let text = node.text.as_deref().unwrap_or_default();
    if text.is_empty() {
        return String::new();
    }

    let mut html = options.text(text).into_owned();
    if node.code {
        html = format!("<code>{}</code>", html);
    }
    if node.bold {
        html = format!("<strong>{}</strong>", html);
    }
    if node.italic {
        html = format!("<em>{}</em>", html);
    }
    if node.underline {
        html = format!("<u>{}</u>", html);
    }
    if node.strike {
        html = format!("<s>{}</s>", html);
    }

    let mut styles = Vec::new();
    if let Some(color) = &node.color {
        styles.push(format!("color: {}", color));
    }
    match &node.highlight {
        Highlight::None => {}
        Highlight::Default => styles.push(format!("background-color: {}", options.highlight_color)),
        Highlight::Color(color) => styles.push(format!("background-color: {}", color)),
    }

    if styles.is_empty() {
        html
    } else {
        format!(
            "<span style=\"{}\">{}</span>",
            options.attr(&styles.join("; ")),
            html
        )
    }
}

/// Render every run of a group, concatenated.
pub fn render_group(group: &InlineRunGroup, options: &RenderOptions) -> String {
    group
        .children
        .iter()
        .map(|node| render_text_node(node, options))
        .collect()
}
