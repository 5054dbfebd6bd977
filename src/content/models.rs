use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Horizontal alignment of a block. The product is RTL-first, so the
/// default is `Right`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    #[default]
    Right,
}

impl Align {
    /// Parse an alignment name. Unknown names yield `None` so callers can
    /// apply their own default.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Background highlight of a text run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// `highlight: true`, rendered with the configured default color.
    Default,
    Color(String),
}

impl Highlight {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(true)) => Self::Default,
            Some(Value::String(color)) if !color.is_empty() => Self::Color(color.clone()),
            _ => Self::None,
        }
    }
}

/// A leaf or nested inline span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextNode {
    pub text: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub code: bool,
    pub highlight: Highlight,
    pub color: Option<String>,
    pub children: Vec<TextNode>,
}

impl TextNode {
    /// A plain leaf run with no formatting.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Build a node from editor JSON. Missing or mistyped fields fall back
    /// to their defaults; this never fails.
    pub fn from_value(value: &Value) -> Self {
        let flag = |key: &str| value.get(key).and_then(|v| v.as_bool()).unwrap_or(false);

        Self {
            text: value
                .get("text")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
            strike: flag("strike"),
            code: flag("code"),
            highlight: Highlight::from_value(value.get("highlight")),
            color: value
                .get("color")
                .and_then(|v| v.as_str())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            children: nodes_from_value(value.get("children")),
        }
    }
}

/// One element of a block's `value`: its inline runs plus the
/// block-type-specific `props` payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineRunGroup {
    pub children: Vec<TextNode>,
    pub props: Option<Value>,
}

impl InlineRunGroup {
    pub fn new(children: Vec<TextNode>) -> Self {
        Self {
            children,
            props: None,
        }
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            children: nodes_from_value(value.get("children")),
            props: value.get("props").filter(|p| p.is_object()).cloned(),
        }
    }

    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        self.props.as_ref()?.get(key)?.as_bool()
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.as_ref()?.get(key)?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockMeta {
    pub order: i64,
    /// `None` when the block carries no usable alignment.
    pub align: Option<Align>,
}

impl BlockMeta {
    fn from_value(value: Option<&Value>) -> Self {
        let Some(meta) = value else {
            return Self::default();
        };

        let order = meta
            .get("order")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .unwrap_or(0);
        let align = meta.get("align").and_then(|v| v.as_str()).and_then(Align::parse);

        Self { order, align }
    }
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub id: String,
    /// Raw editor type name, e.g. `Paragraph` or `heading-one`.
    pub block_type: String,
    pub value: Vec<InlineRunGroup>,
    pub meta: BlockMeta,
}

impl Block {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            ..Default::default()
        }
    }

    /// Build a block from editor JSON, falling back to `fallback_id` when
    /// the record carries no `id` of its own. Returns `None` only when the
    /// entry is not a JSON object at all.
    pub fn from_value(fallback_id: &str, value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        let id = record
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or(fallback_id)
            .to_string();
        let block_type = record
            .get("type")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let value = record
            .get("value")
            .and_then(|v| v.as_array())
            .map(|groups| groups.iter().map(InlineRunGroup::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            id,
            block_type,
            value,
            meta: BlockMeta::from_value(record.get("meta")),
        })
    }

    /// The first run group, which carries the block-level `props`.
    pub fn first_group(&self) -> Option<&InlineRunGroup> {
        self.value.first()
    }
}

/// A whole document: blocks keyed by id, kept in persisted key order.
/// Reading order comes from `meta.order`, see [`BlockMap::sorted`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockMap {
    blocks: Vec<Block>,
}

impl BlockMap {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Collect every object entry of a JSON map. Non-object entries are
    /// skipped with a warning.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let blocks = map
            .iter()
            .filter_map(|(key, value)| {
                let block = Block::from_value(key, value);
                if block.is_none() {
                    log::warn!("Skipping block entry {:?}: not an object", key);
                }
                block
            })
            .collect();
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in persisted key order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Blocks in reading order: ascending `meta.order`, ties keep key order.
    pub fn sorted(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.meta.order);
        blocks
    }
}

fn nodes_from_value(value: Option<&Value>) -> Vec<TextNode> {
    value
        .and_then(|v| v.as_array())
        .map(|nodes| {
            nodes
                .iter()
                .filter(|n| n.is_object())
                .map(TextNode::from_value)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_node_from_value_flags() {
        let node = TextNode::from_value(&json!({
            "text": "x",
            "bold": true,
            "italic": true,
            "highlight": "#00ff00",
            "color": "#ff0000"
        }));
        assert_eq!(node.text.as_deref(), Some("x"));
        assert!(node.bold && node.italic);
        assert!(!node.underline && !node.strike && !node.code);
        assert_eq!(node.highlight, Highlight::Color("#00ff00".to_string()));
        assert_eq!(node.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_highlight_variants() {
        assert_eq!(Highlight::from_value(Some(&json!(true))), Highlight::Default);
        assert_eq!(Highlight::from_value(Some(&json!(false))), Highlight::None);
        assert_eq!(Highlight::from_value(Some(&json!(""))), Highlight::None);
        assert_eq!(Highlight::from_value(None), Highlight::None);
    }

    #[test]
    fn test_block_from_value_missing_fields() {
        let block = Block::from_value("k1", &json!({ "type": "Paragraph" })).unwrap();
        assert_eq!(block.id, "k1");
        assert!(block.value.is_empty());
        assert_eq!(block.meta, BlockMeta::default());
    }

    #[test]
    fn test_block_from_value_rejects_non_object() {
        assert!(Block::from_value("k1", &json!("text")).is_none());
    }

    #[test]
    fn test_meta_unknown_align_is_none() {
        let block = Block::from_value(
            "b",
            &json!({ "id": "b", "type": "x", "value": [], "meta": { "order": 3, "align": "justify" } }),
        )
        .unwrap();
        assert_eq!(block.meta.order, 3);
        assert_eq!(block.meta.align, None);
    }

    #[test]
    fn test_sorted_is_stable() {
        let mut a = Block::new("a", "Paragraph");
        a.meta.order = 1;
        let b = Block::new("b", "Paragraph");
        let mut c = Block::new("c", "Paragraph");
        c.meta.order = 1;
        let map = BlockMap::new(vec![a, b, c]);

        let ids: Vec<&str> = map.sorted().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
