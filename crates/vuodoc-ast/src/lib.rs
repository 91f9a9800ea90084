//! Document AST exchanged with the upstream document converter.
//!
//! The shapes mirror the converter's JSON API (1.23): every node serializes as
//! `{"t": <tag>, "c": <contents>}`, records serialize as positional arrays.
//! Nodes own their children outright; there is no sharing and no cycles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// API version stamped on documents created from scratch.
pub const API_VERSION: [i32; 3] = [1, 23, 1];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pandoc {
    #[serde(rename = "pandoc-api-version")]
    pub api_version: Vec<i32>,
    pub meta: IndexMap<String, MetaValue>,
    pub blocks: Vec<Block>,
}

impl Pandoc {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            api_version: API_VERSION.to_vec(),
            meta: IndexMap::new(),
            blocks,
        }
    }

    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum MetaValue {
    MetaMap(IndexMap<String, MetaValue>),
    MetaList(Vec<MetaValue>),
    MetaBool(bool),
    MetaString(String),
    MetaInlines(Vec<Inline>),
    MetaBlocks(Vec<Block>),
}

/// Identifier, classes and key/value attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr(pub String, pub Vec<String>, pub Vec<(String, String)>);

impl Attr {
    pub fn with_id(id: impl Into<String>) -> Self {
        Attr(id.into(), Vec::new(), Vec::new())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Link or image destination: URL and title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target(pub String, pub String);

impl Target {
    pub fn new(url: impl Into<String>) -> Self {
        Target(url.into(), String::new())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

/// Format tag of a raw node (`tex`, `latex`, `docbook`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Format(pub String);

impl Format {
    pub fn new(name: impl Into<String>) -> Self {
        Format(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Format {
    fn from(name: &str) -> Self {
        Format(name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
    Plain(Vec<Inline>),
    Para(Vec<Inline>),
    LineBlock(Vec<Vec<Inline>>),
    CodeBlock(Attr, String),
    RawBlock(Format, String),
    BlockQuote(Vec<Block>),
    OrderedList(ListAttributes, Vec<Vec<Block>>),
    BulletList(Vec<Vec<Block>>),
    DefinitionList(Vec<(Vec<Inline>, Vec<Vec<Block>>)>),
    Header(i32, Attr, Vec<Inline>),
    HorizontalRule,
    Table(Attr, Caption, Vec<ColSpec>, TableHead, Vec<TableBody>, TableFoot),
    Figure(Attr, Caption, Vec<Block>),
    Div(Attr, Vec<Block>),
}

impl Block {
    pub fn header(level: i32, id: impl Into<String>, content: Vec<Inline>) -> Self {
        Block::Header(level, Attr::with_id(id), content)
    }

    pub fn raw(format: &str, text: impl Into<String>) -> Self {
        Block::RawBlock(Format::new(format), text.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
    Str(String),
    Emph(Vec<Inline>),
    Underline(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikeout(Vec<Inline>),
    Superscript(Vec<Inline>),
    Subscript(Vec<Inline>),
    SmallCaps(Vec<Inline>),
    Quoted(QuoteType, Vec<Inline>),
    Cite(Vec<Citation>, Vec<Inline>),
    Code(Attr, String),
    Space,
    SoftBreak,
    LineBreak,
    Math(MathType, String),
    RawInline(Format, String),
    Link(Attr, Vec<Inline>, Target),
    Image(Attr, Vec<Inline>, Target),
    Note(Vec<Block>),
    Span(Attr, Vec<Inline>),
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Str(s.into())
    }

    pub fn raw(format: &str, text: impl Into<String>) -> Self {
        Inline::RawInline(Format::new(format), text.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum QuoteType {
    SingleQuote,
    DoubleQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum MathType {
    DisplayMath,
    InlineMath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub citation_id: String,
    pub citation_prefix: Vec<Inline>,
    pub citation_suffix: Vec<Inline>,
    pub citation_mode: CitationMode,
    pub citation_note_num: i32,
    pub citation_hash: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum CitationMode {
    AuthorInText,
    SuppressAuthor,
    NormalCitation,
}

/// Start number, numbering style and delimiter of an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttributes(pub i32, pub ListNumberStyle, pub ListNumberDelim);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ListNumberStyle {
    DefaultStyle,
    Example,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ListNumberDelim {
    DefaultDelim,
    Period,
    OneParen,
    TwoParens,
}

/// Optional short caption plus the full caption blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Caption(pub Option<Vec<Inline>>, pub Vec<Block>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColSpec(pub Alignment, pub ColWidth);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum Alignment {
    AlignLeft,
    AlignRight,
    AlignCenter,
    AlignDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ColWidth {
    ColWidth(f64),
    ColWidthDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHead(pub Attr, pub Vec<Row>);

/// Attributes, number of row-header columns, intermediate head rows, body rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBody(pub Attr, pub i32, pub Vec<Row>, pub Vec<Row>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFoot(pub Attr, pub Vec<Row>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Attr, pub Vec<Cell>);

/// Attributes, alignment, row span, column span, content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell(pub Attr, pub Alignment, pub i32, pub i32, pub Vec<Block>);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    const SAMPLE: &str = r#"{
        "pandoc-api-version": [1, 23, 1],
        "meta": {"title": {"t": "MetaInlines", "c": [{"t": "Str", "c": "Manual"}]}},
        "blocks": [
            {"t": "Header", "c": [1, ["intro", [], []], [{"t": "Str", "c": "Intro"}]]},
            {"t": "Para", "c": [
                {"t": "Str", "c": "A"},
                {"t": "Space"},
                {"t": "RawInline", "c": ["tex", "\\vuoNode{Fire}"]}
            ]},
            {"t": "Table", "c": [
                ["", [], []],
                [null, []],
                [[{"t": "AlignDefault"}, {"t": "ColWidthDefault"}]],
                [["", [], []], []],
                [[["", [], []], 0, [], [
                    [["", [], []], [
                        [["", [], []], {"t": "AlignDefault"}, 1, 1, [{"t": "Plain", "c": [{"t": "Str", "c": "x"}]}]]
                    ]]
                ]]],
                [["", [], []], []]
            ]},
            {"t": "OrderedList", "c": [[1, {"t": "Decimal"}, {"t": "Period"}], [[{"t": "Plain", "c": [{"t": "Str", "c": "one"}]}]]]},
            {"t": "HorizontalRule"}
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let doc = Pandoc::from_json(SAMPLE).unwrap();
        assert_eq!(doc.api_version, vec![1, 23, 1]);
        assert_eq!(doc.blocks.len(), 5);
        assert_eq!(
            doc.blocks[0],
            Block::header(1, "intro", vec![Inline::text("Intro")])
        );
        match &doc.blocks[1] {
            Block::Para(inlines) => {
                assert_eq!(inlines[1], Inline::Space);
                assert_eq!(inlines[2], Inline::raw("tex", "\\vuoNode{Fire}"));
            }
            other => panic!("expected Para, got {:?}", other),
        }
        assert!(matches!(doc.blocks[2], Block::Table(..)));
        assert_eq!(doc.blocks[4], Block::HorizontalRule);
    }

    #[test]
    fn test_reserialize_preserves_shape() {
        let doc = Pandoc::from_json(SAMPLE).unwrap();
        let original: Value = serde_json::from_str(SAMPLE).unwrap();
        let round: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(original, round);
    }

    #[test]
    fn test_unit_variants_have_no_contents() {
        let json = serde_json::to_string(&Inline::SoftBreak).unwrap();
        assert_eq!(json, r#"{"t":"SoftBreak"}"#);
        let json = serde_json::to_string(&Inline::text("hi")).unwrap();
        assert_eq!(json, r#"{"t":"Str","c":"hi"}"#);
    }

    #[test]
    fn test_image_shape() {
        let image = Inline::Image(
            Attr::default(),
            Vec::new(),
            Target::new("image/editor.png"),
        );
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"t": "Image", "c": [["", [], []], [], ["image/editor.png", ""]]})
        );
    }
}
