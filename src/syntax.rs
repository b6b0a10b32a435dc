//! Markup tree model.
//!
//! Nodes are rebuilt from scratch on every analysis pass and never mutated
//! afterwards. A node's range covers its *opening tag* only, never the
//! element's content or closing tag.

use rowan::{TextRange, TextSize};

/// A zero-based line/column position. Columns count chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The empty range at the very start of a document.
    pub const fn document_start() -> Self {
        Self::new(Position::new(0, 0), Position::new(0, 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Raw value text; empty for a valueless attribute such as `required`.
    pub value: String,
    /// Byte span of the value text in the source, without quotes.
    pub value_range: Option<TextRange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Lowercased tag name.
    pub tag_name: String,
    /// Attributes in source order, duplicates included.
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    /// Line/column span of the opening tag.
    pub range: Range,
    /// Byte span of the opening tag.
    pub text_range: TextRange,
}

impl Node {
    /// First attribute with the given (lowercase) name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The level of an `h1`..`h6` element.
    pub fn heading_level(&self) -> Option<u8> {
        heading_level(&self.tag_name)
    }

    pub fn to_ref(&self) -> NodeRef {
        NodeRef {
            tag_name: self.tag_name.clone(),
            range: self.range,
            text_range: self.text_range,
        }
    }
}

/// Owned back-reference to the node a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub tag_name: String,
    pub range: Range,
    pub text_range: TextRange,
}

pub fn heading_level(tag_name: &str) -> Option<u8> {
    match tag_name.as_bytes() {
        [b'h', digit @ b'1'..=b'6'] => Some(digit - b'0'),
        _ => None,
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start);
        Position { line, column }
    }

    pub fn range(&self, range: TextRange) -> Range {
        Range {
            start: self.position(range.start().into()),
            end: self.position(range.end().into()),
        }
    }
}

pub(crate) fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}
