//! Tolerant HTML tree builder.
//!
//! This is not a conforming HTML5 parser. It recognises start and end tags
//! well enough to produce an ordered forest of elements with exact opening-tag
//! spans, which is all the rules need. Malformed input never fails: stray end
//! tags are dropped and unclosed elements are closed at end of input.

use rowan::TextRange;

use crate::syntax::{Attribute, LineIndex, Node, text_range};

/// Elements that never have content.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is raw text, not markup.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea", "title"];

/// Opening one of these closes an open element of the same family on top of
/// the stack.
const IMPLIED_END_FAMILIES: &[&[&str]] = &[
    &["p"],
    &["li"],
    &["dt", "dd"],
    &["tr"],
    &["td", "th"],
    &["option"],
];

/// A scanned start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    /// Byte span of the tag name (without the `<`).
    pub name_range: TextRange,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
    /// Byte span of the whole tag, `<` through `>`.
    pub range: TextRange,
}

impl StartTag {
    /// Byte offset of the tag's terminating `>`, or of the `/` in `/>`.
    pub fn close_offset(&self) -> usize {
        let end: usize = self.range.end().into();
        if self.self_closing { end - 2 } else { end - 1 }
    }
}

/// Parse markup into an ordered forest of element nodes.
pub fn parse(input: &str) -> Vec<Node> {
    TreeBuilder::new(input).build()
}

/// Scan the start tag beginning at `offset` (which must point at `<`).
pub fn parse_start_tag(input: &str, offset: usize) -> Option<StartTag> {
    let bytes = input.as_bytes();
    if bytes.get(offset) != Some(&b'<') {
        return None;
    }

    let name_start = offset + 1;
    if !bytes.get(name_start)?.is_ascii_alphabetic() {
        return None;
    }
    let mut pos = name_start;
    while pos < bytes.len() && is_tag_name_byte(bytes[pos]) {
        pos += 1;
    }
    let name = input[name_start..pos].to_ascii_lowercase();
    let name_range = text_range(name_start, pos);

    let mut attributes = Vec::new();
    loop {
        pos = skip_whitespace(bytes, pos);
        match bytes.get(pos)? {
            b'>' => {
                return Some(StartTag {
                    name,
                    name_range,
                    attributes,
                    self_closing: false,
                    range: text_range(offset, pos + 1),
                });
            }
            b'/' if bytes.get(pos + 1) == Some(&b'>') => {
                return Some(StartTag {
                    name,
                    name_range,
                    attributes,
                    self_closing: true,
                    range: text_range(offset, pos + 2),
                });
            }
            b'/' => pos += 1,
            _ => {
                let (attribute, next) = scan_attribute(input, pos)?;
                attributes.push(attribute);
                pos = next;
            }
        }
    }
}

fn scan_attribute(input: &str, start: usize) -> Option<(Attribute, usize)> {
    let bytes = input.as_bytes();
    let mut pos = start;
    // The first byte is always taken so that stray quotes or `=` make progress.
    pos += 1;
    while pos < bytes.len() && !is_attribute_name_end(bytes[pos]) {
        pos += 1;
    }
    let name = input[start..pos].to_ascii_lowercase();

    let after_name = skip_whitespace(bytes, pos);
    if bytes.get(after_name) != Some(&b'=') {
        let attribute = Attribute {
            name,
            value: String::new(),
            value_range: None,
        };
        return Some((attribute, pos));
    }

    let value_start = skip_whitespace(bytes, after_name + 1);
    let (value_range, next) = match bytes.get(value_start)? {
        quote @ (b'"' | b'\'') => {
            let content_start = value_start + 1;
            let len = input[content_start..].find(*quote as char)?;
            let content_end = content_start + len;
            (text_range(content_start, content_end), content_end + 1)
        }
        b'>' => (text_range(value_start, value_start), value_start),
        _ => {
            let mut end = value_start;
            while end < bytes.len() && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                end += 1;
            }
            (text_range(value_start, end), end)
        }
    };

    let attribute = Attribute {
        name,
        value: input[value_range].to_string(),
        value_range: Some(value_range),
    };
    Some((attribute, next))
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_'
}

fn is_attribute_name_end(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/')
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Case-insensitive search for `needle` (ASCII) starting at `from`.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from > hay.len() {
        return None;
    }
    hay[from..]
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|i| from + i)
}

struct TreeBuilder<'a> {
    input: &'a str,
    line_index: LineIndex<'a>,
    pos: usize,
    stack: Vec<Node>,
    roots: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            line_index: LineIndex::new(input),
            pos: 0,
            stack: Vec::new(),
            roots: Vec::new(),
        }
    }

    fn build(mut self) -> Vec<Node> {
        while let Some(rel) = self.input[self.pos..].find('<') {
            self.pos += rel;
            self.step();
        }
        while !self.stack.is_empty() {
            self.close_top();
        }
        log::debug!("Parsed {} root element(s)", self.roots.len());
        self.roots
    }

    /// Consume one construct starting at `<`.
    fn step(&mut self) {
        let rest = &self.input[self.pos..];

        if rest.starts_with("<!--") {
            self.pos = match rest[4..].find("-->") {
                Some(end) => self.pos + 4 + end + 3,
                None => self.input.len(),
            };
        } else if rest.starts_with("</") {
            self.end_tag();
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            self.pos = match rest.find('>') {
                Some(end) => self.pos + end + 1,
                None => self.input.len(),
            };
        } else if let Some(tag) = parse_start_tag(self.input, self.pos) {
            self.pos = tag.range.end().into();
            self.start_tag(tag);
        } else {
            // Literal `<` in text.
            self.pos += 1;
        }
    }

    fn end_tag(&mut self) {
        let bytes = self.input.as_bytes();
        let name_start = self.pos + 2;
        let mut name_end = name_start;
        while name_end < bytes.len() && is_tag_name_byte(bytes[name_end]) {
            name_end += 1;
        }
        if name_end == name_start {
            self.pos += 2;
            return;
        }

        self.pos = match self.input[name_end..].find('>') {
            Some(end) => name_end + end + 1,
            None => self.input.len(),
        };

        let name = self.input[name_start..name_end].to_ascii_lowercase();
        if let Some(index) = self.stack.iter().rposition(|node| node.tag_name == name) {
            while self.stack.len() > index {
                self.close_top();
            }
        }
    }

    fn start_tag(&mut self, tag: StartTag) {
        self.close_implied(&tag.name);

        let node = Node {
            range: self.line_index.range(tag.range),
            text_range: tag.range,
            tag_name: tag.name,
            attributes: tag.attributes,
            children: Vec::new(),
        };

        if tag.self_closing || VOID_TAGS.contains(&node.tag_name.as_str()) {
            self.attach(node);
            return;
        }

        if RAW_TEXT_TAGS.contains(&node.tag_name.as_str()) {
            let closing = format!("</{}", node.tag_name);
            self.pos = find_ignore_ascii_case(self.input, &closing, self.pos)
                .unwrap_or(self.input.len());
        }

        self.stack.push(node);
    }

    fn close_implied(&mut self, name: &str) {
        let Some(family) = IMPLIED_END_FAMILIES
            .iter()
            .find(|family| family.contains(&name))
        else {
            return;
        };
        if self
            .stack
            .last()
            .is_some_and(|top| family.contains(&top.tag_name.as_str()))
        {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.attach(node);
        }
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}
