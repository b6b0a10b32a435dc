use rowan::{TextRange, TextSize};

use crate::syntax::{NodeRef, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: TextRange,
    pub replacement: String,
}

impl Edit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        let at = TextSize::from(offset as u32);
        Self {
            range: TextRange::empty(at),
            replacement: text.into(),
        }
    }

    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }
}

/// A remediation. Its edits are applied together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub message: String,
    pub edits: Vec<Edit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Id of the rule that produced this diagnostic.
    pub code: String,
    /// Which of its rule's checks fired, for rules with more than one.
    /// Stable across message languages.
    pub variant: Option<&'static str>,
    /// Short title.
    pub message: String,
    pub description: String,
    pub range: Range,
    /// Byte span of `range`.
    pub text_range: TextRange,
    /// The node this diagnostic is about. `None` for the document-start sentinel.
    pub related_node: Option<NodeRef>,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn warning(
        code: impl Into<String>,
        message: impl Into<String>,
        description: impl Into<String>,
        related_node: Option<NodeRef>,
    ) -> Self {
        let (range, text_range) = match &related_node {
            Some(node) => (node.range, node.text_range),
            None => (Range::document_start(), TextRange::default()),
        };
        Self {
            severity: Severity::Warning,
            code: code.into(),
            variant: None,
            message: message.into(),
            description: description.into(),
            range,
            text_range,
            related_node,
            fix: None,
        }
    }

    pub fn with_variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}
