use crate::linter::diagnostics::{Diagnostic, Fix};
use crate::messages::{Message, Messages};
use crate::syntax::Node;

pub mod color_contrast;
pub mod heading_order;
pub mod html_lang;
pub mod img_alt;
pub mod input_feedback;
pub mod main_landmark;

/// Which of the two check operations a rule takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Called once per node during the tree walk.
    pub node: bool,
    /// Called once with the whole forest after the walk.
    pub document: bool,
}

impl Capabilities {
    pub const NODE: Capabilities = Capabilities {
        node: true,
        document: false,
    };
    pub const DOCUMENT: Capabilities = Capabilities {
        node: false,
        document: true,
    };
}

pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities;

    fn check_node(&self, _node: &Node, _ctx: &mut RuleContext<'_>) {}

    fn check_document(&self, _roots: &[Node], _ctx: &mut RuleContext<'_>) {}

    /// Compute the remediation for one of this rule's diagnostics, or decline.
    fn fix(&self, _diagnostic: &Diagnostic, _input: &str, _messages: &Messages) -> Option<Fix> {
        None
    }
}

/// Collects the reports of one rule invocation.
pub struct RuleContext<'a> {
    rule_id: &'static str,
    pub messages: &'static Messages,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        rule_id: &'static str,
        messages: &'static Messages,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            rule_id,
            messages,
            diagnostics,
        }
    }

    pub fn report(&mut self, node: &Node, message: &Message, vars: &[(&str, &str)]) {
        self.push(Some(node), message, vars);
    }

    /// Like [`report`](Self::report), tagged with the check that fired so
    /// `fix` can tell a rule's diagnostics apart in any language.
    pub fn report_variant(
        &mut self,
        node: &Node,
        variant: &'static str,
        message: &Message,
        vars: &[(&str, &str)],
    ) {
        let diagnostic = self.diagnostic(Some(node), message, vars);
        self.diagnostics.push(diagnostic.with_variant(variant));
    }

    /// Report against the document-start sentinel when no node applies.
    pub fn report_at_start(&mut self, message: &Message, vars: &[(&str, &str)]) {
        self.push(None, message, vars);
    }

    fn push(&mut self, node: Option<&Node>, message: &Message, vars: &[(&str, &str)]) {
        let diagnostic = self.diagnostic(node, message, vars);
        self.diagnostics.push(diagnostic);
    }

    fn diagnostic(
        &self,
        node: Option<&Node>,
        message: &Message,
        vars: &[(&str, &str)],
    ) -> Diagnostic {
        Diagnostic::warning(
            self.rule_id,
            message.title,
            message.describe(vars),
            node.map(Node::to_ref),
        )
    }
}

pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id() == id)
            .map(|rule| rule.as_ref())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect all nodes matching `pred` in document order.
pub(crate) fn collect_nodes<'a>(roots: &'a [Node], pred: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
    fn walk<'a>(nodes: &'a [Node], pred: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
        for node in nodes {
            if pred(node) {
                out.push(node);
            }
            walk(&node.children, pred, out);
        }
    }

    let mut out = Vec::new();
    walk(roots, pred, &mut out);
    out
}
