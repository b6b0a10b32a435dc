use crate::linter::diagnostics::{Diagnostic, Edit, Fix};
use crate::linter::edits::opening_tag;
use crate::linter::rules::{Capabilities, Rule, RuleContext};
use crate::messages::Messages;
use crate::syntax::Node;

pub struct ImgAltRule;

impl Rule for ImgAltRule {
    fn id(&self) -> &'static str {
        "img-alt"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NODE
    }

    fn check_node(&self, node: &Node, ctx: &mut RuleContext<'_>) {
        if node.tag_name == "img" && !node.has_attribute("alt") {
            let messages = ctx.messages;
            ctx.report(node, &messages.img_alt, &[]);
        }
    }

    fn fix(&self, diagnostic: &Diagnostic, input: &str, messages: &Messages) -> Option<Fix> {
        let tag = opening_tag(diagnostic, input)?;
        if tag.attributes.iter().any(|attr| attr.name == "alt") {
            return None;
        }

        Some(Fix {
            message: messages.fixes.add_alt.to_string(),
            edits: vec![Edit::insert(tag.name_range.end().into(), " alt=\"\"")],
        })
    }
}
