use crate::linter::rules::{Capabilities, Rule, RuleContext};
use crate::syntax::Node;

pub struct HtmlLangRule;

impl Rule for HtmlLangRule {
    fn id(&self) -> &'static str {
        "html-lang"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NODE
    }

    fn check_node(&self, node: &Node, ctx: &mut RuleContext<'_>) {
        if node.tag_name != "html" {
            return;
        }
        let has_lang = node
            .attribute("lang")
            .is_some_and(|lang| !lang.value.trim().is_empty());
        if !has_lang {
            let messages = ctx.messages;
            ctx.report(node, &messages.html_lang_missing, &[]);
        }
    }
}
