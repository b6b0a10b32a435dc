use crate::linter::diagnostics::{Diagnostic, Edit, Fix};
use crate::linter::edits::opening_tag;
use crate::linter::rules::{Capabilities, Rule, RuleContext};
use crate::messages::Messages;
use crate::syntax::Node;

pub struct InputFeedbackRule;

impl Rule for InputFeedbackRule {
    fn id(&self) -> &'static str {
        "input-feedback"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NODE
    }

    fn check_node(&self, node: &Node, ctx: &mut RuleContext<'_>) {
        if node.tag_name == "input"
            && node.has_attribute("required")
            && !node.has_attribute("aria-describedby")
        {
            let messages = ctx.messages;
            ctx.report(node, &messages.input_missing_described_by, &[]);
        }
    }

    fn fix(&self, diagnostic: &Diagnostic, input: &str, messages: &Messages) -> Option<Fix> {
        let tag = opening_tag(diagnostic, input)?;
        let has = |name: &str| tag.attributes.iter().any(|attr| attr.name == name);
        if !has("required") || has("aria-describedby") {
            return None;
        }

        let id = tag
            .attributes
            .iter()
            .find(|attr| attr.name == "id")
            .map(|attr| attr.value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("field-{}", diagnostic.range.start.line + 1));
        let error_id = format!("error-{id}");

        let start: usize = tag.range.start().into();
        let line_start = input[..start].rfind('\n').map_or(0, |i| i + 1);
        let indent = &input[line_start..start];
        // Own line for the paragraph when the input starts its line.
        let separator = if indent.chars().all(char::is_whitespace) {
            format!("\n{indent}")
        } else {
            String::new()
        };
        let paragraph = format!(
            "<p id=\"{error_id}\">{}</p>{separator}",
            messages.fixes.error_placeholder
        );

        let close = tag.close_offset();
        let attribute = if input.as_bytes()[close - 1].is_ascii_whitespace() {
            format!("aria-describedby=\"{error_id}\" ")
        } else {
            format!(" aria-describedby=\"{error_id}\"")
        };

        Some(Fix {
            message: messages.fixes.add_error_message.to_string(),
            edits: vec![Edit::insert(start, paragraph), Edit::insert(close, attribute)],
        })
    }
}
