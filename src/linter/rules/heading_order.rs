use crate::linter::diagnostics::{Diagnostic, Edit, Fix};
use crate::linter::edits::{find_closing_tag, opening_tag};
use crate::linter::rules::{Capabilities, Rule, RuleContext, collect_nodes};
use crate::messages::{Messages, fill};
use crate::syntax::{Node, heading_level};

pub struct HeadingOrderRule;

impl Rule for HeadingOrderRule {
    fn id(&self) -> &'static str {
        "heading-order"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DOCUMENT
    }

    fn check_document(&self, roots: &[Node], ctx: &mut RuleContext<'_>) {
        let messages = ctx.messages;
        let mut h1_count = 0;
        // 0 until the first heading.
        let mut previous_level = 0;

        for node in collect_nodes(roots, &|node| node.heading_level().is_some()) {
            let Some(level) = node.heading_level() else {
                continue;
            };

            if level == 1 {
                h1_count += 1;
                if h1_count > 1 {
                    ctx.report(node, &messages.heading_multiple_h1, &[]);
                }
            }

            if previous_level != 0 && level > previous_level + 1 {
                let previous = previous_level.to_string();
                ctx.report(
                    node,
                    &messages.heading_skipped_level,
                    &[("tag", node.tag_name.as_str()), ("previous", previous.as_str())],
                );
            }

            previous_level = level;
        }
    }

    fn fix(&self, diagnostic: &Diagnostic, input: &str, messages: &Messages) -> Option<Fix> {
        let tag = opening_tag(diagnostic, input)?;
        let level = heading_level(&tag.name)?;
        let target = if level == 1 { 2 } else { level - 1 };

        let closing = find_closing_tag(input, &tag.name, tag.range.end().into())?;
        let new_name = format!("h{target}");
        let (from, to) = (level.to_string(), target.to_string());

        Some(Fix {
            message: fill(
                messages.fixes.change_heading_level,
                &[("from", from.as_str()), ("to", to.as_str())],
            ),
            edits: vec![
                Edit::replace(tag.name_range, new_name.clone()),
                Edit::replace(closing, new_name),
            ],
        })
    }
}
