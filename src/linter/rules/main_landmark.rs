//! Exactly one `<main>` landmark per document.
//!
//! A missing landmark is reported on `<body>`, else `<html>`, else the
//! document start. When there are several, every one of them is reported.

use crate::linter::diagnostics::{Diagnostic, Edit, Fix};
use crate::linter::rules::{Capabilities, Rule, RuleContext, collect_nodes};
use crate::messages::Messages;
use crate::syntax::Node;

pub struct MainLandmarkRule;

impl Rule for MainLandmarkRule {
    fn id(&self) -> &'static str {
        "mainTag"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DOCUMENT
    }

    fn check_document(&self, roots: &[Node], ctx: &mut RuleContext<'_>) {
        let messages = ctx.messages;
        let mains = collect_nodes(roots, &|node| node.tag_name == "main");

        match mains.len() {
            0 => {
                let anchor = first_named(roots, "body").or_else(|| first_named(roots, "html"));
                match anchor {
                    Some(node) => ctx.report(node, &messages.main_missing, &[]),
                    None => ctx.report_at_start(&messages.main_missing, &[]),
                }
            }
            1 => {}
            _ => {
                for main in mains {
                    ctx.report(main, &messages.main_too_many, &[]);
                }
            }
        }
    }

    fn fix(&self, diagnostic: &Diagnostic, input: &str, messages: &Messages) -> Option<Fix> {
        // Extra landmarks need a human decision.
        let reported = input.get(usize::from(diagnostic.text_range.start())..)?;
        if reported.get(..5).is_some_and(|s| s.eq_ignore_ascii_case("<main")) {
            return None;
        }

        let lower = input.to_ascii_lowercase();
        let edits = match diagnostic.related_node.as_ref() {
            Some(node) if node.tag_name == "body" || node.tag_name == "html" => {
                let open_end: usize = node.text_range.end().into();
                let last_close = |tag: &str| {
                    lower
                        .rfind(&format!("</{tag}>"))
                        .filter(|&at| at >= open_end)
                };
                let mut close_at = last_close(&node.tag_name);
                if close_at.is_none() && node.tag_name == "body" {
                    // An unclosed body still ends before `</html>`.
                    close_at = last_close("html");
                }
                let close_at = close_at.unwrap_or(input.len());
                vec![Edit::insert(open_end, "<main>"), Edit::insert(close_at, "</main>")]
            }
            _ => vec![Edit::insert(0, "<main>"), Edit::insert(input.len(), "</main>")],
        };

        Some(Fix {
            message: messages.fixes.add_main.to_string(),
            edits,
        })
    }
}

fn first_named<'a>(roots: &'a [Node], tag_name: &str) -> Option<&'a Node> {
    collect_nodes(roots, &|node| node.tag_name == tag_name)
        .into_iter()
        .next()
}
