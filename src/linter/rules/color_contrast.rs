use crate::color::{
    Color, Declaration, contrast_ratio, find_declaration, parse_color, parse_declarations,
    removes_text_decoration, round_ratio, strip_important, suggest_color,
};
use crate::linter::diagnostics::{Diagnostic, Edit, Fix};
use crate::linter::edits::opening_tag;
use crate::linter::rules::{Capabilities, Rule, RuleContext};
use crate::messages::{Message, Messages, fill};
use crate::syntax::{Node, heading_level, text_range};

const NORMAL_RATIO: f64 = 4.5;
const RELAXED_RATIO: f64 = 3.0;

const UI_CONTROLS: &[&str] = &["button", "input", "select", "textarea"];

const COLOR_ALONE: &str = "color-alone";
const LOW_CONTRAST: &str = "low-contrast";

/// What kind of content an element's colors apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextKind {
    /// `h1`..`h4`
    Large,
    Ui,
    Normal,
}

impl TextKind {
    fn of(tag_name: &str) -> Self {
        if heading_level(tag_name).is_some_and(|level| level <= 4) {
            TextKind::Large
        } else if UI_CONTROLS.contains(&tag_name) {
            TextKind::Ui
        } else {
            TextKind::Normal
        }
    }

    fn required_ratio(self) -> f64 {
        match self {
            TextKind::Large | TextKind::Ui => RELAXED_RATIO,
            TextKind::Normal => NORMAL_RATIO,
        }
    }

    fn message(self, messages: &Messages) -> &Message {
        match self {
            TextKind::Large => &messages.contrast_large_text,
            TextKind::Ui => &messages.contrast_ui,
            TextKind::Normal => &messages.contrast_normal,
        }
    }
}

pub struct ColorContrastRule;

impl Rule for ColorContrastRule {
    fn id(&self) -> &'static str {
        "color-contrast"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NODE
    }

    fn check_node(&self, node: &Node, ctx: &mut RuleContext<'_>) {
        let Some(style) = node.attribute("style") else {
            return;
        };
        let messages = ctx.messages;
        let declarations = parse_declarations(&style.value);

        if is_color_alone(&node.tag_name, &declarations) {
            ctx.report_variant(node, COLOR_ALONE, &messages.color_alone, &[]);
        }

        if let Some((fg, bg)) = colors(&declarations) {
            let kind = TextKind::of(&node.tag_name);
            let ratio = contrast_ratio(fg, bg);
            if ratio < kind.required_ratio() {
                let shown = round_ratio(ratio).to_string();
                let vars = [("ratio", shown.as_str())];
                ctx.report_variant(node, LOW_CONTRAST, kind.message(messages), &vars);
            }
        }
    }

    fn fix(&self, diagnostic: &Diagnostic, input: &str, messages: &Messages) -> Option<Fix> {
        let tag = opening_tag(diagnostic, input)?;
        let style = tag.attributes.iter().find(|attr| attr.name == "style")?;
        let style_start: usize = style.value_range?.start().into();
        let declarations = parse_declarations(&style.value);

        if diagnostic.variant == Some(COLOR_ALONE) {
            if !is_color_alone(&tag.name, &declarations) {
                return None;
            }
            let decoration = find_declaration(&declarations, "text-decoration")?;
            return Some(Fix {
                message: messages.fixes.remove_text_decoration.to_string(),
                edits: vec![Edit::replace(
                    text_range(
                        style_start + decoration.range.start,
                        style_start + decoration.range.end,
                    ),
                    "",
                )],
            });
        }

        let (fg, bg) = colors(&declarations)?;
        let target = TextKind::of(&tag.name).required_ratio();
        if contrast_ratio(fg, bg) >= target {
            return None;
        }
        let suggestion = suggest_color(fg, bg, target)?;

        // Only the color token; a trailing `!important` stays.
        let color = find_declaration(&declarations, "color")?;
        let token_start = style_start + color.value_range.start;
        let token_len = strip_important(color.value).len();
        let replacement = suggestion.to_string();

        Some(Fix {
            message: fill(messages.fixes.replace_color, &[("color", replacement.as_str())]),
            edits: vec![Edit::replace(
                text_range(token_start, token_start + token_len),
                replacement,
            )],
        })
    }
}

fn colors(declarations: &[Declaration<'_>]) -> Option<(Color, Color)> {
    let fg = parse_color(find_declaration(declarations, "color")?.value)?;
    let bg = parse_color(find_declaration(declarations, "background-color")?.value)?;
    Some((fg, bg))
}

/// A link that sets a color but drops its underline.
fn is_color_alone(tag_name: &str, declarations: &[Declaration<'_>]) -> bool {
    tag_name == "a"
        && find_declaration(declarations, "color").is_some()
        && removes_text_decoration(declarations)
}
