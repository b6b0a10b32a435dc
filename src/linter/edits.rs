use rowan::TextRange;

use crate::linter::diagnostics::{Diagnostic, Edit, Fix};
use crate::parser::{StartTag, parse_start_tag};
use crate::syntax::text_range;

/// Apply whole fixes to `input`.
///
/// Fixes are taken in order of their first edit. A fix that touches text
/// already edited by an accepted fix is skipped entirely. Returns the new text
/// and the number of fixes applied.
pub fn apply_fixes<'a>(input: &str, fixes: impl IntoIterator<Item = &'a Fix>) -> (String, usize) {
    let mut fixes: Vec<&Fix> = fixes.into_iter().filter(|f| !f.edits.is_empty()).collect();
    fixes.sort_by_key(|f| f.edits.iter().map(|e| e.range.start()).min());

    let mut accepted: Vec<&Edit> = Vec::new();
    let mut applied = 0;
    for fix in fixes {
        let in_bounds = fix
            .edits
            .iter()
            .all(|edit| usize::from(edit.range.end()) <= input.len());
        if !in_bounds {
            log::warn!("Skipping fix '{}': edit past end of input", fix.message);
            continue;
        }
        let clashes = fix
            .edits
            .iter()
            .any(|edit| accepted.iter().any(|other| conflicts(edit.range, other.range)));
        if clashes {
            log::warn!("Skipping fix '{}': overlaps another fix", fix.message);
            continue;
        }
        accepted.extend(&fix.edits);
        applied += 1;
    }

    // Stable, so edits sharing an offset keep their order within a fix.
    accepted.sort_by_key(|e| e.range.start());

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;
    for edit in accepted {
        let start: usize = edit.range.start().into();
        let end: usize = edit.range.end().into();
        output.push_str(&input[last_end..start]);
        output.push_str(&edit.replacement);
        last_end = last_end.max(end);
    }
    output.push_str(&input[last_end..]);

    (output, applied)
}

fn conflicts(a: TextRange, b: TextRange) -> bool {
    a.start() == b.start() || (a.start() < b.end() && b.start() < a.end())
}

/// Re-read the opening tag a diagnostic points at.
pub(crate) fn opening_tag(diagnostic: &Diagnostic, input: &str) -> Option<StartTag> {
    let node = diagnostic.related_node.as_ref()?;
    let tag = parse_start_tag(input, node.text_range.start().into())?;
    (tag.name == node.tag_name).then_some(tag)
}

/// Find the end tag closing the element `name` whose start tag ends at `from`.
///
/// Nested elements of the same name are skipped. Returns the span of the
/// name inside the end tag.
pub(crate) fn find_closing_tag(input: &str, name: &str, from: usize) -> Option<TextRange> {
    let lower = input.to_ascii_lowercase();
    let open = format!("<{name}");
    let close = format!("</{name}");

    let mut depth = 0usize;
    let mut pos = from;
    loop {
        let next_close = find_tag(&lower, &close, pos)?;
        match find_tag(&lower, &open, pos) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos = next_open + open.len();
            }
            _ if depth == 0 => {
                let name_start = next_close + 2;
                return Some(text_range(name_start, name_start + name.len()));
            }
            _ => {
                depth -= 1;
                pos = next_close + close.len();
            }
        }
    }
}

/// Next occurrence of `<name` or `</name` that is a whole tag name.
fn find_tag(lower: &str, pattern: &str, mut from: usize) -> Option<usize> {
    loop {
        let at = from + lower.get(from..)?.find(pattern)?;
        let after = lower.as_bytes().get(at + pattern.len());
        if after.is_some_and(|b| b.is_ascii_whitespace() || matches!(b, b'>' | b'/')) {
            return Some(at);
        }
        from = at + pattern.len();
    }
}
