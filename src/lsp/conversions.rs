use tower_lsp_server::ls_types::*;

use crate::linter;
use crate::linter::Severity as A11ySeverity;

/// Convert an LSP position (UTF-16 columns) to a byte offset.
///
/// A column past the end of its line clamps to the line end. Returns `None`
/// for a line past the end of the document.
pub(crate) fn position_to_offset(text: &str, position: Position) -> Option<usize> {
    let mut line_start = 0;
    for _ in 0..position.line {
        line_start += text[line_start..].find('\n')? + 1;
    }
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |i| line_start + i);

    let mut utf16_offset = 0;
    for (byte_idx, ch) in text[line_start..line_end].char_indices() {
        if utf16_offset >= position.character as usize {
            return Some(line_start + byte_idx);
        }
        utf16_offset += ch.len_utf16();
    }
    Some(line_end)
}

/// Convert a byte offset to an LSP position (UTF-16 columns).
pub(crate) fn offset_to_position(text: &str, offset: usize) -> Position {
    let before = text.get(..offset.min(text.len())).unwrap_or(text);
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.bytes().filter(|&b| b == b'\n').count();
    let character: usize = before[line_start..].chars().map(char::len_utf16).sum();

    Position {
        line: line as u32,
        character: character as u32,
    }
}

fn to_lsp_range(text: &str, range: rowan::TextRange) -> Range {
    Range {
        start: offset_to_position(text, range.start().into()),
        end: offset_to_position(text, range.end().into()),
    }
}

/// Convert an a11ymate diagnostic to an LSP diagnostic.
///
/// The long description travels in `data` so clients can show it on demand.
pub(crate) fn convert_diagnostic(diag: &linter::Diagnostic, text: &str) -> Diagnostic {
    let severity = match diag.severity {
        A11ySeverity::Warning => DiagnosticSeverity::WARNING,
    };

    Diagnostic {
        range: to_lsp_range(text, diag.text_range),
        severity: Some(severity),
        code: Some(NumberOrString::String(diag.code.clone())),
        source: Some("a11ymate".to_string()),
        message: diag.message.clone(),
        data: Some(serde_json::json!({ "description": diag.description })),
        ..Default::default()
    }
}

pub(crate) fn convert_fix(fix: &linter::Fix, text: &str) -> Vec<TextEdit> {
    fix.edits
        .iter()
        .map(|edit| TextEdit {
            range: to_lsp_range(text, edit.range),
            new_text: edit.replacement.clone(),
        })
        .collect()
}

/// Whether two ranges touch or overlap.
pub(crate) fn ranges_intersect(a: &Range, b: &Range) -> bool {
    let key = |p: &Position| (p.line, p.character);
    key(&a.start) <= key(&b.end) && key(&b.start) <= key(&a.end)
}

/// Apply a single content change to text
pub(crate) fn apply_content_change(text: &str, change: &TextDocumentContentChangeEvent) -> String {
    let Some(range) = &change.range else {
        return change.text.clone();
    };

    let start = position_to_offset(text, range.start).unwrap_or(text.len());
    let end = position_to_offset(text, range.end)
        .unwrap_or(text.len())
        .max(start);

    let mut result = String::with_capacity(text.len() - (end - start) + change.text.len());
    result.push_str(&text[..start]);
    result.push_str(&change.text);
    result.push_str(&text[end..]);
    result
}
