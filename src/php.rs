//! PHP block masking.
//!
//! PHP code is blanked out rather than removed so that every byte offset and
//! line/column position in the masked text still points at the same place in
//! the original source.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static PHP_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    // An unterminated block runs to end of input, as PHP itself allows.
    Regex::new(r"(?s)<\?(?:php|=).*?(?:\?>|\z)").expect("valid PHP block regex")
});

const PHP_EXTENSIONS: &[&str] = &["php", "phtml"];

/// Replace PHP blocks with spaces, keeping newlines.
pub fn mask_php(text: &str) -> Cow<'_, str> {
    if !PHP_BLOCK.is_match(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in PHP_BLOCK.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.extend(m.as_str().chars().map(blank));
        last = m.end();
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Blank one char while keeping its UTF-8 width.
fn blank(ch: char) -> String {
    match ch {
        '\n' | '\r' => ch.to_string(),
        _ => " ".repeat(ch.len_utf8()),
    }
}

pub fn is_php_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PHP_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Mask PHP when the document is PHP, otherwise pass the text through.
pub fn prepare_source(text: &str, is_php: bool) -> Cow<'_, str> {
    if is_php {
        mask_php(text)
    } else {
        Cow::Borrowed(text)
    }
}
