//! Color math for the contrast checks.
//!
//! Luminance and contrast follow the WCAG 2.x definitions:
//! <https://www.w3.org/TR/WCAG20/#relativeluminancedef>

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").expect("valid rgb() regex")
});

/// Step applied to every channel per search iteration.
const SUGGEST_STEP: i16 = 5;
const SUGGEST_ITERATIONS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `delta` to every channel, clamping to `0..=255`.
    fn shifted(self, delta: i16) -> Self {
        let shift = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

/// Lowercase `#rrggbb`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#rgb`, `#rrggbb` or `rgb(r, g, b)`. Anything else is unparseable.
///
/// A trailing `!important` is ignored.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = strip_important(value).to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let caps = RGB_FUNCTION.captures(&value)?;
    let channel = |i: usize| -> Option<u8> {
        let v: u32 = caps[i].parse().ok()?;
        Some(v.min(255) as u8)
    };
    Some(Color::new(channel(1)?, channel(2)?, channel(3)?))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Color::new(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::new(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

/// The value without a trailing `!important`, trimmed.
pub(crate) fn strip_important(value: &str) -> &str {
    let value = value.trim();
    match value.to_ascii_lowercase().rfind("!important") {
        Some(idx) if value[idx..].eq_ignore_ascii_case("!important") => value[..idx].trim_end(),
        _ => value,
    }
}

/// sRGB relative luminance in `[0, 1]`.
pub fn luminance(color: Color) -> f64 {
    fn channel(c: u8) -> f64 {
        let v = c as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b)
}

/// Contrast ratio in `[1, 21]`; symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Ratio rounded to two decimals, as shown to users.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Find a foreground color reaching `target` contrast against `bg`.
///
/// Steps all channels of `fg` darker on a light background (lighter on a
/// dark one) and returns the first candidate that qualifies. Falls back to
/// black, then white.
pub fn suggest_color(fg: Color, bg: Color, target: f64) -> Option<Color> {
    let step = if luminance(bg) > 0.5 {
        -SUGGEST_STEP
    } else {
        SUGGEST_STEP
    };

    let mut candidate = fg;
    for _ in 0..SUGGEST_ITERATIONS {
        if contrast_ratio(candidate, bg) >= target {
            return Some(candidate);
        }
        candidate = candidate.shifted(step);
    }

    [Color::BLACK, Color::WHITE]
        .into_iter()
        .find(|&extreme| contrast_ratio(extreme, bg) >= target)
}

/// One `name: value` declaration of an inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Lowercased property name.
    pub name: String,
    /// Trimmed value text.
    pub value: &'a str,
    /// Byte span of `value` within the style text.
    pub value_range: Range<usize>,
    /// Byte span of the whole declaration including its `;` and any
    /// whitespace after it.
    pub range: Range<usize>,
}

/// Split inline style text into declarations. Malformed pieces are skipped.
pub fn parse_declarations(style: &str) -> Vec<Declaration<'_>> {
    let mut declarations = Vec::new();
    let mut start = 0;

    while start < style.len() {
        let piece_end = style[start..]
            .find(';')
            .map(|i| start + i)
            .unwrap_or(style.len());
        let mut end = (piece_end + 1).min(style.len());
        while end < style.len() && style.as_bytes()[end].is_ascii_whitespace() {
            end += 1;
        }

        let piece = &style[start..piece_end];
        if let Some(colon) = piece.find(':') {
            let name = piece[..colon].trim();
            let raw_value = &piece[colon + 1..];
            let value = raw_value.trim();
            if !name.is_empty() && !value.is_empty() {
                let leading = raw_value.len() - raw_value.trim_start().len();
                let value_start = start + colon + 1 + leading;
                let decl_start = start + (piece.len() - piece.trim_start().len());
                declarations.push(Declaration {
                    name: name.to_ascii_lowercase(),
                    value,
                    value_range: value_start..value_start + value.len(),
                    range: decl_start..end,
                });
            }
        }

        start = end;
    }

    declarations
}

/// The effective (last) declaration of a property.
pub fn find_declaration<'d, 'a>(
    declarations: &'d [Declaration<'a>],
    name: &str,
) -> Option<&'d Declaration<'a>> {
    declarations.iter().rev().find(|d| d.name == name)
}

/// Whether the style removes link underlines (`text-decoration: none`).
pub fn removes_text_decoration(declarations: &[Declaration<'_>]) -> bool {
    find_declaration(declarations, "text-decoration").is_some_and(|d| {
        strip_important(d.value)
            .split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("none"))
    })
}
