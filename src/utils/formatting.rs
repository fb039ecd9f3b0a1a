//! Formatting utilities used for screens and export outputs.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

/// Visible width of `s`, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Horizontal rule made of `sep`.
pub fn rule(sep: char, width: usize) -> String {
    std::iter::repeat_n(sep, width).collect()
}

/// "home" → "Home"
pub fn titlecase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
