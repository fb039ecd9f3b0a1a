//! ANSI colour helpers for terminal output.
//! Colour can be switched off globally (config `color: false` or `--no-color`).

use ansi_term::{Colour, Style};
use regex::Regex;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn set_enabled(on: bool) {
    ENABLED.store(on, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn paint(colour: Colour, text: &str) -> String {
    paint_style(colour.normal(), text)
}

pub fn paint_bold(colour: Colour, text: &str) -> String {
    paint_style(colour.bold(), text)
}

pub fn paint_style(style: Style, text: &str) -> String {
    if enabled() {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Grey for placeholders and empty states.
pub fn dim(text: &str) -> String {
    paint(Colour::Fixed(244), text)
}

/// Unit colour: calories in yellow, reps in green.
pub fn colour_for_unit(unit: crate::models::Unit) -> Colour {
    match unit {
        crate::models::Unit::Calories => Colour::Yellow,
        crate::models::Unit::Reps => Colour::Green,
    }
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
