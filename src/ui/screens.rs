//! Text rendering of the three screens and the bottom bar.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{CALORIE_INTAKE, Catalogue, FitnessEntry, GroupedEntries};
use crate::utils::colors::{colour_for_unit, dim, paint, paint_bold};
use crate::utils::date::{display_date, format_display_date, weekday_name};
use crate::utils::{pad_right, rule, titlecase};
use ansi_term::Colour;
use chrono::NaiveDate;

pub const APP_TITLE: &str = "Fitness Tracker for Home";
pub const HISTORY_TITLE: &str = "Exercise History";
pub const GOALS_TEXT: &str = "Goals Screen";

const SCREEN_WIDTH: usize = 44;
const TILE_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    History,
    Goals,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::History, Screen::Goals];

    pub fn route(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::History => "history",
            Screen::Goals => "goals",
        }
    }

    pub fn from_route(s: &str) -> Option<Self> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.route().eq_ignore_ascii_case(s.trim()))
    }

    pub fn label(&self) -> String {
        titlecase(self.route())
    }
}

pub fn render_home(catalogue: &Catalogue, today: NaiveDate, cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str(&paint_bold(Colour::White, APP_TITLE));
    out.push('\n');
    out.push_str(&display_date(today));
    out.push('\n');
    out.push_str(&rule(cfg.separator(), SCREEN_WIDTH));
    out.push('\n');

    // two tiles per row
    let tiles: Vec<String> = catalogue
        .tiles()
        .map(|(n, name)| format!("{:>2}. {}", n, name))
        .collect();
    for row in tiles.chunks(2) {
        let line = row
            .iter()
            .map(|t| pad_right(t, TILE_WIDTH))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One history row: label padded to `name_width`, then value and unit.
pub fn history_line(entry: &FitnessEntry, name_width: usize) -> String {
    let value = paint(colour_for_unit(entry.unit()), &entry.value_with_unit());
    format!("  {}  {}", pad_right(&entry.kind, name_width), value)
}

pub fn render_history(grouped: &GroupedEntries, cfg: &Config) -> AppResult<String> {
    let mut out = String::new();
    out.push_str(&paint_bold(Colour::White, HISTORY_TITLE));
    out.push('\n');

    if grouped.is_empty() {
        out.push_str(&dim("No entries logged yet."));
        out.push('\n');
        return Ok(out);
    }

    let name_width = grouped
        .values()
        .flatten()
        .map(|e| e.kind.chars().count())
        .max()
        .unwrap_or(0);

    for (key, entries) in grouped {
        let mut heading = format_display_date(key)?;
        if cfg.show_weekday {
            heading = format!("{heading} ({})", weekday_name(key)?);
        }
        out.push('\n');
        out.push_str(&paint_bold(Colour::Cyan, &heading));
        out.push('\n');
        out.push_str(&rule(cfg.separator(), SCREEN_WIDTH));
        out.push('\n');
        for entry in entries {
            out.push_str(&history_line(entry, name_width));
            out.push('\n');
        }
    }
    Ok(out)
}

pub fn render_goals() -> String {
    format!("{GOALS_TEXT}\n")
}

/// Calorie action plus navigation bar, shown under every screen.
pub fn render_bottom_bar(current: Screen, cfg: &Config) -> String {
    let nav = Screen::ALL
        .iter()
        .map(|s| {
            if *s == current {
                paint_bold(Colour::Blue, &format!("[{}]", s.label()))
            } else {
                format!(" {} ", s.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "{}\n+ {}  {}\n{}\n",
        rule(cfg.separator(), SCREEN_WIDTH),
        paint_bold(Colour::Yellow, CALORIE_INTAKE),
        dim("(calories)"),
        nav
    )
}
