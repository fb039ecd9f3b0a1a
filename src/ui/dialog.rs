use crate::core::input::submit_raw_value;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::FitnessEntry;
use crate::models::exercise::{dialog_title, input_label};
use crate::utils::colors::paint_bold;
use ansi_term::Colour;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed(FitnessEntry),
    Dismissed,
}

/// Quantity prompt for one exercise (or the calorie action).
///
/// A line that parses as a quantity confirms the dialog. `cancel` or end of
/// input dismisses it. Anything else is swallowed and the prompt repeats,
/// with no message.
pub struct InputDialog {
    kind: String,
}

impl InputDialog {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        store: &mut EntryStore,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<DialogOutcome> {
        writeln!(out, "{}", paint_bold(Colour::White, &dialog_title(&self.kind)))?;

        loop {
            write!(out, "{}: ", input_label(&self.kind))?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                debug!(kind = %self.kind, "dialog closed by end of input");
                return Ok(DialogOutcome::Dismissed);
            }

            if line.trim().eq_ignore_ascii_case("cancel") {
                debug!(kind = %self.kind, "dialog cancelled");
                return Ok(DialogOutcome::Dismissed);
            }

            if let Some(entry) = submit_raw_value(store, &self.kind, &line) {
                return Ok(DialogOutcome::Confirmed(entry));
            }
        }
    }
}
