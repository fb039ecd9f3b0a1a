//! Interactive session: the terminal counterpart of the app's single screen.
//!
//! Each line read from the input is a command. The session owns the entry
//! store for its whole lifetime; entries vanish when it ends.

use crate::config::Config;
use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{CALORIE_INTAKE, Catalogue, GroupedEntries};
use crate::ui::dialog::{DialogOutcome, InputDialog};
use crate::ui::messages::warning;
use crate::ui::screens::{self, Screen};
use crate::utils::colors::dim;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

const HELP: &str = "\
Commands:
  home | history | goals         switch screen
  log <number|name>              log an exercise (e.g. `log 1`, `log squats`)
  calories                       log calorie intake
  export <csv|json> <file> [force]
                                 write this session's entries to a file
  help                           show this help
  quit                           leave (entries are not kept)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Navigate(Screen),
    Log(String),
    Calories,
    Export {
        format: ExportFormat,
        file: String,
        force: bool,
    },
    Help,
    Quit,
    Empty,
    Invalid(String),
    Unknown(String),
}

pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    if line.is_empty() {
        return SessionCommand::Empty;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    if let Some(screen) = Screen::from_route(word) {
        return SessionCommand::Navigate(screen);
    }

    match word.to_ascii_lowercase().as_str() {
        "log" if rest.is_empty() => SessionCommand::Invalid("usage: log <number|name>".into()),
        "log" => SessionCommand::Log(rest.to_string()),
        "calories" => SessionCommand::Calories,
        "export" => parse_export(rest),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line.to_string()),
    }
}

fn parse_export(args: &str) -> SessionCommand {
    let usage = || SessionCommand::Invalid("usage: export <csv|json> <file> [force]".into());

    let parts: Vec<&str> = args.split_whitespace().collect();
    let (fmt, file, force) = match parts.as_slice() {
        [fmt, file] => (*fmt, *file, false),
        [fmt, file, flag] if flag.eq_ignore_ascii_case("force") => (*fmt, *file, true),
        _ => return usage(),
    };

    match ExportFormat::parse(fmt) {
        Some(format) => SessionCommand::Export {
            format,
            file: file.to_string(),
            force,
        },
        None => SessionCommand::Invalid(format!("unsupported export format '{fmt}'")),
    }
}

pub struct Session<'a, R: BufRead, W: Write> {
    cfg: &'a Config,
    catalogue: Catalogue,
    store: EntryStore,
    screen: Screen,
    latest: Rc<RefCell<Arc<GroupedEntries>>>,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(cfg: &'a Config, mut store: EntryStore, input: R, out: W) -> Self {
        // the history screen renders whatever the store last published
        let latest = Rc::new(RefCell::new(store.snapshot()));
        let sink = Rc::clone(&latest);
        store.subscribe(move |snapshot| {
            *sink.borrow_mut() = Arc::clone(snapshot);
        });

        Self {
            cfg,
            catalogue: cfg.catalogue(),
            store,
            screen: Screen::Home,
            latest,
            input,
            out,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        self.show_screen()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                break;
            }

            if !self.handle(parse_command(&line))? {
                break;
            }
        }

        debug!(entries = self.store.len(), "session ended");
        Ok(())
    }

    /// Apply one command. Returns false when the session should end.
    pub fn handle(&mut self, cmd: SessionCommand) -> AppResult<bool> {
        match cmd {
            SessionCommand::Navigate(screen) => {
                debug!(route = screen.route(), "navigate");
                self.screen = screen;
                self.show_screen()?;
            }
            SessionCommand::Log(query) => match self.catalogue.resolve(&query) {
                Some(kind) => {
                    let kind = kind.to_string();
                    self.open_dialog(&kind)?;
                }
                None => warning(AppError::UnknownExercise(format!(
                    "'{}' (use a tile number 1-{} or a name)",
                    query,
                    self.catalogue.exercises().len()
                ))),
            },
            SessionCommand::Calories => self.open_dialog(CALORIE_INTAKE)?,
            SessionCommand::Export { format, file, force } => self.export(format, &file, force),
            SessionCommand::Help => writeln!(self.out, "{HELP}")?,
            SessionCommand::Quit => return Ok(false),
            SessionCommand::Empty => {}
            SessionCommand::Invalid(msg) => warning(msg),
            SessionCommand::Unknown(line) => {
                warning(format!("Unknown command '{line}'. Type `help`."))
            }
        }
        Ok(true)
    }

    fn open_dialog(&mut self, kind: &str) -> AppResult<()> {
        let outcome =
            InputDialog::new(kind).run(&mut self.store, &mut self.input, &mut self.out)?;

        if let DialogOutcome::Confirmed(entry) = outcome {
            writeln!(
                self.out,
                "{}",
                dim(&format!("Logged {}: {}", entry.kind, entry.value_with_unit()))
            )?;
            if self.screen == Screen::History {
                self.show_screen()?;
            }
        }
        Ok(())
    }

    fn export(&mut self, format: ExportFormat, file: &str, force: bool) {
        if self.store.is_empty() {
            warning("Nothing to export yet.");
            return;
        }
        let path = expand_tilde(file);
        if let Err(e) = ExportLogic::export(self.store.entries(), format, &path, force) {
            warning(e);
        }
    }

    fn show_screen(&mut self) -> AppResult<()> {
        let body = match self.screen {
            Screen::Home => screens::render_home(&self.catalogue, today(), self.cfg),
            Screen::History => screens::render_history(&self.latest.borrow(), self.cfg)?,
            Screen::Goals => screens::render_goals(),
        };
        writeln!(self.out)?;
        write!(self.out, "{body}")?;
        write!(self.out, "{}", screens::render_bottom_bar(self.screen, self.cfg))?;
        Ok(())
    }
}

/// Run a session on the terminal.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::new(cfg, EntryStore::new(), io::stdin().lock(), io::stdout());
    session.run()
}
