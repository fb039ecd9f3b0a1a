use clap::{Parser, Subcommand};

/// Command-line interface definition for fittracker
/// Terminal fitness logger: reps and calorie intake, grouped by day
#[derive(Parser)]
#[command(
    name = "fittracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small fitness logger: record exercise reps and calorie intake, review them grouped by day",
    long_about = None
)]
pub struct Cli {
    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colours
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Defaults to `session` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive logging session (default)
    Session,

    /// List the exercise tiles of the home screen
    Exercises,

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with the defaults")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
