use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*init && !*edit_config {
            info(format!("Configuration file: {}", path.display()));
            return Ok(());
        }

        if *init {
            ConfigLogic::init(path)?;
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
