//! Path utilities: expand `~` in user-supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `--config` value if given, the standard location otherwise.
pub fn resolve_config_path(custom: Option<&str>) -> PathBuf {
    custom
        .map(expand_tilde)
        .unwrap_or_else(crate::config::Config::config_file)
}
