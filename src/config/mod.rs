use crate::errors::{AppError, AppResult};
use crate::models::exercise::{Catalogue, DEFAULT_EXERCISES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_exercises")]
    pub exercises: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub show_weekday: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_exercises() -> Vec<String> {
    DEFAULT_EXERCISES.iter().map(|s| s.to_string()).collect()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exercises: default_exercises(),
            separator_char: default_separator_char(),
            show_weekday: false,
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fittracker")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fittracker.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.exercises.is_empty() {
            return Err(AppError::Config("`exercises` must list at least one exercise".into()));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "`separator_char` must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`, creating parent
    /// directories. Refuses to replace an existing file.
    pub fn init_file(path: &Path) -> AppResult<()> {
        if path.exists() {
            return Err(AppError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Config::default().to_yaml()?)?;
        Ok(())
    }

    pub fn catalogue(&self) -> Catalogue {
        Catalogue::new(self.exercises.clone())
    }

    /// First character of `separator_char`, '-' if empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}
