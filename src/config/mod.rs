use crate::errors::{AppError, AppResult};
use crate::models::Language;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Overrides the configuration directory (used by tests and portable setups).
pub const HOME_ENV: &str = "GITAWISDOM_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Reading translation id (see `gitawisdom read`).
    #[serde(default = "default_translation")]
    pub translation: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
pub(crate) fn default_wrap_width() -> usize {
    78
}
pub(crate) fn default_separator_char() -> String {
    "-".to_string()
}
pub(crate) fn default_translation() -> String {
    crate::core::reading::DEFAULT_TRANSLATION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            language: Language::default(),
            wrap_width: default_wrap_width(),
            separator_char: default_separator_char(),
            translation: default_translation(),
        }
    }
}

impl Config {
    /// Return the configuration directory: $GITAWISDOM_HOME, or the standard
    /// per-platform location.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gitawisdom")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".gitawisdom")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gitawisdom.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gitawisdom.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database location.
    ///
    /// A relative `custom_db` is resolved inside the configuration directory.
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let mut config = Self::load().unwrap_or_default();
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
