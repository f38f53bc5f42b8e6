use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::i18n::Translator;
use crate::models::Language;
use crate::utils::clock::{self, Clock};

/// Per-run state shared by every command handler.
pub struct Context {
    pub cfg: Config,
    pub clock: Box<dyn Clock>,
    pub tr: Translator,
    /// Test mode: never write the configuration file.
    pub is_test: bool,
}

impl Context {
    /// Resolve the run context from the parsed CLI and the loaded config:
    /// `--db`, `--lang` and `--at` take precedence over the file.
    pub fn from_cli(cli: &Cli, mut cfg: Config) -> AppResult<Self> {
        if let Some(custom_db) = &cli.db {
            cfg.database = custom_db.clone();
        }

        let language = match &cli.lang {
            Some(code) => {
                Language::from_code(code).ok_or_else(|| AppError::InvalidLanguage(code.clone()))?
            }
            None => cfg.language,
        };

        Ok(Self {
            clock: clock::from_override(cli.at.as_deref())?,
            tr: Translator::new(language)?,
            is_test: cli.test,
            cfg,
        })
    }

    pub fn open_db(&self) -> AppResult<DbPool> {
        DbPool::new(&self.cfg.database)
    }

    pub fn t(&self, key: &str) -> String {
        self.tr.t(key)
    }
}
