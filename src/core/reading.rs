use crate::errors::{AppError, AppResult};
use crate::models::{Chapter, Translation};
use serde::Deserialize;

const CHAPTERS_YAML: &str = include_str!("../../res/chapters.yaml");

/// Translation used when the configuration names none.
pub const DEFAULT_TRANSLATION: &str = "swami-prabhupada";

/// The bundled reading catalogue: chapters and available translations.
#[derive(Debug, Deserialize)]
pub struct ReadingCatalog {
    translations: Vec<Translation>,
    chapters: Vec<Chapter>,
}

impl ReadingCatalog {
    pub fn load() -> AppResult<Self> {
        Self::from_yaml(CHAPTERS_YAML)
    }

    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        let catalog: ReadingCatalog = serde_yaml::from_str(yaml)?;
        if catalog.translations.is_empty() || catalog.chapters.is_empty() {
            return Err(AppError::Other("reading catalogue is empty".into()));
        }
        Ok(catalog)
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn chapter(&self, number: u32) -> AppResult<&Chapter> {
        self.chapters
            .iter()
            .find(|c| c.number == number)
            .ok_or_else(|| AppError::NotFound(format!("chapter {}", number)))
    }

    /// Lookup by id, case-insensitive.
    pub fn translation(&self, id: &str) -> AppResult<&Translation> {
        let id = id.trim();
        self.translations
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| AppError::NotFound(format!("translation '{}'", id)))
    }

    pub fn total_verses(&self) -> u32 {
        self.chapters.iter().map(|c| c.verses).sum()
    }
}
