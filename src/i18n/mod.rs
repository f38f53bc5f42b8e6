//! Translation table lookup.
//!
//! The table is a nested YAML mapping embedded at build time. A dotted key
//! walks the nesting; the leaf is a mapping from language code to text. Any
//! miss (unknown key, non-leaf node, missing language) yields the key itself.

use crate::errors::AppResult;
use crate::models::Language;
use serde_yaml::Value;

const TRANSLATIONS_YAML: &str = include_str!("../../res/translations.yaml");

pub struct Translator {
    table: Value,
    language: Language,
}

impl Translator {
    /// Translator over the bundled table.
    pub fn new(language: Language) -> AppResult<Self> {
        Self::from_yaml(TRANSLATIONS_YAML, language)
    }

    /// Translator over a custom table (same shape as the bundled one).
    pub fn from_yaml(yaml: &str, language: Language) -> AppResult<Self> {
        let table: Value = serde_yaml::from_str(yaml)?;
        Ok(Self { table, language })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Look up `key` in the active language, falling back to the key.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key, self.language)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`Translator::t`], then replaces every `{name}` placeholder.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(key);
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }

    /// Whether `key` resolves to a text in `language`.
    pub fn has(&self, key: &str, language: Language) -> bool {
        self.lookup(key, language).is_some()
    }

    fn lookup(&self, key: &str, language: Language) -> Option<String> {
        let mut node = &self.table;

        for part in key.split('.') {
            node = node.as_mapping()?.get(part)?;
        }

        node.as_mapping()?
            .get(language.code())?
            .as_str()
            .map(str::to_string)
    }
}
