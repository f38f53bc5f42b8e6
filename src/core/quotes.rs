use crate::errors::{AppError, AppResult};
use crate::models::{Quote, QuoteRef};
use chrono::{Datelike, NaiveDate};
use rand::Rng;

const QUOTES_YAML: &str = include_str!("../../res/quotes.yaml");

/// The bundled verse catalogue.
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
}

impl QuoteCatalog {
    pub fn load() -> AppResult<Self> {
        Self::from_yaml(QUOTES_YAML)
    }

    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        let quotes: Vec<Quote> = serde_yaml::from_str(yaml)?;
        if quotes.is_empty() {
            return Err(AppError::Other("quote catalogue is empty".into()));
        }
        Ok(Self { quotes })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Same quote for the whole calendar day, rotating through the catalogue.
    pub fn quote_of_day(&self, day: NaiveDate) -> &Quote {
        let idx = day.num_days_from_ce().rem_euclid(self.quotes.len() as i32) as usize;
        &self.quotes[idx]
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        &self.quotes[rng.gen_range(0..self.quotes.len())]
    }

    pub fn find(&self, r: QuoteRef) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.reference() == r)
    }

    pub fn get(&self, r: QuoteRef) -> AppResult<&Quote> {
        self.find(r)
            .ok_or_else(|| AppError::NotFound(format!("verse {} is not in the catalogue", r)))
    }
}
