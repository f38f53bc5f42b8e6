use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Bhagavad Gita verse with its translation and commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub verse: String,
    pub translation: String,
    pub chapter: u32,
    pub verse_number: u32,
    pub explanation: String,
}

impl Quote {
    pub fn reference(&self) -> QuoteRef {
        QuoteRef {
            chapter: self.chapter,
            verse_number: self.verse_number,
        }
    }

    /// Text used when sharing or copying a quote.
    pub fn share_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n~ Bhagavad Gita Ch.{}, Verse {}",
            self.verse, self.translation, self.chapter, self.verse_number
        )
    }
}

/// Identity of a quote: two quotes are the same verse when chapter and verse
/// number match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteRef {
    pub chapter: u32,
    pub verse_number: u32,
}

impl QuoteRef {
    /// Parse `CHAPTER.VERSE` (also accepts `CHAPTER:VERSE`).
    pub fn parse(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidQuoteRef(s.to_string());

        let (ch, v) = s
            .trim()
            .split_once(['.', ':'])
            .ok_or_else(invalid)?;

        let chapter: u32 = ch.trim().parse().map_err(|_| invalid())?;
        let verse_number: u32 = v.trim().parse().map_err(|_| invalid())?;

        if chapter == 0 || verse_number == 0 {
            return Err(invalid());
        }

        Ok(Self {
            chapter,
            verse_number,
        })
    }
}

impl fmt::Display for QuoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.verse_number)
    }
}
