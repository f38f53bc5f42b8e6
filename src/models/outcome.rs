use serde::{Deserialize, Serialize};

/// Result of one check-in attempt. Exactly one is produced per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    AlreadyCheckedInToday,
    StreakStarted,
    StreakExtended,
    StreakReset,
}

impl Outcome {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Outcome::AlreadyCheckedInToday => "already",
            Outcome::StreakStarted => "started",
            Outcome::StreakExtended => "extended",
            Outcome::StreakReset => "reset",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "already" => Some(Outcome::AlreadyCheckedInToday),
            "started" => Some(Outcome::StreakStarted),
            "extended" => Some(Outcome::StreakExtended),
            "reset" => Some(Outcome::StreakReset),
            _ => None,
        }
    }

    /// Translation key of the user-facing message for this outcome.
    pub fn message_key(&self) -> &'static str {
        match self {
            Outcome::AlreadyCheckedInToday => "checkIn.already",
            Outcome::StreakStarted => "checkIn.started",
            Outcome::StreakExtended => "checkIn.extended",
            Outcome::StreakReset => "checkIn.reset",
        }
    }

    /// Whether the attempt changed the stored state.
    pub fn is_recorded(&self) -> bool {
        !matches!(self, Outcome::AlreadyCheckedInToday)
    }
}
