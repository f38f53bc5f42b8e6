use chrono::NaiveDate;
use serde::Serialize;

/// A karma act the user can complete once per calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct KarmaTask {
    pub id: i64,
    pub title: String,                    // ⇔ karma_tasks.title
    pub points: i64,                      // ⇔ karma_tasks.points (> 0)
    pub completed_on: Option<NaiveDate>,  // ⇔ karma_tasks.completed_on (TEXT "YYYY-MM-DD")
}

impl KarmaTask {
    /// Completion resets implicitly at the day boundary.
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_on == Some(day)
    }
}
