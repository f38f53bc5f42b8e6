use crate::core::checkin::{CheckInLogic, CheckInReport};
use crate::core::store::SqliteStore;
use crate::db::log::audit;
use crate::db::{karma, kv};
use crate::errors::{AppError, AppResult};
use crate::models::karma_task::KarmaTask;
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};

pub enum Completion {
    /// The act was already done today: no points, no check-in.
    AlreadyCompleted(KarmaTask),
    Completed {
        task: KarmaTask,
        total_points: i64,
        checkin: CheckInReport,
    },
}

/// High-level business logic for the `karma` command.
pub struct KarmaLogic;

impl KarmaLogic {
    pub fn add(conn: &Connection, title: &str, points: i64, now: NaiveDateTime) -> AppResult<i64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Other("karma act title cannot be empty".into()));
        }

        let id = karma::insert(conn, title, points)?;
        audit(conn, now, "karma_add", &format!("#{}", id), &format!("{} (+{})", title, points));
        Ok(id)
    }

    /// Complete an act for the day of `now`: credits its points and counts as
    /// a check-in for the streak.
    ///
    /// Everything runs in one IMMEDIATE transaction: either the act is marked,
    /// the points credited and the check-in stored, or nothing changes.
    pub fn complete(conn: &mut Connection, id: i64, now: NaiveDateTime) -> AppResult<Completion> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut task = karma::get(&tx, id)?;
        let today = now.date();

        if task.is_completed_on(today) {
            return Ok(Completion::AlreadyCompleted(task));
        }

        karma::mark_completed(&tx, id, today)?;
        task.completed_on = Some(today);
        let total_points = kv::add_karma_points(&tx, task.points, now)?;

        let checkin = {
            let mut store = SqliteStore::within_transaction(&tx);
            CheckInLogic::apply(&mut store, now)?
        };

        audit(
            &tx,
            now,
            "karma_complete",
            &format!("#{}", id),
            &format!("{} (+{}, total {})", task.title, task.points, total_points),
        );

        tx.commit()?;

        Ok(Completion::Completed {
            task,
            total_points,
            checkin,
        })
    }
}
