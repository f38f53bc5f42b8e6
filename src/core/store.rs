//! Persistence of the check-in state.
//!
//! `SqliteStore` is the durable store; `MemoryStore` keeps the state for the
//! current session only and is used when the database cannot be opened.

use crate::db::{checkins, kv};
use crate::errors::AppResult;
use crate::models::{CheckInState, Outcome};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// What an update closure decided for the stored state.
#[derive(Debug, Clone, Copy)]
pub struct Transition<T> {
    pub state: CheckInState,
    /// History row to append at the update time, written together with the state.
    pub record: Option<Outcome>,
    pub value: T,
}

pub trait StateStore {
    /// Stored state, or the default state when nothing was stored yet.
    fn load(&self) -> AppResult<CheckInState>;

    /// Read, transform and write the state and its history as a single atomic
    /// unit: a concurrent update observes either the state before or after `f`.
    fn update<T, F>(&mut self, now: NaiveDateTime, f: F) -> AppResult<T>
    where
        F: FnOnce(CheckInState) -> Transition<T>;

    /// Highest streak ever recorded.
    fn longest_streak(&self) -> AppResult<u32>;
}

pub struct SqliteStore<'a> {
    conn: &'a Connection,
    /// false when the caller already holds a write transaction on `conn`.
    owns_transaction: bool,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            owns_transaction: true,
        }
    }

    /// Store over a connection inside an open IMMEDIATE transaction: updates
    /// join it and commit or roll back with the caller's other writes.
    pub fn within_transaction(tx: &'a Connection) -> Self {
        Self {
            conn: tx,
            owns_transaction: false,
        }
    }

    pub fn conn(&self) -> &Connection {
        self.conn
    }
}

fn apply_update<T, F>(conn: &Connection, now: NaiveDateTime, f: F) -> AppResult<T>
where
    F: FnOnce(CheckInState) -> Transition<T>,
{
    let current: CheckInState = kv::get_json(conn, kv::KEY_CHECKIN_STATE)?.unwrap_or_default();
    let t = f(current);

    if t.state != current {
        kv::put_json(conn, kv::KEY_CHECKIN_STATE, &t.state, now)?;
    }
    if let Some(outcome) = t.record {
        checkins::insert(conn, now, t.state.current_streak, outcome)?;
    }

    Ok(t.value)
}

impl StateStore for SqliteStore<'_> {
    fn load(&self) -> AppResult<CheckInState> {
        Ok(kv::get_json(self.conn, kv::KEY_CHECKIN_STATE)?.unwrap_or_default())
    }

    fn update<T, F>(&mut self, now: NaiveDateTime, f: F) -> AppResult<T>
    where
        F: FnOnce(CheckInState) -> Transition<T>,
    {
        if !self.owns_transaction {
            return apply_update(self.conn, now, f);
        }

        // IMMEDIATE takes the write lock before reading, so two writers
        // cannot both read the same old state.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let out = apply_update(&tx, now, f)?;
        tx.commit()?;
        Ok(out)
    }

    fn longest_streak(&self) -> AppResult<u32> {
        checkins::longest_streak(self.conn)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: CheckInState,
    history: Vec<(NaiveDateTime, u32, Outcome)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CheckInState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[(NaiveDateTime, u32, Outcome)] {
        &self.history
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> AppResult<CheckInState> {
        Ok(self.state)
    }

    fn update<T, F>(&mut self, now: NaiveDateTime, f: F) -> AppResult<T>
    where
        F: FnOnce(CheckInState) -> Transition<T>,
    {
        let t = f(self.state);
        self.state = t.state;
        if let Some(outcome) = t.record {
            self.history.push((now, t.state.current_streak, outcome));
        }
        Ok(t.value)
    }

    fn longest_streak(&self) -> AppResult<u32> {
        Ok(self.history.iter().map(|(_, s, _)| *s).max().unwrap_or(0))
    }
}
