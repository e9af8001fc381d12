//! Task record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskId};

/// One task owned by the store.
///
/// Design:
/// - Fields are read through accessors; the only in-place mutation is the
///   completion flag, via `mark_completed` / `mark_pending`.
/// - `Clone` produces a fully independent copy, which is what the undo log
///   keeps as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    priority: Priority,
    due_date: NaiveDate,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Build a fresh, incomplete task. `due_date` falls back to the calendar
    /// day of `created_at`.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
            due_date: due_date.unwrap_or_else(|| created_at.date_naive()),
            completed: false,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Case-insensitive substring match against the name.
    /// `needle` must already be lowercase.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub(crate) fn mark_pending(&mut self) {
        self.completed = false;
    }
}
