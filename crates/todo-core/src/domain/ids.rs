//! Domain identifiers.
//!
//! Task ids are plain monotonically increasing integers. They are handed out by
//! [`IdAllocator`] and never reused, even after the task is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a Task.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Monotonic id counter.
///
/// Starts at 1 and only moves forward. Deleting a task does not give its id
/// back; undo of an add does not rewind the counter either.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate a new TaskId.
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return.
    #[cfg(test)]
    pub fn peek(&self) -> TaskId {
        TaskId::new(self.next)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
