//! Errors and their classification.
//!
//! None of these are fatal. Every failing operation leaves the list exactly as
//! it was, so callers report the message and carry on.

use thiserror::Error;

use super::TaskId;

/// Operational classification of a [`TodoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced task does not exist.
    NotFound,

    /// The request was valid but there was nothing to do.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("task {0} not found")]
    NotFound(TaskId),

    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),

    #[error("nothing to undo")]
    NothingToUndo,
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound(_) => ErrorKind::NotFound,
            TodoError::AlreadyCompleted(_) | TodoError::NothingToUndo => ErrorKind::NoOp,
        }
    }
}
