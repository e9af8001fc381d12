//! Undo action records.

use super::{Task, TaskId};

/// One reversible mutation, carrying exactly what is needed to invert it.
///
/// - `Add` only needs the id: inverting it is a removal.
/// - `Complete` keeps the pre-completion snapshot, but inverting it only
///   clears the completion flag on the live task.
/// - `Delete` keeps the whole task so it can be put back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    Add(TaskId),
    Complete(Task),
    Delete(Task),
}

impl UndoAction {
    /// Id of the task this action touched.
    pub fn task_id(&self) -> TaskId {
        match self {
            UndoAction::Add(id) => *id,
            UndoAction::Complete(snapshot) | UndoAction::Delete(snapshot) => snapshot.id(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UndoAction::Add(_) => "add",
            UndoAction::Complete(_) => "complete",
            UndoAction::Delete(_) => "delete",
        }
    }
}

/// What an undo actually reverted, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Undone {
    /// An add was reverted; the removed task is returned.
    Added(Task),

    /// A completion was reverted; the task is pending again.
    Reopened(Task),

    /// A delete was reverted; the task is back in the store.
    Restored(Task),
}
