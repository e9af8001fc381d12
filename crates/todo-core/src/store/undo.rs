//! Undo log: LIFO of reversible actions and their inversion.

use tracing::debug;

use super::{PriorityIndex, TaskStore};
use crate::domain::{TodoError, UndoAction, Undone};

/// Stack of undo records, most recent last.
///
/// Undo pops and inverts exactly one record and never pushes anything back,
/// so there is no redo.
#[derive(Debug, Default)]
pub(crate) struct UndoLog {
    actions: Vec<UndoAction>,
}

impl UndoLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, action: UndoAction) {
        debug!(action = action.kind(), task_id = %action.task_id(), "recorded undo action");
        self.actions.push(action);
    }

    /// Pop the latest record and invert it against `store` and `index`.
    ///
    /// - `Add`: remove the task, then rebuild the index.
    /// - `Complete`: clear the completion flag on the live task, then rebuild
    ///   the index, since a read may already have dropped its entry. Nothing
    ///   else about the task is restored.
    /// - `Delete`: reinsert the snapshot and push it into the index.
    ///
    /// The record is consumed even when its task can no longer be found.
    pub(crate) fn undo_last(
        &mut self,
        store: &mut TaskStore,
        index: &mut PriorityIndex,
    ) -> Result<Undone, TodoError> {
        let action = self.actions.pop().ok_or(TodoError::NothingToUndo)?;
        debug!(action = action.kind(), task_id = %action.task_id(), "undoing action");

        match action {
            UndoAction::Add(id) => {
                let removed = store.remove_by_id(id).ok_or(TodoError::NotFound(id))?;
                index.rebuild(store);
                Ok(Undone::Added(removed))
            }
            UndoAction::Complete(snapshot) => {
                let task = store
                    .find_by_id_mut(snapshot.id())
                    .ok_or(TodoError::NotFound(snapshot.id()))?;
                task.mark_pending();
                let reopened = task.clone();
                index.rebuild(store);
                Ok(Undone::Reopened(reopened))
            }
            UndoAction::Delete(snapshot) => {
                let task = store.reinsert(snapshot);
                index.push(task);
                Ok(Undone::Restored(task.clone()))
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.actions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
