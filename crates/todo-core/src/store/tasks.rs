//! Task store: the single source of truth for tasks.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{IdAllocator, Priority, Task, TaskId};

/// Ordered collection of all live tasks.
///
/// Design:
/// - Insertion order is preserved and is the default iteration order.
/// - Lookups are linear; the list is small and ordering matters more than
///   constant-time access.
/// - The id counter lives here so ids stay unique for the store's lifetime.
#[derive(Debug, Default)]
pub(crate) struct TaskStore {
    tasks: Vec<Task>,
    ids: IdAllocator,
}

impl TaskStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a task with the next id and append it.
    pub(crate) fn add(
        &mut self,
        name: String,
        priority: Priority,
        due_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> &Task {
        let id = self.ids.allocate();
        self.tasks
            .push(Task::new(id, name, priority, due_date, created_at));
        &self.tasks[self.tasks.len() - 1]
    }

    pub(crate) fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    pub(crate) fn remove_by_id(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Put a previously removed task back, at the end.
    ///
    /// The original position is not restored. The id counter is untouched, so
    /// a reinserted task keeps its old id and no new id collides with it.
    pub(crate) fn reinsert(&mut self, task: Task) -> &Task {
        debug_assert!(
            self.find_by_id(task.id()).is_none(),
            "reinsert of live task {}",
            task.id()
        );
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
