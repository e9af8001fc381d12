//! ToDoList - the facade over store, index and undo log.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::{SortKey, TodoConfig};
use crate::domain::{Priority, Task, TaskId, TodoError, UndoAction, Undone};
use crate::observability::TaskCounts;
use crate::ports::{Clock, SystemClock};
use crate::store::{PriorityIndex, TaskStore, UndoLog};

/// A personal to-do list held entirely in memory.
///
/// Every mutating operation updates the task store, the priority index and
/// the undo log as one unit and either applies fully or not at all. Failures
/// are reported through [`TodoError`] and never leave partial state behind.
///
/// # Example
/// ```
/// use todo_core::{Priority, ToDoList};
///
/// let mut todo = ToDoList::new();
/// todo.add_task("Buy milk", Some(Priority::new(2)), None);
/// todo.add_task("Call Bob", Some(Priority::new(1)), None);
///
/// assert_eq!(todo.next_priority_task().map(|t| t.name()), Some("Call Bob"));
/// ```
#[derive(Debug)]
pub struct ToDoList<C = SystemClock> {
    store: TaskStore,
    index: PriorityIndex,
    undo: UndoLog,
    clock: C,
    config: TodoConfig,
}

/// One search hit: just enough to identify the task and show its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchMatch<'a> {
    pub id: TaskId,
    pub name: &'a str,
    pub completed: bool,
}

impl<'a> From<&'a Task> for SearchMatch<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id(),
            name: task.name(),
            completed: task.is_completed(),
        }
    }
}

impl ToDoList<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, TodoConfig::default())
    }
}

impl Default for ToDoList<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ToDoList<C> {
    pub fn with_clock(clock: C, config: TodoConfig) -> Self {
        Self {
            store: TaskStore::new(),
            index: PriorityIndex::new(),
            undo: UndoLog::new(),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Add a task and return it.
    ///
    /// `priority` defaults to the configured default (3 unless changed) and
    /// is stored as given, even outside `1..=5`. `due_date` defaults to the
    /// creation day. Never fails.
    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        priority: Option<Priority>,
        due_date: Option<NaiveDate>,
    ) -> &Task {
        let priority = priority.unwrap_or(self.config.default_priority);
        let created_at = self.clock.now();
        let task = self.store.add(name.into(), priority, due_date, created_at);
        self.index.push(task);
        self.undo.record(UndoAction::Add(task.id()));
        debug!(task_id = %task.id(), %priority, "task added");
        task
    }

    /// Mark a task as completed.
    ///
    /// The priority index is left alone; the completed entry is discarded the
    /// next time it reaches the top.
    pub fn complete_task(&mut self, id: TaskId) -> Result<&Task, TodoError> {
        let task = self
            .store
            .find_by_id_mut(id)
            .ok_or(TodoError::NotFound(id))?;
        if task.is_completed() {
            return Err(TodoError::AlreadyCompleted(id));
        }

        self.undo.record(UndoAction::Complete(task.clone()));
        task.mark_completed();
        debug!(task_id = %id, "task completed");
        Ok(&*task)
    }

    /// Remove a task and return it. The priority index is rebuilt.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, TodoError> {
        let task = self.store.remove_by_id(id).ok_or(TodoError::NotFound(id))?;
        self.undo.record(UndoAction::Delete(task.clone()));
        self.index.rebuild(&self.store);
        debug!(task_id = %id, "task deleted");
        Ok(task)
    }

    /// Revert the most recent add, complete or delete.
    pub fn undo_last_action(&mut self) -> Result<Undone, TodoError> {
        self.undo.undo_last(&mut self.store, &mut self.index)
    }

    /// Most urgent incomplete task: lowest priority number, then lowest id.
    ///
    /// Takes `&mut self` because completed entries are pruned from the index
    /// on the way. Returns `None` when nothing is pending.
    pub fn next_priority_task(&mut self) -> Option<&Task> {
        let id = self.index.pop_next_incomplete(&self.store)?;
        self.store.find_by_id(id)
    }

    /// All tasks in the requested order.
    ///
    /// The order is recomputed on every call; calling twice without a
    /// mutation in between yields the same sequence.
    pub fn list_tasks(&self, sort_by: SortKey) -> impl Iterator<Item = &Task> {
        let mut tasks: Vec<&Task> = self.store.iter().collect();
        sort_by.sort(&mut tasks);
        tasks.into_iter()
    }

    /// Tasks whose name contains `keyword`, ignoring case, in store order.
    pub fn search_tasks<'a>(
        &'a self,
        keyword: &str,
    ) -> impl Iterator<Item = SearchMatch<'a>> + use<'a, C> {
        let needle = keyword.to_lowercase();
        self.store
            .iter()
            .filter(move |task| task.name_contains_lowercase(&needle))
            .map(SearchMatch::from)
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.store.find_by_id(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::tally(self.store.iter())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Number of actions that can still be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    fn todo() -> ToDoList<FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        ToDoList::with_clock(clock, TodoConfig::default())
    }

    #[test]
    fn add_uses_configured_default_priority() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let config = TodoConfig {
            default_priority: Priority::new(5),
            ..TodoConfig::default()
        };
        let mut list = ToDoList::with_clock(clock, config);

        let task = list.add_task("Later", None, None);
        assert_eq!(task.priority(), Priority::new(5));
    }

    #[test]
    fn add_takes_timestamps_from_clock() {
        let mut list = todo();
        let task = list.add_task("Buy milk", None, None);

        assert_eq!(task.created_at(), Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn out_of_range_priority_is_stored_as_is() {
        let mut list = todo();
        let id = list.add_task("Weird", Some(Priority::new(9)), None).id();
        list.add_task("Normal", Some(Priority::new(5)), None);

        assert_eq!(list.get_task(id).unwrap().priority(), Priority::new(9));
        assert_eq!(list.next_priority_task().unwrap().name(), "Normal");
    }

    #[test]
    fn complete_twice_reports_already_completed_without_new_undo_record() {
        let mut list = todo();
        let id = list.add_task("A", None, None).id();
        list.complete_task(id).unwrap();
        let depth = list.undo_depth();

        assert_eq!(list.complete_task(id).unwrap_err(), TodoError::AlreadyCompleted(id));
        assert_eq!(list.undo_depth(), depth);
    }

    #[test]
    fn unknown_ids_report_not_found() {
        let mut list = todo();
        list.add_task("A", None, None);
        let missing = TaskId::new(42);

        assert_eq!(list.complete_task(missing).unwrap_err(), TodoError::NotFound(missing));
        assert_eq!(list.delete_task(missing).unwrap_err(), TodoError::NotFound(missing));
        assert_eq!(list.undo_depth(), 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn delete_rebuilds_index_so_next_skips_deleted() {
        let mut list = todo();
        let urgent = list.add_task("Urgent", Some(Priority::new(1)), None).id();
        list.add_task("Relaxed", Some(Priority::new(4)), None);

        list.delete_task(urgent).unwrap();
        assert_eq!(list.next_priority_task().unwrap().name(), "Relaxed");
    }

    #[test]
    fn complete_undo_cycles_do_not_grow_the_index() {
        let mut list = todo();
        let a = list.add_task("A", Some(Priority::new(1)), None).id();

        for _ in 0..100 {
            list.complete_task(a).unwrap();
            list.undo_last_action().unwrap();
        }

        assert_eq!(list.index.len(), list.store.len());
        assert_eq!(list.next_priority_task().map(Task::id), Some(a));
    }

    #[test]
    fn empty_keyword_matches_every_task() {
        let mut list = todo();
        list.add_task("Buy milk", None, None);
        list.add_task("Walk dog", None, None);

        assert_eq!(list.search_tasks("").count(), 2);
    }

    #[test]
    fn counts_track_completion() {
        let mut list = todo();
        let a = list.add_task("A", None, None).id();
        list.add_task("B", None, None);
        list.complete_task(a).unwrap();

        let counts = list.counts();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn search_matches_carry_status() {
        let mut list = todo();
        let id = list.add_task("Buy milk", None, None).id();
        list.complete_task(id).unwrap();

        let hits: Vec<_> = list.search_tasks("MILK").collect();
        assert_eq!(
            hits,
            [SearchMatch {
                id,
                name: "Buy milk",
                completed: true
            }]
        );
    }
}
