//! Priority index: min-heap over `(priority, id)`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::TaskStore;
use crate::domain::{Priority, Task, TaskId};

/// Heap entry for the priority index.
///
/// We use reversed ordering so BinaryHeap acts as a min-heap: lowest priority
/// number first, lowest id breaking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexEntry {
    priority: Priority,
    task_id: TaskId,
}

impl IndexEntry {
    fn of(task: &Task) -> Self {
        Self {
            priority: task.priority(),
            task_id: task.id(),
        }
    }
}

impl PartialOrd for IndexEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.task_id.cmp(&self.task_id))
    }
}

/// Derived view over the task store answering "which incomplete task is most
/// urgent".
///
/// Two staleness rules keep it honest:
/// - Completion is lazy. Completed tasks stay in the heap and are dropped
///   when they reach the top.
/// - Structural changes are eager. Removing a task, or reopening one whose
///   entry may already be gone, is followed by [`PriorityIndex::rebuild`].
///
/// An entry whose id is no longer in the store is skipped at read time as
/// well.
#[derive(Debug, Default)]
pub(crate) struct PriorityIndex {
    heap: BinaryHeap<IndexEntry>,
}

impl PriorityIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, task: &Task) {
        self.heap.push(IndexEntry::of(task));
    }

    /// Id of the most urgent incomplete task, if any.
    ///
    /// Stale entries on top are popped and discarded until a live one is
    /// found. The live entry itself stays in the heap, so reading does not
    /// deplete the index.
    pub(crate) fn pop_next_incomplete(&mut self, store: &TaskStore) -> Option<TaskId> {
        while let Some(entry) = self.heap.peek().copied() {
            match store.find_by_id(entry.task_id) {
                Some(task) if !task.is_completed() => return Some(entry.task_id),
                Some(_) => {
                    trace!(task_id = %entry.task_id, "dropping completed task from priority index");
                }
                None => {
                    trace!(task_id = %entry.task_id, "dropping entry for missing task");
                }
            }
            self.heap.pop();
        }
        None
    }

    /// Discard every entry and re-index the store from scratch.
    pub(crate) fn rebuild(&mut self, store: &TaskStore) {
        self.heap.clear();
        self.heap.extend(store.iter().map(IndexEntry::of));
        trace!(entries = self.heap.len(), "priority index rebuilt");
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn add(store: &mut TaskStore, index: &mut PriorityIndex, name: &str, priority: i32) -> TaskId {
        let created = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
        let task = store.add(name.to_string(), Priority::new(priority), None, created);
        index.push(task);
        task.id()
    }

    #[test]
    fn lowest_priority_number_wins() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        add(&mut store, &mut index, "Buy milk", 2);
        let bob = add(&mut store, &mut index, "Call Bob", 1);

        assert_eq!(index.pop_next_incomplete(&store), Some(bob));
    }

    #[test]
    fn equal_priority_breaks_tie_by_id() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 3);
        add(&mut store, &mut index, "B", 3);

        assert_eq!(index.pop_next_incomplete(&store), Some(a));
    }

    #[test]
    fn reading_does_not_deplete_the_index() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 1);

        assert_eq!(index.pop_next_incomplete(&store), Some(a));
        assert_eq!(index.pop_next_incomplete(&store), Some(a));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn completed_tasks_are_dropped_lazily() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 1);
        let b = add(&mut store, &mut index, "B", 2);

        store.find_by_id_mut(a).unwrap().mark_completed();
        assert_eq!(index.len(), 2);

        assert_eq!(index.pop_next_incomplete(&store), Some(b));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn exhausted_index_returns_none() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 1);
        store.find_by_id_mut(a).unwrap().mark_completed();

        assert_eq!(index.pop_next_incomplete(&store), None);
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn rebuild_forgets_removed_tasks() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 1);
        let b = add(&mut store, &mut index, "B", 2);

        store.remove_by_id(a);
        index.rebuild(&store);

        assert_eq!(index.len(), 1);
        assert_eq!(index.pop_next_incomplete(&store), Some(b));
    }

    #[test]
    fn rebuild_reindexes_completed_tasks_too() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 1);
        add(&mut store, &mut index, "B", 2);
        store.find_by_id_mut(a).unwrap().mark_completed();

        index.rebuild(&store);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn entries_for_missing_ids_are_skipped() {
        let mut store = TaskStore::new();
        let mut index = PriorityIndex::new();
        let a = add(&mut store, &mut index, "A", 1);
        let b = add(&mut store, &mut index, "B", 2);

        // Removal without a rebuild.
        store.remove_by_id(a);

        assert_eq!(index.pop_next_incomplete(&store), Some(b));
    }
}
