use serde::{Deserialize, Serialize};

use crate::domain::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub(crate) fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = TaskCounts::default();
        for task in tasks {
            counts.total += 1;
            if task.is_completed() {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
        }
        counts
    }
}
