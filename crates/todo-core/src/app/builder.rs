//! ToDoListBuilder - wiring of clock and defaults.

use super::{SortKey, ToDoList, TodoConfig};
use crate::domain::Priority;
use crate::ports::{Clock, SystemClock};

/// Builds a [`ToDoList`].
///
/// # Example
/// ```
/// use todo_core::{Priority, SortKey, ToDoListBuilder};
///
/// let todo = ToDoListBuilder::new()
///     .default_priority(Priority::new(2))
///     .default_sort(SortKey::DueDate)
///     .build();
/// assert!(todo.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ToDoListBuilder<C = SystemClock> {
    clock: C,
    config: TodoConfig,
}

impl ToDoListBuilder<SystemClock> {
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            config: TodoConfig::default(),
        }
    }
}

impl Default for ToDoListBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ToDoListBuilder<C> {
    /// Swap the clock. Tests use this with a `FixedClock`.
    pub fn clock<D: Clock>(self, clock: D) -> ToDoListBuilder<D> {
        ToDoListBuilder {
            clock,
            config: self.config,
        }
    }

    pub fn config(mut self, config: TodoConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_priority(mut self, priority: Priority) -> Self {
        self.config.default_priority = priority;
        self
    }

    pub fn default_sort(mut self, sort: SortKey) -> Self {
        self.config.default_sort = sort;
        self
    }

    pub fn build(self) -> ToDoList<C> {
        ToDoList::with_clock(self.clock, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn build_with_defaults() {
        let todo = ToDoListBuilder::new().build();
        assert_eq!(*todo.config(), TodoConfig::default());
        assert!(todo.is_empty());
    }

    #[test]
    fn build_with_fixed_clock_and_overrides() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut todo = ToDoListBuilder::new()
            .default_priority(Priority::new(1))
            .clock(FixedClock::new(at))
            .build();

        let task = todo.add_task("Ship it", None, None);
        assert_eq!(task.priority(), Priority::new(1));
        assert_eq!(task.created_at(), at);
    }

    #[test]
    fn config_replaces_individual_settings() {
        let config = TodoConfig {
            default_priority: Priority::new(4),
            default_sort: SortKey::CreatedAt,
        };
        let todo = ToDoListBuilder::new()
            .default_priority(Priority::new(1))
            .config(config)
            .build();
        assert_eq!(*todo.config(), config);
    }
}
