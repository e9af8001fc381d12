//! todo-core
//!
//! In-memory personal to-do list: add, complete, delete, search and list
//! tasks, fetch the most urgent pending one, and undo the last change.
//!
//! # Modules
//! - **domain**: task record, ids, priority, undo actions, errors
//! - **ports**: clock abstraction
//! - **store**: task store, priority index, undo log (crate-private)
//! - **app**: the `ToDoList` facade, its builder, sort keys and defaults
//! - **observability**: task counts

pub mod app;
pub mod domain;
pub mod observability;
pub mod ports;
mod store;

pub use app::{SearchMatch, SortKey, ToDoList, ToDoListBuilder, TodoConfig, UnknownSortKey};
pub use domain::{ErrorKind, Priority, Task, TaskId, TodoError, Undone};
pub use observability::TaskCounts;
pub use ports::{Clock, FixedClock, SystemClock};
