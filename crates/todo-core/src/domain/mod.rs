//! Domain model (ids, priority, task record, undo actions, errors).

pub mod action;
pub mod errors;
pub mod ids;
pub mod priority;
pub mod task;

pub use action::{UndoAction, Undone};
pub use errors::{ErrorKind, TodoError};
pub use ids::{IdAllocator, TaskId};
pub use priority::Priority;
pub use task::Task;
