//! In-memory structures behind the to-do list: task store, priority index and
//! undo log.
//!
//! None of these are exposed outside the crate. The facade in `app` updates
//! all three together so they never drift apart.

mod index;
mod tasks;
mod undo;

pub(crate) use index::PriorityIndex;
pub(crate) use tasks::TaskStore;
pub(crate) use undo::UndoLog;
