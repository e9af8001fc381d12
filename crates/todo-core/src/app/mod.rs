//! App - the to-do list facade and its wiring.
//!
//! # Main components
//! - **ToDoList**: the only entry point callers use
//! - **ToDoListBuilder**: wiring of clock and defaults
//! - **SortKey**: listing orders
//! - **TodoConfig**: defaults for omitted values

pub mod builder;
pub mod config;
pub mod sort;
pub mod todo_list;

pub use self::builder::ToDoListBuilder;
pub use self::config::TodoConfig;
pub use self::sort::{SortKey, UnknownSortKey};
pub use self::todo_list::{SearchMatch, ToDoList};
