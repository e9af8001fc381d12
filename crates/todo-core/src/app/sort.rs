//! Listing order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Order in which `list_tasks` yields tasks.
///
/// Every order is a stable sort over insertion order, so ties keep the order
/// tasks were added (or reinserted) in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Priority,
    DueDate,
    CreatedAt,
    /// Store order, no sorting.
    Insertion,
}

impl SortKey {
    /// Parse a sort key, falling back to insertion order for anything
    /// unrecognized. Never fails.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(SortKey::Insertion)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Priority => "priority",
            SortKey::DueDate => "due_date",
            SortKey::CreatedAt => "created_at",
            SortKey::Insertion => "none",
        }
    }

    /// Stable in-place sort of `tasks` by this key.
    pub(crate) fn sort(self, tasks: &mut [&Task]) {
        match self {
            SortKey::Priority => tasks.sort_by_key(|task| task.priority()),
            SortKey::DueDate => tasks.sort_by_key(|task| task.due_date()),
            SortKey::CreatedAt => tasks.sort_by_key(|task| task.created_at()),
            SortKey::Insertion => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "date" | "due" | "due_date" => Ok(SortKey::DueDate),
            "created" | "created_at" => Ok(SortKey::CreatedAt),
            "none" | "insertion" => Ok(SortKey::Insertion),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
