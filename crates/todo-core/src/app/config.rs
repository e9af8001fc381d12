//! List-wide defaults.

use serde::{Deserialize, Serialize};

use super::SortKey;
use crate::domain::Priority;

/// Defaults applied when a caller leaves a value out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Priority given to tasks added without one.
    pub default_priority: Priority,

    /// Order used by callers that list without naming one.
    pub default_sort: SortKey,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            default_sort: SortKey::Priority,
        }
    }
}
