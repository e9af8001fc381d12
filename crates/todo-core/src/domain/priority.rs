//! Task priority.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer urgency rank. 1 is the most urgent, 5 the least.
///
/// Values outside `1..=5` are accepted and stored untouched; nothing in the
/// store clamps or rejects them. Ordering is plain integer ordering, so a
/// priority of 0 or below sorts ahead of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(i32);

impl Priority {
    pub const HIGHEST: Priority = Priority(1);
    pub const LOWEST: Priority = Priority(5);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Is this inside the documented `1..=5` range?
    pub fn is_standard(self) -> bool {
        (Self::HIGHEST.0..=Self::LOWEST.0).contains(&self.0)
    }

    /// Five-slot star rating, one filled star per priority point.
    ///
    /// Out-of-range values saturate: 0 or below renders all hollow, 6 or
    /// above all filled.
    pub fn stars(self) -> String {
        let slots = Self::LOWEST.0 as usize;
        let filled = self.0.clamp(0, Self::LOWEST.0) as usize;
        let mut out = String::with_capacity(slots * 3);
        out.extend(std::iter::repeat_n('★', filled));
        out.extend(std::iter::repeat_n('☆', slots - filled));
        out
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
