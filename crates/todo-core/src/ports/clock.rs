//! Clock port - abstraction over "now".
//!
//! - **SystemClock**: wall clock, used by the CLI.
//! - **FixedClock**: frozen instant, used by tests.

use chrono::{DateTime, Utc};

/// Clock provides the current time.
///
/// Task creation timestamps and default due dates both come from here, so a
/// `FixedClock` makes them deterministic.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
