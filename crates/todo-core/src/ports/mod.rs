//! Ports - seams for things the core does not own.

pub mod clock;

pub use self::clock::{Clock, FixedClock, SystemClock};
