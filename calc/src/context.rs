//! This module manages the context in which the calculator performs
//! a single operation.
//!
//! The calculator core never reads a clock.  The presentation layer
//! tells it what time it is on each call, and the core only records
//! that time (the entry buffer remembers when it was last edited, so
//! that a cursor can be made to blink relative to the last edit).
use core::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Time elapsed since the presentation layer started.
    pub elapsed: Duration,
}

impl Context {
    #[must_use]
    pub fn new(elapsed: Duration) -> Context {
        Context { elapsed }
    }
}
