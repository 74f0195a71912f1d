//! Time sources for stamping document creation timestamps.
//!
//! The store restamps `created` on every save, so timestamp-sensitive
//! behavior (the strict `created_from` / `created_to` bounds) can only be
//! exercised with a controllable time source. [`SystemClock`] is the default;
//! [`SequenceClock`] replays a scripted sequence of instants for
//! deterministic tests.

use std::cell::RefCell;
use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// A source of the current time.
pub trait Clock: Debug {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that yields a scripted sequence of instants, one per call.
///
/// Once the sequence is exhausted, every further call returns the last
/// instant in the sequence.
#[derive(Debug)]
pub struct SequenceClock {
    instants: RefCell<Vec<DateTime<Utc>>>,
    position: RefCell<usize>,
}

impl SequenceClock {
    /// Creates a clock replaying the given instants in order.
    ///
    /// # Panics
    ///
    /// Panics if `instants` is empty.
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        assert!(!instants.is_empty(), "SequenceClock requires at least one instant");
        Self {
            instants: RefCell::new(instants),
            position: RefCell::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let instants = self.instants.borrow();
        let mut position = self.position.borrow_mut();
        let instant = instants[(*position).min(instants.len() - 1)];
        *position += 1;
        instant
    }
}
