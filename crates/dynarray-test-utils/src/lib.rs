//! Test doubles for container development.
//!
//! Provides element types that record their own lifetimes and can be told to
//! fail on a chosen construction:
//!
//! - [`Tracker`]: shared tallies of created and dropped values, plus an
//!   optional armed failure.
//! - [`Tracked`]: an element registered with a tracker. Cloning it counts as
//!   a construction and panics when the armed failure fires.
//! - [`InjectedFailure`]: the error returned by [`Tracker::try_factory`].
//!
//! A leak shows up as `live() > 0` after everything is dropped; a double drop
//! shows up as `dropped() > created()`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

#[derive(Default)]
struct Tally {
    created: Cell<usize>,
    dropped: Cell<usize>,
    /// Constructions remaining before the armed failure fires.
    countdown: Cell<Option<usize>>,
}

/// Shared handle that counts [`Tracked`] constructions and drops.
#[derive(Clone, Default)]
pub struct Tracker {
    tally: Rc<Tally>,
}

impl Tracker {
    /// Create a tracker with zeroed tallies and no armed failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tracked value. Never fails, even when a failure is armed.
    pub fn track(&self, value: i32) -> Tracked {
        self.bump_created();
        Tracked {
            value,
            tracker: self.clone(),
        }
    }

    /// Make the `n`-th construction from now fail (1-based).
    ///
    /// Counts clones of [`Tracked`] and calls to factories from
    /// [`factory`](Self::factory) / [`try_factory`](Self::try_factory).
    /// Plain [`track`](Self::track) calls are not counted.
    pub fn fail_on(&self, n: usize) {
        assert!(n > 0, "fail_on is 1-based");
        self.tally.countdown.set(Some(n));
    }

    /// Cancel any armed failure.
    pub fn disarm(&self) {
        self.tally.countdown.set(None);
    }

    /// Total values constructed so far.
    pub fn created(&self) -> usize {
        self.tally.created.get()
    }

    /// Total values dropped so far.
    pub fn dropped(&self) -> usize {
        self.tally.dropped.get()
    }

    /// Values currently alive.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than created.
    pub fn live(&self) -> usize {
        let (created, dropped) = (self.created(), self.dropped());
        assert!(
            dropped <= created,
            "double drop detected: {dropped} drops for {created} constructions"
        );
        created - dropped
    }

    /// Constructor closure yielding `0, 1, 2, ...`; panics on the armed call.
    pub fn factory(&self) -> impl FnMut() -> Tracked + '_ {
        let mut next = 0;
        move || {
            if self.consume_countdown() {
                panic!("injected construction failure");
            }
            next += 1;
            self.track(next - 1)
        }
    }

    /// Fallible constructor closure yielding `0, 1, 2, ...`; returns
    /// [`InjectedFailure`] on the armed call.
    pub fn try_factory(&self) -> impl FnMut() -> Result<Tracked, InjectedFailure> + '_ {
        let mut next = 0;
        move || {
            if self.consume_countdown() {
                return Err(InjectedFailure);
            }
            next += 1;
            Ok(self.track(next - 1))
        }
    }

    /// Returns `true` when the armed failure fires on this construction.
    fn consume_countdown(&self) -> bool {
        match self.tally.countdown.get() {
            Some(1) => {
                self.tally.countdown.set(None);
                true
            }
            Some(n) => {
                self.tally.countdown.set(Some(n - 1));
                false
            }
            None => false,
        }
    }

    fn bump_created(&self) {
        self.tally.created.set(self.tally.created.get() + 1);
    }
}

/// Element whose constructions and drops are recorded by a [`Tracker`].
///
/// Equality and ordering look only at the payload value.
pub struct Tracked {
    value: i32,
    tracker: Tracker,
}

impl Tracked {
    /// The payload this value was tracked with.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if self.tracker.consume_countdown() {
            panic!("injected clone failure");
        }
        self.tracker.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let dropped = &self.tracker.tally.dropped;
        dropped.set(dropped.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Error produced by [`Tracker::try_factory`] when the armed failure fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InjectedFailure;

impl fmt::Display for InjectedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "injected construction failure")
    }
}

impl Error for InjectedFailure {}

/// Run `f` and assert that it panics.
pub fn assert_panics<R>(f: impl FnOnce() -> R) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    assert!(outcome.is_err(), "expected a panic");
}

/// Payload values of a run of tracked elements.
pub fn values<'a>(items: impl IntoIterator<Item = &'a Tracked>) -> Vec<i32> {
    items.into_iter().map(Tracked::value).collect()
}
