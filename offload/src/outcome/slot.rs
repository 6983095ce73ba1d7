use super::state::{Outcome, OutcomeKind};
use crate::error::Interrupted;
use crate::interrupt;

use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Storage shared by a [`Settler`] and its [`OutcomeHandle`].
struct Slot<T> {
    /// `None` while the work is pending.
    state: Mutex<Option<Outcome<T>>>,

    /// Signalled once, when the outcome is stored.
    settled: Condvar,
}

/// Creates a connected pair of [`Settler`] and [`OutcomeHandle`].
pub(crate) fn channel<T>() -> (Settler<T>, OutcomeHandle<T>) {
    let inner = Arc::new(Slot {
        state: Mutex::new(None),
        settled: Condvar::new(),
    });

    (
        Settler {
            inner: inner.clone(),
            settled: false,
        },
        OutcomeHandle { inner },
    )
}

/// Write side of an outcome slot, owned by the job running on the lane.
///
/// Settling consumes the settler, so an outcome is written at most once.
/// Dropping a settler that was never used settles [`Outcome::Lost`].
pub(crate) struct Settler<T> {
    inner: Arc<Slot<T>>,
    settled: bool,
}

impl<T> Settler<T> {
    pub(crate) fn settle(mut self, outcome: Outcome<T>) {
        self.store(outcome);
        self.settled = true;
    }

    fn store(&self, outcome: Outcome<T>) {
        let mut state = self.inner.state.lock();

        if state.is_none() {
            *state = Some(outcome);
        }

        drop(state);
        self.inner.settled.notify_all();
    }
}

impl<T> Drop for Settler<T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        self.store(Outcome::Lost);
    }
}

/// Read side of an outcome slot.
///
/// Every wait reports the same [`OutcomeKind`] once the slot has settled.
/// The outcome itself is moved out by [`into_outcome`](Self::into_outcome),
/// which consumes the handle.
pub struct OutcomeHandle<T> {
    inner: Arc<Slot<T>>,
}

impl<T> OutcomeHandle<T> {
    /// Returns `true` if the outcome is available without blocking.
    pub fn is_settled(&self) -> bool {
        self.inner.state.lock().is_some()
    }

    /// Returns the kind of the outcome if it has settled.
    pub fn kind(&self) -> Option<OutcomeKind> {
        self.inner.state.lock().as_ref().map(Outcome::kind)
    }

    /// Blocks the calling thread until the outcome settles.
    pub fn wait(&self) -> OutcomeKind {
        let mut state = self.inner.state.lock();

        loop {
            if let Some(outcome) = state.as_ref() {
                return outcome.kind();
            }

            self.inner.settled.wait(&mut state);
        }
    }

    /// Blocks the calling thread until the outcome settles or the thread is
    /// interrupted.
    ///
    /// The interrupt flag of the calling thread is checked every
    /// `poll_interval` while the outcome is pending, and cleared when it
    /// aborts the wait. An outcome that is already settled always wins over
    /// a pending interrupt.
    pub fn wait_interruptible(&self, poll_interval: Duration) -> Result<OutcomeKind, Interrupted> {
        let mut state = self.inner.state.lock();

        loop {
            if let Some(outcome) = state.as_ref() {
                return Ok(outcome.kind());
            }

            if interrupt::take_current() {
                return Err(Interrupted);
            }

            self.inner.settled.wait_for(&mut state, poll_interval);
        }
    }

    /// Blocks until the outcome settles and moves it out of the slot.
    pub fn into_outcome(self) -> Outcome<T> {
        let mut state = self.inner.state.lock();

        loop {
            if let Some(outcome) = state.take() {
                return outcome;
            }

            self.inner.settled.wait(&mut state);
        }
    }
}

impl<T> fmt::Debug for OutcomeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutcomeHandle")
            .field("kind", &self.kind())
            .finish()
    }
}
