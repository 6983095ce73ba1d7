//! Per-thread interrupt flags.
//!
//! A thread blocked in a runner call can be woken from the outside by
//! raising its interrupt flag through an [`Interrupter`]. The blocked call
//! then returns [`OffloadError::Interrupted`] without looking at the work's
//! outcome.
//!
//! The flag is sticky: raising it while the thread is not waiting aborts the
//! next interruptible wait on that thread. Aborting a wait clears it.
//!
//! [`OffloadError::Interrupted`]: crate::OffloadError::Interrupted

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

thread_local! {
    /// Interrupt flag of the current thread, shared with every
    /// [`Interrupter`] created on it.
    static CURRENT_INTERRUPT: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
}

/// Handle to one thread's interrupt flag.
///
/// Obtain it on the thread that is going to wait, then move a clone to the
/// thread that decides to abort the wait.
///
/// # Examples
///
/// ```rust,ignore
/// let interrupter = Interrupter::current();
///
/// std::thread::spawn(move || interrupter.interrupt());
///
/// let result = runner.run_in_background(|| loop {});
/// ```
#[derive(Debug, Clone)]
pub struct Interrupter {
    flag: Arc<AtomicBool>,
}

impl Interrupter {
    /// Returns the interrupter of the calling thread.
    pub fn current() -> Self {
        let flag = CURRENT_INTERRUPT.with(Arc::clone);
        Self { flag }
    }

    /// Raises the interrupt flag.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Returns `true` if the flag is raised and not yet consumed by a wait.
    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Lowers the flag without aborting anything.
    pub fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Consumes the calling thread's interrupt flag.
///
/// Returns `true` if it was raised.
pub(crate) fn take_current() -> bool {
    CURRENT_INTERRUPT.with(|flag| flag.swap(false, Ordering::AcqRel))
}
