use super::builder::TaskRunnerBuilder;
use super::translate::preserve_failure;
use crate::config::DEFAULT_POLL_INTERVAL;
use crate::error::{BoxError, OffloadError, SetupError};
use crate::lane::{InlineLane, WorkerLane, WorkerLaneExt};
use crate::outcome::OutcomeHandle;

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Runs work on a worker lane and blocks until it is done.
///
/// `TaskRunner` is responsible for:
/// - submitting work units to its lane,
/// - blocking the calling thread until the submitted work has fully run,
/// - handing back the value, or the failure in its original form.
///
/// Cloning a runner is cheap and the clones share the same lane.
///
/// # Failure translation
///
/// | work ends with            | caller observes                          |
/// |---------------------------|------------------------------------------|
/// | a value                   | `Ok(value)`                              |
/// | a panic                   | the same panic, same payload             |
/// | `Err(e)`                  | [`OffloadError::Failed`] with `e` as source |
/// | dropped by the lane       | [`OffloadError::Lost`]                   |
/// | (caller interrupted)      | [`OffloadError::Interrupted`]            |
#[derive(Clone)]
pub struct TaskRunner {
    lane: Arc<dyn WorkerLane>,

    /// Interrupt check interval while blocked.
    poll_interval: Duration,
}

impl TaskRunner {
    /// Creates a runner backed by a single worker thread.
    pub fn new() -> Result<Self, SetupError> {
        TaskRunnerBuilder::new().build()
    }

    /// Returns a builder with the default configuration.
    pub fn builder() -> TaskRunnerBuilder {
        TaskRunnerBuilder::new()
    }

    /// Creates a runner that runs every work unit on the calling thread.
    pub fn inline() -> Self {
        Self::with_lane(Arc::new(InlineLane::new()))
    }

    /// Creates a runner on top of an existing lane.
    pub fn with_lane(lane: Arc<dyn WorkerLane>) -> Self {
        Self::from_parts(lane, DEFAULT_POLL_INTERVAL)
    }

    pub(crate) fn from_parts(lane: Arc<dyn WorkerLane>, poll_interval: Duration) -> Self {
        Self {
            lane,
            poll_interval,
        }
    }

    /// Runs `work` on the lane and returns once it has completed.
    ///
    /// # Panics
    ///
    /// If `work` panics, the panic is raised again on the calling thread
    /// with its original payload.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let counter = Arc::new(AtomicUsize::new(0));
    /// let c = counter.clone();
    ///
    /// runner.run_in_background(move || {
    ///     c.fetch_add(1, Ordering::SeqCst);
    /// })?;
    ///
    /// assert_eq!(counter.load(Ordering::SeqCst), 1);
    /// ```
    pub fn run_in_background<F>(&self, work: F) -> Result<(), OffloadError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.try_call_in_background(move || {
            work();
            Ok::<(), Infallible>(())
        })
    }

    /// Runs `work` on the lane and returns the value it produced.
    ///
    /// # Panics
    ///
    /// If `work` panics, the panic is raised again on the calling thread
    /// with its original payload.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let four = runner.call_in_background(|| 2 + 2)?;
    /// assert_eq!(four, 4);
    /// ```
    pub fn call_in_background<T, F>(&self, work: F) -> Result<T, OffloadError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        self.try_call_in_background(move || Ok::<T, Infallible>(work()))
    }

    /// Runs fallible `work` on the lane and returns the value it produced.
    ///
    /// An `Err` returned by `work` is reported as [`OffloadError::Failed`],
    /// with the original error available through
    /// [`source`](std::error::Error::source).
    ///
    /// # Panics
    ///
    /// If `work` panics, the panic is raised again on the calling thread
    /// with its original payload.
    pub fn try_call_in_background<T, E, F>(&self, work: F) -> Result<T, OffloadError>
    where
        T: Send + 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        let handle = self.lane.submit(work);
        preserve_failure(handle, self.poll_interval)
    }

    /// Submits `work` without waiting for it.
    pub fn submit<T, E, F>(&self, work: F) -> OutcomeHandle<T>
    where
        T: Send + 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        self.lane.submit(work)
    }

    /// Name of the lane the runner submits to.
    pub fn lane_name(&self) -> &str {
        self.lane.name()
    }

    /// How often a blocked caller checks its interrupt flag.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Shuts the lane down.
    ///
    /// On a [`ThreadLane`](crate::ThreadLane), work queued or submitted
    /// afterwards reports [`OffloadError::Lost`]. This affects every clone of
    /// the runner.
    pub fn shutdown(&self) {
        self.lane.shutdown();
    }
}

impl fmt::Debug for TaskRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRunner")
            .field("lane", &self.lane.name())
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
