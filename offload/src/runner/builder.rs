use super::TaskRunner;
use crate::config::RunnerConfig;
use crate::error::SetupError;
use crate::lane::{InlineLane, ThreadLane, WorkerLane};

use std::sync::Arc;
use std::time::Duration;

/// Builder for configuring and creating a [`TaskRunner`].
///
/// By default the runner owns a single worker thread, so work units run one
/// after another.
///
/// # Examples
///
/// ```rust,ignore
/// let runner = TaskRunnerBuilder::new()
///     .worker_threads(2)
///     .thread_name("io-offload")
///     .build()?;
/// ```
pub struct TaskRunnerBuilder {
    /// Number of threads in the worker lane.
    worker_threads: usize,

    /// Prefix of worker thread names.
    thread_name: String,

    /// Interrupt check interval while a caller is blocked.
    poll_interval: Duration,
}

impl TaskRunnerBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        let config = RunnerConfig::default();

        Self {
            worker_threads: config.worker_threads,
            poll_interval: config.poll_interval(),
            thread_name: config.thread_name,
        }
    }

    /// Creates a builder from a configuration, validating it first.
    pub fn from_config(config: &RunnerConfig) -> Result<Self, SetupError> {
        config.validate()?;

        Ok(Self {
            worker_threads: config.worker_threads,
            thread_name: config.thread_name.clone(),
            poll_interval: config.poll_interval(),
        })
    }

    /// Sets the number of worker threads.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn worker_threads(mut self, n: usize) -> Self {
        assert!(n > 0, "worker_threads must be > 0");

        self.worker_threads = n;
        self
    }

    /// Sets the prefix of worker thread names.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Sets how often a blocked caller checks its interrupt flag.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "poll_interval must be > 0");

        self.poll_interval = interval;
        self
    }

    /// Builds a runner backed by a [`ThreadLane`].
    ///
    /// Returns [`SetupError::Invalid`] if the thread name is blank or
    /// contains a NUL byte, and [`SetupError::Spawn`] if a worker thread
    /// cannot be started.
    pub fn build(self) -> Result<TaskRunner, SetupError> {
        let lane = ThreadLane::with_name(self.worker_threads, self.thread_name)?;
        Ok(TaskRunner::from_parts(Arc::new(lane), self.poll_interval))
    }

    /// Builds a runner backed by an [`InlineLane`]. Thread settings are
    /// ignored.
    pub fn build_inline(self) -> TaskRunner {
        TaskRunner::from_parts(Arc::new(InlineLane::new()), self.poll_interval)
    }

    /// Builds a runner on top of `lane`. Thread settings are ignored.
    pub fn build_with_lane(self, lane: Arc<dyn WorkerLane>) -> TaskRunner {
        TaskRunner::from_parts(lane, self.poll_interval)
    }
}

impl Default for TaskRunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
