//! Runner configuration.
//!
//! [`RunnerConfig`] is the serializable form of the options accepted by
//! [`TaskRunnerBuilder`](crate::TaskRunnerBuilder). Missing fields take their
//! default value.
//!
//! ```json
//! { "worker_threads": 1, "thread_name": "offload-worker", "poll_interval_ms": 10 }
//! ```

use crate::error::SetupError;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default prefix of worker thread names.
pub const DEFAULT_THREAD_NAME: &str = "offload-worker";

/// Default interval at which a blocked caller checks its interrupt flag.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Number of threads in the worker lane.
    pub worker_threads: usize,
    /// Prefix of worker thread names.
    pub thread_name: String,
    /// Interrupt check interval of a blocked caller, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            worker_threads: 1,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl RunnerConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(document: &str) -> Result<Self, SetupError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value can be used to build a runner.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.worker_threads == 0 {
            return Err(SetupError::Invalid("worker_threads must be > 0".into()));
        }

        if self.poll_interval_ms == 0 {
            return Err(SetupError::Invalid("poll_interval_ms must be > 0".into()));
        }

        validate_thread_name(&self.thread_name)
    }

    /// The interrupt check interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Rejects thread name prefixes that are blank or that the OS cannot take.
pub(crate) fn validate_thread_name(name: &str) -> Result<(), SetupError> {
    if name.trim().is_empty() {
        return Err(SetupError::Invalid("thread_name must not be empty".into()));
    }

    if name.contains('\0') {
        return Err(SetupError::Invalid(
            "thread_name must not contain NUL bytes".into(),
        ));
    }

    Ok(())
}
