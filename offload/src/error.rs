//! Error types.
//!
//! [`OffloadError`] is what a caller of the runner sees when background work
//! does not hand back a value. Panics raised by the work are not part of this
//! enum: they are raised again on the calling thread with their original
//! payload.
//!
//! [`SetupError`] covers everything that can go wrong before any work runs
//! (parsing configuration, spawning worker threads).

use thiserror::Error;

/// Type-erased error produced by a fallible work unit.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single background call.
#[derive(Error, Debug)]
pub enum OffloadError {
    /// The work returned an error. The original error is kept as the source.
    #[error("background work failed: {source}")]
    Failed {
        #[source]
        source: BoxError,
    },

    /// The outcome settled without any cause: the lane dropped the work
    /// before running it.
    #[error("background work was lost before it produced an outcome")]
    Lost,

    /// The calling thread was interrupted while it waited. The work itself
    /// may still be running.
    #[error("interrupted while waiting for background work")]
    Interrupted,
}

impl OffloadError {
    /// Returns `true` if the wait was aborted rather than the work failing.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }

    /// Returns `true` if the work never produced an outcome.
    pub fn is_lost(&self) -> bool {
        matches!(self, Self::Lost)
    }

    /// Consumes the error and returns the error the work returned, if any.
    pub fn into_source(self) -> Option<BoxError> {
        match self {
            Self::Failed { source } => Some(source),
            Self::Lost | Self::Interrupted => None,
        }
    }
}

/// Marker returned by [`OutcomeHandle::wait_interruptible`] when the waiting
/// thread was interrupted.
///
/// [`OutcomeHandle::wait_interruptible`]: crate::OutcomeHandle::wait_interruptible
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("wait interrupted")]
pub struct Interrupted;

impl From<Interrupted> for OffloadError {
    fn from(_: Interrupted) -> Self {
        Self::Interrupted
    }
}

/// Failure while configuring or building a runner.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
