use crate::error::OffloadError;
use crate::outcome::{Outcome, OutcomeHandle};

use std::panic;
use std::time::Duration;

/// Waits for `handle` and hands its outcome to the calling thread, keeping
/// the original failure whenever it can be kept.
///
/// - an interrupted wait returns [`OffloadError::Interrupted`] without
///   looking at the outcome,
/// - a panic is raised again with its original payload,
/// - an error returned by the work is attached as the source of
///   [`OffloadError::Failed`],
/// - an outcome settled without a cause becomes [`OffloadError::Lost`].
pub(crate) fn preserve_failure<T>(
    handle: OutcomeHandle<T>,
    poll_interval: Duration,
) -> Result<T, OffloadError> {
    handle.wait_interruptible(poll_interval)?;

    match handle.into_outcome() {
        Outcome::Value(value) => Ok(value),
        Outcome::Panicked(payload) => panic::resume_unwind(payload),
        Outcome::Failed(source) => Err(OffloadError::Failed { source }),
        Outcome::Lost => Err(OffloadError::Lost),
    }
}
