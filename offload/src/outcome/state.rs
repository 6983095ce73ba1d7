use crate::error::BoxError;

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Payload carried by an unwinding panic.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// The settled result of one work unit.
///
/// The variant is decided once, when the work finishes on the lane, so the
/// runner only has to match on it.
pub enum Outcome<T> {
    /// The work returned normally.
    Value(T),

    /// The work panicked. The payload is the original one and can be raised
    /// again with [`std::panic::resume_unwind`].
    Panicked(PanicPayload),

    /// The work returned an error.
    Failed(BoxError),

    /// The outcome was settled without a cause: the work was dropped before
    /// it could run.
    Lost,
}

/// Discriminant of an [`Outcome`], cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Value,
    Panicked,
    Failed,
    Lost,
}

impl<T> Outcome<T> {
    /// Runs `work` to completion and records how it ended.
    ///
    /// Unwinding is stopped here, which keeps the thread that runs the work
    /// alive whatever the work does.
    pub(crate) fn capture<E, F>(work: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        match panic::catch_unwind(AssertUnwindSafe(work)) {
            Ok(Ok(value)) => Outcome::Value(value),
            Ok(Err(error)) => Outcome::Failed(error.into()),
            Err(payload) => Outcome::Panicked(payload),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Value(_) => OutcomeKind::Value,
            Outcome::Panicked(_) => OutcomeKind::Panicked,
            Outcome::Failed(_) => OutcomeKind::Failed,
            Outcome::Lost => OutcomeKind::Lost,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Outcome::Panicked(payload) => f
                .debug_tuple("Panicked")
                .field(&panic_message(payload).unwrap_or("<non-string payload>"))
                .finish(),
            Outcome::Failed(error) => f.debug_tuple("Failed").field(error).finish(),
            Outcome::Lost => f.write_str("Lost"),
        }
    }
}

/// Extracts the message of a panic raised with `panic!`.
///
/// Returns `None` when the payload is neither a `&'static str` nor a
/// `String` (for example a value passed to [`std::panic::panic_any`]).
pub fn panic_message(payload: &PanicPayload) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return Some(*message);
    }

    payload.downcast_ref::<String>().map(String::as_str)
}
