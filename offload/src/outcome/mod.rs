//! Outcome of a work unit.
//!
//! A submission produces a connected pair:
//! - a settler, moved into the job and written exactly once when the work
//!   ends (or dropped, which records a lost outcome),
//! - an [`OutcomeHandle`], kept by the submitter and read by blocking on it.

mod slot;
mod state;

pub(crate) use slot::channel;

#[doc(inline)]
pub use slot::OutcomeHandle;

#[doc(inline)]
pub use state::{Outcome, OutcomeKind, PanicPayload, panic_message};
