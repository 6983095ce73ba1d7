//! # Offload
//!
//! **Offload** runs a unit of work on a background worker lane, blocks the
//! calling thread until that work has completed, and hands back either the
//! value it produced or its failure in the most faithful form possible.
//!
//! It is meant for tests that exercise code which must not run on the
//! calling ("main") thread: the work really runs elsewhere, but from the
//! caller's point of view the call is synchronous and deterministic.
//!
//! - A **value** comes back as `Ok(value)`.
//! - A **panic** is raised again on the calling thread with the original
//!   payload, so `#[should_panic(expected = ...)]` and `catch_unwind` see the
//!   same message and type as if the work had run inline.
//! - An **error** returned by fallible work is wrapped in
//!   [`OffloadError::Failed`], with the original error as its source.
//! - Work **dropped** by the lane before running yields [`OffloadError::Lost`].
//! - A caller **interrupted** through its [`Interrupter`] gets
//!   [`OffloadError::Interrupted`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use offload::TaskRunner;
//!
//! let runner = TaskRunner::new()?;
//!
//! let four = runner.call_in_background(|| 2 + 2)?;
//! assert_eq!(four, 4);
//!
//! runner.run_in_background(|| {
//!     assert_ne!(std::thread::current().name(), Some("main"));
//! })?;
//! ```
//!
//! ## Modules
//!
//! - [`lane`] — the worker lane contract and the provided lanes
//! - [`outcome`] — outcome handles and the tagged outcome
//! - [`config`] — serializable runner configuration
//!
//! There is no global runner: construct one where it is needed and clone it
//! to share its lane.

mod error;
mod interrupt;
mod runner;

pub mod config;
pub mod lane;
pub mod outcome;

pub use config::RunnerConfig;
pub use error::{BoxError, Interrupted, OffloadError, SetupError};
pub use interrupt::Interrupter;
pub use lane::{InlineLane, ThreadLane, WorkerLane, WorkerLaneExt};
pub use outcome::{Outcome, OutcomeHandle, OutcomeKind};
pub use runner::{TaskRunner, TaskRunnerBuilder};
