//! The blocking task runner.
//!
//! - `core`: submission, blocking and failure translation entry points,
//! - `builder`: runner construction,
//! - `translate`: turns a settled outcome into what the caller observes.

pub(crate) mod builder;
pub(crate) mod core;

mod translate;

pub use builder::TaskRunnerBuilder;
pub use self::core::TaskRunner;
