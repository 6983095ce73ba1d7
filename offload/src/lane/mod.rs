//! Worker lanes.
//!
//! A lane is whatever actually runs submitted work. The runner only relies on
//! the [`WorkerLane`] contract:
//! - [`dispatch`](WorkerLane::dispatch) schedules a job and returns without
//!   waiting for it,
//! - a job that is dropped instead of run settles its outcome as lost.
//!
//! Two lanes are provided:
//! - [`ThreadLane`]: named worker threads fed from a shared FIFO queue,
//! - [`InlineLane`]: runs each job on the submitting thread.
//!
//! Ordering across submissions and the number of jobs running at once are
//! up to the lane.

mod inline;
mod job;
mod queue;
mod thread;
mod worker;

#[doc(inline)]
pub use inline::InlineLane;

#[doc(inline)]
pub use job::{Job, JobId};

#[doc(inline)]
pub use thread::ThreadLane;

use crate::error::BoxError;
use crate::outcome::{self, Outcome, OutcomeHandle};

use tracing::trace;

/// Executes jobs on behalf of a runner.
///
/// Implementors only deal with type-erased [`Job`]s; typed submission is
/// provided by [`WorkerLaneExt`].
pub trait WorkerLane: Send + Sync {
    /// Schedules `job` for execution.
    ///
    /// Must not wait for the job to finish. A lane that cannot run the job
    /// drops it.
    fn dispatch(&self, job: Job);

    /// Name used in log events.
    fn name(&self) -> &str;

    /// Stops accepting jobs. Jobs dispatched afterwards are dropped.
    fn shutdown(&self) {}
}

/// Typed submission on top of [`WorkerLane`].
///
/// Implemented for every lane, including `dyn WorkerLane`.
pub trait WorkerLaneExt: WorkerLane {
    /// Submits a fallible work unit and returns the handle its outcome will
    /// be settled into.
    ///
    /// The handle settles only after `work` has fully run (or after the lane
    /// dropped it).
    fn submit<T, E, F>(&self, work: F) -> OutcomeHandle<T>
    where
        T: Send + 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        let (settler, handle) = outcome::channel();
        let id = JobId::next();

        let job = Job::new(id, move || {
            let outcome = Outcome::capture(work);
            trace!(job = %id, outcome = ?outcome.kind(), "job settled");
            settler.settle(outcome);
        });

        trace!(job = %id, lane = self.name(), "dispatching job");
        self.dispatch(job);

        handle
    }
}

impl<L: WorkerLane + ?Sized> WorkerLaneExt for L {}
