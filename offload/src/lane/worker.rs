use super::queue::JobQueue;

use std::sync::Arc;
use tracing::debug;

/// A worker thread of a [`ThreadLane`].
///
/// Runs jobs one at a time, in queue order, until the queue shuts down.
///
/// [`ThreadLane`]: super::ThreadLane
pub(crate) struct Worker {
    /// Index of the worker within its lane.
    id: usize,

    queue: Arc<JobQueue>,
}

impl Worker {
    pub(crate) fn new(id: usize, queue: Arc<JobQueue>) -> Self {
        Self { id, queue }
    }

    /// Runs the worker loop on the current thread.
    pub(crate) fn run(&self) {
        debug!(worker = self.id, "worker started");

        while let Some(job) = self.queue.pop() {
            job.run();
        }

        debug!(worker = self.id, "worker exiting");
    }
}
