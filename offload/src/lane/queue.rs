use super::job::Job;

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use tracing::warn;

/// FIFO queue shared by the workers of a [`ThreadLane`].
///
/// Workers sleep on the condition variable while the queue is empty.
/// Closing the queue wakes every worker and drops whatever was still queued.
///
/// [`ThreadLane`]: super::ThreadLane
pub(crate) struct JobQueue {
    state: Mutex<QueueState>,

    /// Signalled on push and on shutdown.
    available: Condvar,
}

struct QueueState {
    jobs: VecDeque<Job>,
    shutdown: bool,
}

impl JobQueue {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                jobs: VecDeque::new(),
                shutdown: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Appends a job and wakes one idle worker.
    ///
    /// After shutdown the job is dropped, which settles it as lost.
    pub(crate) fn push(&self, job: Job) {
        let mut state = self.state.lock();

        if state.shutdown {
            drop(state);
            warn!(job = %job.id(), "lane is shut down, dropping job");
            return;
        }

        state.jobs.push_back(job);
        drop(state);

        self.available.notify_one();
    }

    /// Takes the oldest job, sleeping while the queue is empty.
    ///
    /// Returns `None` once the queue is shut down.
    pub(crate) fn pop(&self) -> Option<Job> {
        let mut state = self.state.lock();

        loop {
            if state.shutdown {
                return None;
            }

            if let Some(job) = state.jobs.pop_front() {
                return Some(job);
            }

            self.available.wait(&mut state);
        }
    }

    /// Closes the queue and wakes all workers.
    ///
    /// Returns `false` if the queue was already closed.
    pub(crate) fn shutdown(&self) -> bool {
        let mut state = self.state.lock();

        if state.shutdown {
            return false;
        }

        state.shutdown = true;
        let pending: Vec<Job> = state.jobs.drain(..).collect();
        drop(state);

        self.available.notify_all();

        if !pending.is_empty() {
            warn!(count = pending.len(), "dropping queued jobs on shutdown");
        }

        true
    }

    pub(crate) fn is_shutdown(&self) -> bool {
        self.state.lock().shutdown
    }
}
