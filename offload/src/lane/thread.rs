use super::job::Job;
use super::queue::JobQueue;
use super::worker::Worker;
use super::WorkerLane;
use crate::config::{DEFAULT_THREAD_NAME, validate_thread_name};
use crate::error::SetupError;

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// A lane backed by dedicated OS threads.
///
/// `ThreadLane` is responsible for:
/// - spawning its named worker threads,
/// - feeding them jobs in submission order through a shared queue,
/// - shutting down and joining its threads when dropped.
///
/// With a single worker, jobs run strictly one after another. With several
/// workers, jobs may run concurrently.
pub struct ThreadLane {
    name: String,

    /// Queue shared with every worker.
    queue: Arc<JobQueue>,

    /// Join handles for worker threads.
    handles: Vec<JoinHandle<()>>,
}

impl ThreadLane {
    /// Spawns a lane with `worker_threads` workers and the default thread
    /// name.
    ///
    /// # Panics
    ///
    /// Panics if `worker_threads == 0`.
    pub fn new(worker_threads: usize) -> Result<Self, SetupError> {
        Self::with_name(worker_threads, DEFAULT_THREAD_NAME)
    }

    /// Spawns a lane whose threads are named `{name}-{index}`.
    ///
    /// A blank name, or one containing a NUL byte, is rejected with
    /// [`SetupError::Invalid`] before any thread is spawned. If a thread
    /// fails to spawn, the workers started so far are shut down and joined
    /// before the error is returned.
    ///
    /// # Panics
    ///
    /// Panics if `worker_threads == 0`.
    pub fn with_name(worker_threads: usize, name: impl Into<String>) -> Result<Self, SetupError> {
        assert!(worker_threads > 0, "worker_threads must be > 0");

        let name = name.into();
        validate_thread_name(&name)?;

        let mut lane = Self {
            name,
            queue: Arc::new(JobQueue::new()),
            handles: Vec::with_capacity(worker_threads),
        };

        for id in 0..worker_threads {
            let worker = Worker::new(id, lane.queue.clone());

            // Dropping `lane` on error shuts the queue down and joins the
            // workers spawned so far.
            let handle = thread::Builder::new()
                .name(format!("{}-{}", lane.name, id))
                .spawn(move || worker.run())?;

            lane.handles.push(handle);
        }

        debug!(lane = %lane.name, workers = worker_threads, "thread lane started");

        Ok(lane)
    }

    /// Number of worker threads owned by the lane.
    pub fn worker_threads(&self) -> usize {
        self.handles.len()
    }

    /// Whether the lane has been shut down.
    pub fn is_shutdown(&self) -> bool {
        self.queue.is_shutdown()
    }

    /// Waits for all worker threads to terminate.
    ///
    /// This should be called after initiating shutdown. A worker that drops
    /// the last reference to its own lane is not joined.
    fn join(&mut self) {
        let current = thread::current().id();

        for handle in self.handles.drain(..) {
            if handle.thread().id() == current {
                continue;
            }

            let _ = handle.join();
        }
    }
}

impl WorkerLane for ThreadLane {
    fn dispatch(&self, job: Job) {
        self.queue.push(job);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn shutdown(&self) {
        if self.queue.shutdown() {
            debug!(lane = %self.name, "thread lane shut down");
        }
    }
}

impl Drop for ThreadLane {
    /// Shuts the lane down and joins its workers.
    ///
    /// A worker busy with a job finishes that job first.
    fn drop(&mut self) {
        self.shutdown();
        self.join();
    }
}

impl fmt::Debug for ThreadLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadLane")
            .field("name", &self.name)
            .field("worker_threads", &self.handles.len())
            .field("shutdown", &self.is_shutdown())
            .finish()
    }
}
