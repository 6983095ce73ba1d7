use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

impl JobId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A type-erased unit of work handed to a lane.
///
/// Running the job settles the outcome of the work it wraps. Dropping it
/// without running settles that outcome as lost.
pub struct Job {
    id: JobId,
    body: Box<dyn FnOnce() + Send + 'static>,
}

impl Job {
    pub(crate) fn new(id: JobId, body: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            body: Box::new(body),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    /// Runs the job on the current thread.
    ///
    /// Panics raised by the wrapped work are captured into its outcome and
    /// do not escape.
    pub fn run(self) {
        (self.body)()
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job").field("id", &self.id).finish_non_exhaustive()
    }
}
