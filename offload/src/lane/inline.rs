use super::WorkerLane;
use super::job::Job;

/// A lane that runs every job on the thread that dispatches it.
///
/// The outcome handle is already settled when submission returns, which
/// makes this lane fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineLane;

impl InlineLane {
    pub fn new() -> Self {
        Self
    }
}

impl WorkerLane for InlineLane {
    fn dispatch(&self, job: Job) {
        job.run();
    }

    fn name(&self) -> &str {
        "inline"
    }
}
