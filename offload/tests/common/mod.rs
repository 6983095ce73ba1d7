#![allow(dead_code)]

use offload::lane::Job;
use offload::outcome::PanicPayload;
use offload::{TaskRunner, WorkerLane};

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Runs every job on a fresh thread, after `dispatch` has returned.
pub struct DeferredLane;

impl WorkerLane for DeferredLane {
    fn dispatch(&self, job: Job) {
        thread::spawn(move || job.run());
    }

    fn name(&self) -> &str {
        "deferred"
    }
}

/// Drops every job without running it.
pub struct DroppingLane;

impl WorkerLane for DroppingLane {
    fn dispatch(&self, job: Job) {
        drop(job);
    }

    fn name(&self) -> &str {
        "dropping"
    }
}

/// Keeps jobs until they are released by the test.
#[derive(Default)]
pub struct ParkingLane {
    parked: Mutex<Vec<Job>>,
}

impl ParkingLane {
    pub fn parked(&self) -> usize {
        self.parked.lock().unwrap().len()
    }

    /// Runs every parked job on the calling thread.
    pub fn release(&self) {
        let jobs: Vec<Job> = self.parked.lock().unwrap().drain(..).collect();
        for job in jobs {
            job.run();
        }
    }
}

impl WorkerLane for ParkingLane {
    fn dispatch(&self, job: Job) {
        self.parked.lock().unwrap().push(job);
    }

    fn name(&self) -> &str {
        "parking"
    }
}

/// One runner per lane flavour: inline, thread-per-job, and a thread lane.
pub fn runners() -> Vec<TaskRunner> {
    init_tracing();

    vec![
        TaskRunner::inline(),
        TaskRunner::with_lane(Arc::new(DeferredLane)),
        TaskRunner::new().expect("failed to spawn thread lane"),
    ]
}

/// Runs `f`, expecting it to panic, and returns the panic payload.
pub fn expect_panic<R>(f: impl FnOnce() -> R) -> PanicPayload {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected the call to panic"),
        Err(payload) => payload,
    }
}
