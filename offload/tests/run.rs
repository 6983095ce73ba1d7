mod common;

use common::runners;
use offload::TaskRunner;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_run_increments_counter_once() {
    for runner in runners() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();

        let result = runner.run_in_background(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert!(result.is_ok(), "lane {} returned {:?}", runner.lane_name(), result);
        assert_eq!(
            counter.load(Ordering::SeqCst),
            1,
            "lane {} should run the work exactly once",
            runner.lane_name()
        );
    }
}

#[test]
fn test_run_on_worker_thread() {
    let runner = TaskRunner::new().unwrap();
    let caller = thread::current().id();

    let seen = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();

    runner
        .run_in_background(move || {
            let current = thread::current();
            *seen_clone.lock().unwrap() =
                Some((current.id(), current.name().map(str::to_owned)));
        })
        .unwrap();

    let (id, name) = seen.lock().unwrap().take().expect("work did not run");
    assert_ne!(id, caller, "work should not run on the calling thread");
    assert_eq!(name.as_deref(), Some("offload-worker-0"));
}

#[test]
fn test_run_inline_on_calling_thread() {
    let runner = TaskRunner::inline();
    let caller = thread::current().id();

    let seen = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();

    runner
        .run_in_background(move || {
            *seen_clone.lock().unwrap() = Some(thread::current().id());
        })
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), Some(caller));
}

#[test]
fn test_run_side_effects_visible_after_return() {
    for runner in runners() {
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let log_clone = log.clone();
            runner
                .run_in_background(move || log_clone.lock().unwrap().push(i))
                .unwrap();

            assert_eq!(log.lock().unwrap().len(), i + 1);
        }

        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }
}

#[test]
fn test_run_clones_share_lane() {
    let runner = TaskRunner::new().unwrap();
    let other = runner.clone();

    let names = Arc::new(Mutex::new(Vec::new()));

    for r in [&runner, &other] {
        let names = names.clone();
        r.run_in_background(move || {
            let name = thread::current().name().map(str::to_owned);
            names.lock().unwrap().push(name);
        })
        .unwrap();
    }

    let names = names.lock().unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0], names[1], "clones should share the single worker");
}
