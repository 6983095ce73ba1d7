mod common;

use offload::{RunnerConfig, SetupError, TaskRunner, TaskRunnerBuilder, ThreadLane};
use std::thread;
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = RunnerConfig::default();

    assert_eq!(config.worker_threads, 1);
    assert_eq!(config.thread_name, "offload-worker");
    assert_eq!(config.poll_interval(), Duration::from_millis(10));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_document() {
    let config = RunnerConfig::from_json(r#"{ "worker_threads": 3 }"#).unwrap();

    assert_eq!(config.worker_threads, 3);
    assert_eq!(config.thread_name, "offload-worker");
    assert_eq!(config.poll_interval_ms, 10);
}

#[test]
fn test_config_roundtrip_through_json() {
    let config = RunnerConfig {
        worker_threads: 2,
        thread_name: "bg".into(),
        poll_interval_ms: 5,
    };

    let document = serde_json::to_string(&config).unwrap();
    assert_eq!(RunnerConfig::from_json(&document).unwrap(), config);
}

#[test]
fn test_config_unknown_field_rejected() {
    let result = RunnerConfig::from_json(r#"{ "threads": 3 }"#);
    assert!(matches!(result, Err(SetupError::Parse(_))));
}

#[test]
fn test_config_zero_workers_rejected() {
    let result = RunnerConfig::from_json(r#"{ "worker_threads": 0 }"#);

    match result {
        Err(SetupError::Invalid(message)) => assert!(message.contains("worker_threads")),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_config_invalid_values_rejected() {
    let zero_poll = RunnerConfig {
        poll_interval_ms: 0,
        ..RunnerConfig::default()
    };
    assert!(matches!(zero_poll.validate(), Err(SetupError::Invalid(_))));

    let blank_name = RunnerConfig {
        thread_name: "  ".into(),
        ..RunnerConfig::default()
    };
    assert!(matches!(blank_name.validate(), Err(SetupError::Invalid(_))));

    let nul_name = RunnerConfig {
        thread_name: "bad\0name".into(),
        ..RunnerConfig::default()
    };
    assert!(matches!(
        TaskRunnerBuilder::from_config(&nul_name),
        Err(SetupError::Invalid(_))
    ));
}

#[test]
fn test_builder_invalid_thread_name_rejected() {
    let nul_name = TaskRunner::builder().thread_name("bad\0name").build();
    assert!(matches!(nul_name, Err(SetupError::Invalid(_))));

    let blank_name = TaskRunner::builder().thread_name("").build();
    assert!(matches!(blank_name, Err(SetupError::Invalid(_))));
}

#[test]
fn test_thread_lane_invalid_name_rejected() {
    match ThreadLane::with_name(2, "bad\0name") {
        Err(SetupError::Invalid(message)) => assert!(message.contains("NUL")),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_builder_from_config() {
    common::init_tracing();

    let config = RunnerConfig::from_json(
        r#"{ "worker_threads": 2, "thread_name": "configured", "poll_interval_ms": 3 }"#,
    )
    .unwrap();

    let runner = TaskRunnerBuilder::from_config(&config)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(runner.lane_name(), "configured");
    assert_eq!(runner.poll_interval(), Duration::from_millis(3));

    let name = runner
        .call_in_background(|| thread::current().name().map(str::to_owned))
        .unwrap()
        .unwrap();
    assert!(name.starts_with("configured-"), "unexpected thread name {name}");
}

#[test]
fn test_builder_inline() {
    let runner = TaskRunner::builder()
        .poll_interval(Duration::from_millis(2))
        .build_inline();

    assert_eq!(runner.lane_name(), "inline");
    assert_eq!(runner.poll_interval(), Duration::from_millis(2));
    assert_eq!(runner.call_in_background(|| 6 * 7).unwrap(), 42);
}

#[test]
#[should_panic(expected = "worker_threads must be > 0")]
fn test_builder_zero_workers_panics() {
    let _ = TaskRunnerBuilder::new().worker_threads(0);
}

#[test]
#[should_panic(expected = "poll_interval must be > 0")]
fn test_builder_zero_poll_interval_panics() {
    let _ = TaskRunnerBuilder::new().poll_interval(Duration::ZERO);
}

#[test]
fn test_runner_debug() {
    let runner = TaskRunner::inline();
    let debug = format!("{:?}", runner);

    assert!(debug.contains("TaskRunner"));
    assert!(debug.contains("inline"));
}
