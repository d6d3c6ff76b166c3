//! Reference timelines over the classic four-process batch.

use cpu_schedule::models::{Algorithm, ProcessSpec, SchedulingResult};
use cpu_schedule::scheduler::{Simulator, DEFAULT_TIME_QUANTUM};
use cpu_schedule::workload::sample_batch;
use cpu_schedule::{run, SimulationError};

fn unprioritized() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 8),
        ProcessSpec::new("P2", 1, 4),
        ProcessSpec::new("P3", 2, 9),
        ProcessSpec::new("P4", 3, 5),
    ]
}

fn spans(result: &SchedulingResult) -> Vec<(&str, i64, i64)> {
    result
        .intervals
        .iter()
        .map(|i| (i.process_id.as_str(), i.start_time, i.end_time))
        .collect()
}

fn completions(result: &SchedulingResult) -> Vec<i64> {
    result
        .processes
        .iter()
        .map(|p| p.completion_time().unwrap())
        .collect()
}

fn waits(result: &SchedulingResult) -> Vec<i64> {
    result
        .processes
        .iter()
        .map(|p| p.waiting_time().unwrap())
        .collect()
}

#[test]
fn fcfs_reference() {
    let result = run(Algorithm::Fcfs, &unprioritized(), None).unwrap();
    assert_eq!(result.completion_order(), vec!["P1", "P2", "P3", "P4"]);
    assert_eq!(completions(&result), vec![8, 12, 21, 26]);
    assert_eq!(waits(&result), vec![0, 7, 10, 18]);
    assert_eq!(result.total_time, 26);
    assert!((result.average_waiting_time - 8.75).abs() < 1e-10);
    assert!((result.average_turnaround_time - 15.25).abs() < 1e-10);
    assert!((result.average_response_time - 8.75).abs() < 1e-10);
}

#[test]
fn sjf_non_preemptive_reference() {
    let result = run(Algorithm::SjfNonPreemptive, &unprioritized(), None).unwrap();
    assert_eq!(result.completion_order(), vec!["P1", "P2", "P4", "P3"]);
    assert_eq!(completions(&result), vec![8, 12, 17, 26]);
    assert_eq!(
        spans(&result),
        vec![("P1", 0, 8), ("P2", 8, 12), ("P4", 12, 17), ("P3", 17, 26)]
    );
}

#[test]
fn srtf_reference() {
    let result = run(Algorithm::SjfPreemptive, &unprioritized(), None).unwrap();
    assert_eq!(
        spans(&result),
        vec![
            ("P1", 0, 1),
            ("P2", 1, 5),
            ("P4", 5, 10),
            ("P1", 10, 17),
            ("P3", 17, 26),
        ]
    );
    assert_eq!(result.completion_order(), vec!["P2", "P4", "P1", "P3"]);
    assert!((result.average_waiting_time - 6.5).abs() < 1e-10);

    let p1 = result.record("P1").unwrap();
    assert_eq!(p1.start_time(), Some(0));
    assert_eq!(p1.response_time(), Some(0));
    assert_eq!(p1.waiting_time(), Some(9));
}

#[test]
fn round_robin_reference() {
    let result = run(Algorithm::RoundRobin, &unprioritized(), Some(2)).unwrap();
    assert_eq!(result.intervals[0].process_id, "P1");
    assert_eq!((result.intervals[0].start_time, result.intervals[0].end_time), (0, 2));
    assert_eq!(result.intervals[1].process_id, "P2");
    assert_eq!((result.intervals[1].start_time, result.intervals[1].end_time), (2, 4));

    assert_eq!(
        spans(&result),
        vec![
            ("P1", 0, 2),
            ("P2", 2, 4),
            ("P3", 4, 6),
            ("P1", 6, 8),
            ("P4", 8, 10),
            ("P2", 10, 12),
            ("P3", 12, 14),
            ("P1", 14, 16),
            ("P4", 16, 18),
            ("P3", 18, 20),
            ("P1", 20, 22),
            ("P4", 22, 23),
            ("P3", 23, 25),
            ("P3", 25, 26),
        ]
    );
    assert_eq!(result.completion_order(), vec!["P2", "P1", "P4", "P3"]);
    assert_eq!(completions(&result), vec![12, 22, 23, 26]);
}

#[test]
fn priority_non_preemptive_reference() {
    let result = run(Algorithm::PriorityNonPreemptive, &sample_batch(), None).unwrap();
    assert_eq!(
        spans(&result),
        vec![("P1", 0, 8), ("P3", 8, 17), ("P4", 17, 22), ("P2", 22, 26)]
    );
}

#[test]
fn priority_preemptive_reference() {
    let result = run(Algorithm::PriorityPreemptive, &sample_batch(), None).unwrap();
    assert_eq!(
        spans(&result),
        vec![
            ("P1", 0, 2),
            ("P3", 2, 11),
            ("P1", 11, 17),
            ("P4", 17, 22),
            ("P2", 22, 26),
        ]
    );
    assert_eq!(result.completion_order(), vec!["P3", "P1", "P4", "P2"]);
}

#[test]
fn higher_priority_arrival_truncates_running_interval() {
    let processes = vec![
        ProcessSpec::new("low", 0, 5).with_priority(1),
        ProcessSpec::new("high", 2, 2).with_priority(5),
    ];
    let result = run(Algorithm::PriorityPreemptive, &processes, None).unwrap();
    assert_eq!(
        spans(&result),
        vec![("low", 0, 2), ("high", 2, 4), ("low", 4, 7)]
    );
    let high = result.record("high").unwrap();
    assert_eq!(high.response_time(), Some(0));
    assert_eq!(high.waiting_time(), Some(0));
}

#[test]
fn single_process_has_no_wait_under_any_policy() {
    let processes = vec![ProcessSpec::new("solo", 0, 7).with_priority(1)];
    for alg in Algorithm::ALL {
        let result = run(alg, &processes, Some(DEFAULT_TIME_QUANTUM)).unwrap();
        let solo = result.record("solo").unwrap();
        assert_eq!(solo.waiting_time(), Some(0), "{alg}");
        assert_eq!(solo.response_time(), Some(0), "{alg}");
        assert_eq!(solo.turnaround_time(), Some(7), "{alg}");
        assert_eq!(result.total_time, 7, "{alg}");
    }
}

#[test]
fn identical_processes_follow_input_order() {
    let processes = vec![
        ProcessSpec::new("B", 0, 3).with_priority(2),
        ProcessSpec::new("A", 0, 3).with_priority(2),
        ProcessSpec::new("C", 0, 3).with_priority(2),
    ];
    for alg in Algorithm::ALL {
        let result = run(alg, &processes, Some(3)).unwrap();
        assert_eq!(result.completion_order(), vec!["B", "A", "C"], "{alg}");
    }
}

#[test]
fn missing_priority_is_rejected_up_front() {
    let err = run(Algorithm::PriorityPreemptive, &unprioritized(), None).unwrap_err();
    match err {
        SimulationError::InvalidConfiguration(errors) => assert_eq!(errors.len(), 4),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_quantum_is_rejected_up_front() {
    let err = Simulator::new(Algorithm::RoundRobin)
        .with_time_quantum(0)
        .run(&unprioritized())
        .unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("Time quantum must be positive"));
}

#[test]
fn timelines_past_i64_are_rejected_up_front() {
    let half = i64::MAX / 2 + 1;
    let processes = vec![ProcessSpec::new("A", 0, half), ProcessSpec::new("B", 0, half)];
    let err = run(Algorithm::Fcfs, &processes, None).unwrap_err();
    assert!(err.is_invalid_configuration());

    let late = vec![ProcessSpec::new("A", 5, i64::MAX - 1)];
    let err = run(Algorithm::SjfNonPreemptive, &late, None).unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[test]
fn timelines_near_i64_max_complete() {
    let half = i64::MAX / 2 - 1;
    let processes = vec![ProcessSpec::new("A", 0, half), ProcessSpec::new("B", 1, half)];
    for alg in [Algorithm::Fcfs, Algorithm::SjfNonPreemptive] {
        let result = run(alg, &processes, None).unwrap();
        assert_eq!(result.total_time, 2 * half, "{alg}");
        assert_eq!(result.record("B").unwrap().waiting_time(), Some(half - 1), "{alg}");
    }
}
