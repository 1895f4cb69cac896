//! Cross-discipline properties on random workloads.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use u_cpusched::models::{Algorithm, ModeSelection, PreemptionMode, Process, ScheduleResult, Side};
use u_cpusched::scheduler::{
    Fcfs, PriorityScheduler, RoundRobin, SchedulingAlgorithm, SimulationRequest, Simulator, Sjf,
    Srtf,
};
use u_cpusched::workload::WorkloadGenerator;

fn engines() -> Vec<Box<dyn SchedulingAlgorithm>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf::non_preemptive()),
        Box::new(Sjf::preemptive()),
        Box::new(Srtf),
        Box::new(PriorityScheduler::non_preemptive()),
        Box::new(PriorityScheduler::preemptive()),
        Box::new(RoundRobin::new(1).unwrap()),
        Box::new(RoundRobin::new(3).unwrap()),
    ]
}

fn workloads() -> Vec<Vec<Process>> {
    let mut rng = SmallRng::seed_from_u64(2024);
    (1..=12)
        .map(|n| {
            WorkloadGenerator::new(n)
                .with_max_arrival(15)
                .with_max_burst(7)
                .generate(&mut rng)
        })
        .collect()
}

fn assert_well_formed(result: &ScheduleResult, input: &[Process]) {
    assert_eq!(result.processes.len(), input.len());
    for p in &result.processes {
        assert!(p.is_consistent(), "{p:?} under {:?}", result.algorithm);
    }

    let total_burst: i64 = input.iter().map(|p| p.burst_time).sum();
    assert_eq!(result.timeline.busy_time(), total_burst);
    assert!(result.timeline.is_contiguous());

    let last_completion = result
        .processes
        .iter()
        .map(|p| p.completion_time)
        .max()
        .unwrap();
    assert_eq!(result.makespan(), last_completion);

    for p in input {
        let ran: i64 = result
            .timeline
            .segments_for(&p.id)
            .iter()
            .map(|s| s.duration())
            .sum();
        assert_eq!(ran, p.burst_time, "{} under {:?}", p.id, result.algorithm);
        let first = result.timeline.segments_for(&p.id)[0].start;
        assert!(first >= p.arrival_time);
        assert_eq!(result.metrics_for(&p.id).unwrap().start_time, first);
    }
}

#[test]
fn test_metric_identities_and_conservation() {
    for input in workloads() {
        for engine in engines() {
            let result = engine.schedule(&input).unwrap();
            assert_well_formed(&result, &input);
        }
    }
}

#[test]
fn test_idempotent_runs() {
    for input in workloads() {
        for engine in engines() {
            let first = engine.schedule(&input).unwrap();
            let second = engine.schedule(&input).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_srtf_never_waits_longer_than_sjf() {
    for input in workloads() {
        let srtf = Srtf.schedule(&input).unwrap();
        let sjf = Sjf::non_preemptive().schedule(&input).unwrap();
        assert!(srtf.avg_wait_time <= sjf.avg_wait_time + 1e-9);
    }
}

#[test]
fn test_fcfs_ignores_input_order_for_distinct_arrivals() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut input = WorkloadGenerator::new(8).generate(&mut rng);
    for (i, p) in input.iter_mut().enumerate() {
        p.arrival_time = (i as i64 * 7) % 11;
    }
    let mut reversed = input.clone();
    reversed.reverse();

    let a = Fcfs.schedule(&input).unwrap();
    let b = Fcfs.schedule(&reversed).unwrap();
    assert_eq!(a.processes, b.processes);
    assert_eq!(a.timeline, b.timeline);
}

#[test]
fn test_round_robin_fairness_bound() {
    let mut rng = SmallRng::seed_from_u64(77);
    for n in 2..=8 {
        let input = WorkloadGenerator::new(n)
            .with_max_arrival(0)
            .with_max_burst(9)
            .generate(&mut rng);
        for q in 1..=4 {
            let result = RoundRobin::new(q).unwrap().schedule(&input).unwrap();
            let bound = (n as i64 - 1) * q;
            for p in &input {
                let slices = result.timeline.segments_for(&p.id);
                for pair in slices.windows(2) {
                    assert!(pair[1].start - pair[0].end <= bound);
                }
            }
        }
    }
}

#[test]
fn test_inputs_not_mutated() {
    let input = workloads().pop().unwrap();
    let snapshot = input.clone();
    for engine in engines() {
        engine.schedule(&input).unwrap();
    }
    assert_eq!(input, snapshot);
}

#[test]
fn test_scenario_fcfs() {
    let req = SimulationRequest::new(
        vec![
            Process::new("P1", 5),
            Process::new("P2", 3).with_arrival(1),
            Process::new("P3", 8).with_arrival(2),
        ],
        Algorithm::Fcfs,
    );
    let outcome = Simulator::new().run(&req).unwrap();
    let r = outcome.single().unwrap();
    assert_eq!(
        r.processes.iter().map(|p| p.completion_time).collect::<Vec<_>>(),
        vec![5, 8, 16]
    );
    assert_eq!(format!("{:.2}", r.avg_wait_time), "3.33");
    assert_eq!(r.timeline.to_string(), "P1 [0-5] P2 [5-8] P3 [8-16]");
}

#[test]
fn test_scenario_round_robin() {
    let req = SimulationRequest::new(
        vec![
            Process::new("P1", 5),
            Process::new("P2", 3),
            Process::new("P3", 1),
        ],
        Algorithm::RoundRobin,
    )
    .with_quantum(2);
    let outcome = Simulator::new().run(&req).unwrap();
    let r = outcome.single().unwrap();
    assert_eq!(r.completion_order(), vec!["P3", "P2", "P1"]);
    assert_eq!(
        r.timeline.to_string(),
        "P1 [0-2] P2 [2-4] P3 [4-5] P1 [5-7] P2 [7-8] P1 [8-9]"
    );
}

#[test]
fn test_scenario_priority_comparison() {
    let req = SimulationRequest::new(
        vec![
            Process::new("P1", 5).with_priority(2),
            Process::new("P2", 3).with_arrival(1).with_priority(1),
        ],
        Algorithm::Priority,
    )
    .with_mode(ModeSelection::Both);
    let outcome = Simulator::new().run(&req).unwrap();
    let c = outcome.comparison().unwrap();

    assert_eq!(c.result_a.preemption, PreemptionMode::NonPreemptive);
    assert!(c.result_a.avg_wait_time >= c.result_b.avg_wait_time);
    assert_eq!(c.wait_delta.better, Side::B);
    assert!((c.wait_delta.difference - 0.5).abs() < 1e-10);
}

#[test]
fn test_sjf_comparison_on_random_workloads() {
    for input in workloads() {
        let req = SimulationRequest::new(input, Algorithm::Sjf).with_mode(ModeSelection::Both);
        let outcome = Simulator::new().run(&req).unwrap();
        let c = outcome.comparison().unwrap();
        assert_ne!(c.wait_delta.better, Side::A);
        assert!(c.wait_delta.difference >= 0.0);
    }
}
