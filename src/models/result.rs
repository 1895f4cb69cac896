//! Simulation outputs.
//!
//! A [`ScheduleResult`] is the finalized outcome of one discipline run.
//! A [`ComparisonResult`] packages two runs of the same discipline under
//! different preemption modes side by side.

use serde::{Deserialize, Serialize};

use super::{Algorithm, CompletedProcess, MetricsSummary, PreemptionMode, Timeline};

/// Outcome of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Preemption mode of the run.
    pub preemption: PreemptionMode,
    /// Quantum, for round-robin runs.
    pub quantum: Option<i64>,
    /// Completed processes, in completion order.
    pub processes: Vec<CompletedProcess>,
    /// Mean waiting time.
    pub avg_wait_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Dispatch history.
    pub timeline: Timeline,
}

impl ScheduleResult {
    /// Assembles a result from completed processes and their averages.
    pub fn new(
        algorithm: Algorithm,
        preemption: PreemptionMode,
        processes: Vec<CompletedProcess>,
        summary: MetricsSummary,
        timeline: Timeline,
    ) -> Self {
        Self {
            algorithm,
            preemption,
            quantum: None,
            processes,
            avg_wait_time: summary.avg_wait_time,
            avg_turnaround_time: summary.avg_turnaround_time,
            timeline,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Mode label, e.g. `"Preemptive (Time Quantum = 2ms)"` for round-robin.
    pub fn label(&self) -> String {
        match self.quantum {
            Some(q) => format!("{} (Time Quantum = {q}ms)", self.preemption.label()),
            None => self.preemption.label().to_string(),
        }
    }

    /// Finds the metrics of one process.
    pub fn metrics_for(&self, process_id: &str) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Order in which processes completed.
    pub fn completion_order(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Which side of a comparison did better on a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The first result (non-preemptive).
    A,
    /// The second result (preemptive).
    B,
    /// Both sides are equal.
    Tie,
}

/// Difference between the two sides on one averaged metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Side with the lower value.
    pub better: Side,
    /// Absolute difference (≥ 0).
    pub difference: f64,
}

impl MetricDelta {
    const EPSILON: f64 = 1e-9;

    /// Compares two averages; lower is better.
    pub fn between(a: f64, b: f64) -> Self {
        let difference = (a - b).abs();
        let better = if difference <= Self::EPSILON {
            Side::Tie
        } else if a < b {
            Side::A
        } else {
            Side::B
        };
        Self { better, difference }
    }
}

/// Two runs of the same discipline under different preemption modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Shared discipline.
    pub algorithm: Algorithm,
    /// Label of `result_a`.
    pub label_a: String,
    /// Label of `result_b`.
    pub label_b: String,
    /// First run.
    pub result_a: ScheduleResult,
    /// Second run.
    pub result_b: ScheduleResult,
    /// Average waiting time comparison.
    pub wait_delta: MetricDelta,
    /// Average turnaround time comparison.
    pub turnaround_delta: MetricDelta,
}
