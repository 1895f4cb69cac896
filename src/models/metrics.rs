//! Per-process timing metrics and run-wide averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::Process;

/// Timing metrics of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process ID.
    pub id: String,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Burst length.
    pub burst_time: i64,
    /// Priority (copied from input).
    pub priority: i32,
    /// Tick of first dispatch.
    pub start_time: i64,
    /// Tick at which the last unit finished.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub wait_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

impl CompletedProcess {
    /// Finalizes metrics for `process` given its first dispatch and completion ticks.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            completion_time,
            wait_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: start_time - process.arrival_time,
        }
    }

    /// Whether the turnaround and waiting identities hold and neither is negative.
    pub fn is_consistent(&self) -> bool {
        self.turnaround_time == self.completion_time - self.arrival_time
            && self.wait_time == self.turnaround_time - self.burst_time
            && self.wait_time >= 0
            && self.response_time >= 0
            && self.response_time <= self.wait_time
    }
}

/// Run-wide averages over completed processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Number of processes averaged.
    pub count: usize,
    /// Mean waiting time.
    pub avg_wait_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
}

impl MetricsSummary {
    /// Averages the given processes.
    ///
    /// Returns `None` for an empty slice; averages are undefined there.
    pub fn from_completed(processes: &[CompletedProcess]) -> Option<Self> {
        if processes.is_empty() {
            return None;
        }
        let n = processes.len() as f64;
        let (wait, turnaround, response) =
            processes.iter().fold((0i64, 0i64, 0i64), |(w, t, r), p| {
                (w + p.wait_time, t + p.turnaround_time, r + p.response_time)
            });

        Some(Self {
            count: processes.len(),
            avg_wait_time: wait as f64 / n,
            avg_turnaround_time: turnaround as f64 / n,
            avg_response_time: response as f64 / n,
        })
    }
}
