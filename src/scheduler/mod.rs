//! CPU scheduling disciplines and run-level evaluation.
//!
//! Each discipline implements [`SchedulingAlgorithm`]. Runs are pure: they
//! clone the input into their own [`ProcessState`] list, so the same input
//! can be scheduled any number of times, or under two disciplines at once,
//! without interference.
//!
//! # Disciplines
//!
//! | Type | Discipline | Modes |
//! |------|-----------|-------|
//! | `Fcfs` | First-Come-First-Served | non-preemptive |
//! | `Sjf` | Shortest-Job-First | both (preemptive = SRTF) |
//! | `Srtf` | Shortest-Remaining-Time-First | preemptive |
//! | `PriorityScheduler` | Static priority | both |
//! | `RoundRobin` | Round-Robin | preemptive |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod compare;
mod driver;
mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod simulator;
mod sjf;
mod srtf;
mod state;

pub use compare::compose;
pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use simulator::{SimulationOutcome, SimulationRequest, Simulator};
pub use sjf::Sjf;
pub use srtf::Srtf;
pub use state::ProcessState;

use std::fmt::Debug;

use log::info;

use crate::models::{
    Algorithm, CompletedProcess, MetricsSummary, PreemptionMode, Process, ScheduleResult,
    Timeline,
};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Raw output of a simulation loop, before averaging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Simulation {
    /// Completed processes, in completion order.
    pub completed: Vec<CompletedProcess>,
    /// Dispatch history.
    pub timeline: Timeline,
}

/// A CPU scheduling discipline.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Discipline implemented.
    fn algorithm(&self) -> Algorithm;

    /// Preemption mode of this configuration.
    fn preemption(&self) -> PreemptionMode;

    /// Round-robin quantum, if any.
    fn quantum(&self) -> Option<i64> {
        None
    }

    /// Runs the simulation loop.
    ///
    /// Assumes validated input: processes with a non-positive burst never
    /// complete and are left out of the result.
    fn simulate(&self, processes: &[Process]) -> Simulation;

    /// Validates `processes`, simulates, and computes averages.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, Vec<ValidationError>> {
        validate_input(processes, self.algorithm(), self.quantum())?;

        let Simulation {
            completed,
            timeline,
        } = self.simulate(processes);
        let summary = MetricsSummary::from_completed(&completed).ok_or_else(|| {
            vec![ValidationError::new(
                ValidationErrorKind::EmptyInput,
                "No process completed",
            )]
        })?;

        info!(
            "{} ({}): {} processes, avg wait {:.2}, avg turnaround {:.2}, makespan {}",
            self.algorithm().tag(),
            self.preemption().label(),
            summary.count,
            summary.avg_wait_time,
            summary.avg_turnaround_time,
            timeline.makespan()
        );

        let result = ScheduleResult::new(
            self.algorithm(),
            self.preemption(),
            completed,
            summary,
            timeline,
        );
        Ok(match self.quantum() {
            Some(q) => result.with_quantum(q),
            None => result,
        })
    }
}
