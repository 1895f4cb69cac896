//! Top-level dispatch from a request to one or two discipline runs.
//!
//! # Algorithm
//!
//! 1. Validate processes (and the quantum for round-robin).
//! 2. `Both` on SJF or priority: run the non-preemptive and preemptive
//!    variants on independent copies and compose them.
//! 3. Otherwise run the single matching engine. FCFS, SRTF and RR have one
//!    canonical mode and ignore the requested one.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{compose, Fcfs, PriorityScheduler, RoundRobin, SchedulingAlgorithm, Sjf, Srtf};
use crate::models::{
    Algorithm, ComparisonResult, ModeSelection, PreemptionMode, Process, ScheduleResult,
};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to run.
    pub algorithm: Algorithm,
    /// Requested preemption behaviour.
    #[serde(default)]
    pub mode: ModeSelection,
    /// Round-robin time quantum.
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a non-preemptive request without a quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            mode: ModeSelection::default(),
            quantum: None,
        }
    }

    /// Sets the preemption mode.
    pub fn with_mode(mut self, mode: ModeSelection) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Result of a simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    /// One run.
    Single(ScheduleResult),
    /// Both preemption variants side by side.
    Comparison(ComparisonResult),
}

impl SimulationOutcome {
    /// The single result, if this is not a comparison.
    pub fn single(&self) -> Option<&ScheduleResult> {
        match self {
            SimulationOutcome::Single(r) => Some(r),
            SimulationOutcome::Comparison(_) => None,
        }
    }

    /// The comparison, if one was requested and supported.
    pub fn comparison(&self) -> Option<&ComparisonResult> {
        match self {
            SimulationOutcome::Comparison(c) => Some(c),
            SimulationOutcome::Single(_) => None,
        }
    }
}

/// Runs simulation requests.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, ModeSelection, Process};
/// use u_cpusched::scheduler::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![
///         Process::new("P1", 5).with_priority(2),
///         Process::new("P2", 3).with_arrival(1).with_priority(1),
///     ],
///     Algorithm::Priority,
/// )
/// .with_mode(ModeSelection::Both);
///
/// let outcome = Simulator::new().run(&request).unwrap();
/// let comparison = outcome.comparison().unwrap();
/// assert!(comparison.result_a.avg_wait_time >= comparison.result_b.avg_wait_time);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    default_quantum: Option<i64>,
}

impl Simulator {
    /// Creates a simulator with no default quantum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantum used when a round-robin request carries none.
    pub fn with_default_quantum(mut self, quantum: i64) -> Self {
        self.default_quantum = Some(quantum);
        self
    }

    /// Validates and runs a request.
    pub fn run(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationOutcome, Vec<ValidationError>> {
        let quantum = request.quantum.or(self.default_quantum);
        if let Err(errors) = validate_input(&request.processes, request.algorithm, quantum) {
            warn!(
                "rejected {} request: {} validation error(s)",
                request.algorithm.tag(),
                errors.len()
            );
            return Err(errors);
        }

        match request.mode.single() {
            None if request.algorithm.supports_comparison() => {
                debug!("running both modes of {}", request.algorithm.tag());
                let a = self
                    .engine(request.algorithm, PreemptionMode::NonPreemptive, quantum)
                    .map_err(|e| vec![e])?
                    .schedule(&request.processes)?;
                let b = self
                    .engine(request.algorithm, PreemptionMode::Preemptive, quantum)
                    .map_err(|e| vec![e])?
                    .schedule(&request.processes)?;
                compose(a, b)
                    .map(SimulationOutcome::Comparison)
                    .map_err(|e| vec![e])
            }
            mode => {
                let mode = mode.unwrap_or(PreemptionMode::NonPreemptive);
                let result = self
                    .engine(request.algorithm, mode, quantum)
                    .map_err(|e| vec![e])?
                    .schedule(&request.processes)?;
                Ok(SimulationOutcome::Single(result))
            }
        }
    }

    /// Builds the engine for a discipline and mode.
    ///
    /// The mode only matters for SJF and priority scheduling.
    pub fn engine(
        &self,
        algorithm: Algorithm,
        mode: PreemptionMode,
        quantum: Option<i64>,
    ) -> Result<Box<dyn SchedulingAlgorithm>, ValidationError> {
        let engine: Box<dyn SchedulingAlgorithm> = match algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf::new(mode)),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::Priority => Box::new(PriorityScheduler::new(mode)),
            Algorithm::RoundRobin => {
                let q = quantum.or(self.default_quantum).ok_or_else(|| {
                    ValidationError::new(
                        ValidationErrorKind::InvalidQuantum,
                        "Round-robin requires a time quantum",
                    )
                })?;
                Box::new(RoundRobin::new(q)?)
            }
        };
        Ok(engine)
    }
}
