//! Shortest-Remaining-Time-First.
//!
//! # Algorithm
//!
//! Every tick, the ready process with the least remaining burst runs for
//! one unit (ties by input order). A shorter arrival therefore preempts the
//! running process at the next tick boundary.
//!
//! # Reference
//! Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//! Processing Time Discipline"

use super::driver::run_selection;
use super::{SchedulingAlgorithm, Simulation};
use crate::dispatching::rules::ShortestRemaining;
use crate::models::{Algorithm, PreemptionMode, Process};

/// Shortest-Remaining-Time-First scheduler (preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingAlgorithm for Srtf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn preemption(&self) -> PreemptionMode {
        PreemptionMode::Preemptive
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        run_selection(&ShortestRemaining, processes, PreemptionMode::Preemptive)
    }
}
