//! Shortest-Job-First dispatcher.
//!
//! Non-preemptive mode picks the shortest ready job and runs it to
//! completion. Preemptive mode is SRTF and forwards to [`Srtf`]; only the
//! reported discipline differs.

use log::debug;

use super::driver::run_selection;
use super::{SchedulingAlgorithm, Simulation, Srtf};
use crate::dispatching::rules::ShortestRemaining;
use crate::models::{Algorithm, PreemptionMode, Process};

/// Shortest-Job-First scheduler.
#[derive(Debug, Clone, Copy)]
pub struct Sjf {
    mode: PreemptionMode,
}

impl Sjf {
    /// Creates an SJF scheduler in the given mode.
    pub fn new(mode: PreemptionMode) -> Self {
        Self { mode }
    }

    /// Run-to-completion SJF.
    pub fn non_preemptive() -> Self {
        Self::new(PreemptionMode::NonPreemptive)
    }

    /// Preemptive SJF (SRTF).
    pub fn preemptive() -> Self {
        Self::new(PreemptionMode::Preemptive)
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::non_preemptive()
    }
}

impl SchedulingAlgorithm for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn preemption(&self) -> PreemptionMode {
        self.mode
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        match self.mode {
            PreemptionMode::NonPreemptive => {
                run_selection(&ShortestRemaining, processes, PreemptionMode::NonPreemptive)
            }
            PreemptionMode::Preemptive => {
                debug!("preemptive SJF forwarded to SRTF");
                Srtf.simulate(processes)
            }
        }
    }
}
