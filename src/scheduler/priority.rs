//! Static priority scheduling.
//!
//! # Algorithm
//!
//! The ready process with the numerically smallest priority is dispatched
//! (ties by input order). Non-preemptive runs it to completion; preemptive
//! runs it one tick at a time so a more important arrival takes over at the
//! next tick. Consecutive ticks of one process form a single segment.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use super::driver::run_selection;
use super::{SchedulingAlgorithm, Simulation};
use crate::dispatching::rules::HighestPriority;
use crate::models::{Algorithm, PreemptionMode, Process};

/// Priority scheduler (lower value = higher priority).
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{PriorityScheduler, SchedulingAlgorithm};
///
/// let processes = vec![
///     Process::new("P1", 5).with_priority(2),
///     Process::new("P2", 3).with_arrival(1).with_priority(1),
/// ];
/// let result = PriorityScheduler::preemptive().schedule(&processes).unwrap();
/// assert_eq!(result.completion_order(), vec!["P2", "P1"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PriorityScheduler {
    mode: PreemptionMode,
}

impl PriorityScheduler {
    /// Creates a priority scheduler in the given mode.
    pub fn new(mode: PreemptionMode) -> Self {
        Self { mode }
    }

    /// Run-to-completion priority scheduling.
    pub fn non_preemptive() -> Self {
        Self::new(PreemptionMode::NonPreemptive)
    }

    /// Tick-level preemptive priority scheduling.
    pub fn preemptive() -> Self {
        Self::new(PreemptionMode::Preemptive)
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::non_preemptive()
    }
}

impl SchedulingAlgorithm for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn preemption(&self) -> PreemptionMode {
        self.mode
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        run_selection(&HighestPriority, processes, self.mode)
    }
}
