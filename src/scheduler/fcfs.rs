//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! Processes run to completion in ascending arrival order; equal arrivals
//! keep their input order. The processor idles until the earliest arrival
//! and whenever the next process has not yet arrived.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use super::driver::run_selection;
use super::{SchedulingAlgorithm, Simulation};
use crate::dispatching::rules::EarliestArrival;
use crate::models::{Algorithm, PreemptionMode, Process};

/// First-Come-First-Served scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Fcfs, SchedulingAlgorithm};
///
/// let processes = vec![
///     Process::new("P1", 5),
///     Process::new("P2", 3).with_arrival(1),
///     Process::new("P3", 8).with_arrival(2),
/// ];
/// let result = Fcfs.schedule(&processes).unwrap();
/// assert_eq!(result.metrics_for("P3").unwrap().completion_time, 16);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn preemption(&self) -> PreemptionMode {
        PreemptionMode::NonPreemptive
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        run_selection(&EarliestArrival, processes, PreemptionMode::NonPreemptive)
    }
}
