//! Round-Robin.
//!
//! # Algorithm
//!
//! 1. Processes arrived at t=0 enter a FIFO ready queue in input order.
//! 2. The head runs for `min(quantum, remaining)`; the slice is its own
//!    timeline segment.
//! 3. Processes that arrived during the slice are queued in input order
//!    BEFORE the yielding process is re-queued.
//! 4. An empty queue idles the processor until the next arrival.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};

use super::state::{any_pending, next_arrival};
use super::{ProcessState, SchedulingAlgorithm, Simulation};
use crate::models::{Algorithm, PreemptionMode, Process, TimelineRecorder};
use crate::validation::{validate_quantum, ValidationError};

/// Round-Robin scheduler with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{RoundRobin, SchedulingAlgorithm};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let result = rr
///     .schedule(&[Process::new("P1", 5), Process::new("P2", 3), Process::new("P3", 1)])
///     .unwrap();
/// assert_eq!(result.completion_order(), vec!["P3", "P2", "P1"]);
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin scheduler.
    ///
    /// # Errors
    /// `InvalidQuantum` if `quantum` is not positive.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        let quantum = validate_quantum(Some(quantum))?;
        Ok(Self { quantum })
    }
}

/// FIFO ready queue with membership tracking.
#[derive(Debug)]
struct ReadyQueue {
    order: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(len),
            queued: vec![false; len],
        }
    }

    fn push(&mut self, idx: usize) {
        if !self.queued[idx] {
            self.queued[idx] = true;
            self.order.push_back(idx);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let idx = self.order.pop_front()?;
        self.queued[idx] = false;
        Some(idx)
    }

    /// Queues every unfinished process arriving in `(after, until]`, except
    /// `skip`, in input order.
    fn admit(
        &mut self,
        states: &[ProcessState],
        after: Option<i64>,
        until: i64,
        skip: Option<usize>,
    ) {
        for s in states {
            let t = s.process.arrival_time;
            if !s.is_done()
                && Some(s.index) != skip
                && t <= until
                && after.map_or(true, |a| t > a)
            {
                self.push(s.index);
            }
        }
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn preemption(&self) -> PreemptionMode {
        PreemptionMode::Preemptive
    }

    fn quantum(&self) -> Option<i64> {
        Some(self.quantum)
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        let mut states = ProcessState::from_processes(processes);
        let mut queue = ReadyQueue::new(states.len());
        let mut timeline = TimelineRecorder::new();
        let mut completed = Vec::with_capacity(states.len());
        let mut clock = 0;

        queue.admit(&states, None, clock, None);

        while any_pending(&states) {
            queue.admit(&states, None, clock, None);

            let Some(idx) = queue.pop() else {
                match next_arrival(&states, clock) {
                    Some(next) => {
                        trace!("[RR] idle {clock}..{next}");
                        timeline.idle(clock, next);
                        clock = next;
                        continue;
                    }
                    None => break,
                }
            };

            let start = clock;
            let state = &mut states[idx];
            clock = state.run(start, self.quantum);
            timeline.record(&state.process.id, start, clock);
            debug!(
                "[RR q={}] {} ran {start}..{clock}, {} left",
                self.quantum, state.process.id, state.remaining
            );

            let finished = state.finalize();
            queue.admit(&states, Some(start), clock, Some(idx));
            match finished {
                Some(done) => completed.push(done),
                None => queue.push(idx),
            }
        }

        Simulation {
            completed,
            timeline: timeline.finish(),
        }
    }
}
