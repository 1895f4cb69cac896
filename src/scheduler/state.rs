//! Per-run simulation state.

use crate::models::{CompletedProcess, Process};

/// Mutable state of one process during one simulation run.
///
/// Each run owns its own `Vec<ProcessState>` cloned from the input, so
/// runs never observe each other's progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// Input record (cloned).
    pub process: Process,
    /// Position in the input list; the final tie-breaker.
    pub index: usize,
    /// Burst time not yet executed.
    pub remaining: i64,
    /// Tick of first dispatch.
    pub first_run: Option<i64>,
    /// Tick at which the last unit finished.
    pub completion: Option<i64>,
}

impl ProcessState {
    /// Creates fresh state for one input process.
    pub fn new(process: &Process, index: usize) -> Self {
        Self {
            process: process.clone(),
            index,
            remaining: process.burst_time,
            first_run: None,
            completion: None,
        }
    }

    /// Clones an input list into run-local state.
    pub fn from_processes(processes: &[Process]) -> Vec<Self> {
        processes
            .iter()
            .enumerate()
            .map(|(i, p)| Self::new(p, i))
            .collect()
    }

    /// Whether no work remains.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining <= 0
    }

    /// Whether the process has arrived by `clock` and still has work.
    #[inline]
    pub fn is_ready(&self, clock: i64) -> bool {
        self.process.has_arrived(clock) && !self.is_done()
    }

    /// Runs for up to `ticks` starting at `start` and returns the end tick.
    pub fn run(&mut self, start: i64, ticks: i64) -> i64 {
        let ticks = ticks.min(self.remaining).max(0);
        if self.first_run.is_none() {
            self.first_run = Some(start);
        }
        self.remaining -= ticks;
        let end = start + ticks;
        if self.is_done() {
            self.completion = Some(end);
        }
        end
    }

    /// Final metrics, once the process has completed.
    pub fn finalize(&self) -> Option<CompletedProcess> {
        let completion = self.completion?;
        let start = self.first_run.unwrap_or(completion);
        Some(CompletedProcess::new(&self.process, start, completion))
    }
}

/// Whether any process still has work.
pub fn any_pending(states: &[ProcessState]) -> bool {
    states.iter().any(|s| !s.is_done())
}

/// Earliest arrival after `clock` among unfinished processes.
pub fn next_arrival(states: &[ProcessState], clock: i64) -> Option<i64> {
    states
        .iter()
        .filter(|s| !s.is_done() && s.process.arrival_time > clock)
        .map(|s| s.process.arrival_time)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_and_finalize() {
        let p = Process::new("P1", 3).with_arrival(1);
        let mut s = ProcessState::new(&p, 0);
        assert!(s.finalize().is_none());

        assert_eq!(s.run(2, 2), 4);
        assert_eq!(s.remaining, 1);
        assert_eq!(s.first_run, Some(2));
        assert!(!s.is_done());

        assert_eq!(s.run(6, 5), 7); // clipped to remaining
        assert!(s.is_done());

        let c = s.finalize().unwrap();
        assert_eq!(c.start_time, 2);
        assert_eq!(c.completion_time, 7);
        assert_eq!(c.wait_time, 3);
    }

    #[test]
    fn test_ready_and_next_arrival() {
        let states = ProcessState::from_processes(&[
            Process::new("P1", 2).with_arrival(4),
            Process::new("P2", 2).with_arrival(9),
        ]);
        assert!(!states[0].is_ready(3));
        assert!(states[0].is_ready(4));
        assert_eq!(next_arrival(&states, 0), Some(4));
        assert_eq!(next_arrival(&states, 4), Some(9));
        assert_eq!(next_arrival(&states, 9), None);
        assert!(any_pending(&states));
    }

    #[test]
    fn test_copies_are_independent() {
        let input = vec![Process::new("P1", 2)];
        let mut a = ProcessState::from_processes(&input);
        let b = ProcessState::from_processes(&input);
        a[0].run(0, 2);
        assert!(a[0].is_done());
        assert!(!b[0].is_done());
        assert_eq!(input[0].burst_time, 2);
    }
}
