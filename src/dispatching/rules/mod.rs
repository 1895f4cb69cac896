//! Built-in selection rules.
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{RuleKey, SelectionRule};
use crate::scheduler::ProcessState;

/// Shortest Remaining Time.
///
/// Prioritizes processes with the least unexecuted burst. For a process
/// that has never run this equals its burst time, so the same rule
/// drives non-preemptive SJF.
///
/// # Reference
/// Schrage (1968), SRPT minimizes mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleKey {
        state.remaining
    }
}

/// Highest Priority.
///
/// Lower priority value = more important.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIO"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleKey {
        RuleKey::from(state.process.priority)
    }
}

/// Earliest Arrival (FIFO).
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleKey {
        state.process.arrival_time
    }
}
