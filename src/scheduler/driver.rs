//! Shared discrete-time loop for selection-based disciplines.
//!
//! FCFS, SJF, SRTF and priority scheduling differ only in how they rank
//! ready processes and whether a dispatch may be cut short. This driver
//! runs that loop once for all of them.
//!
//! # Algorithm
//!
//! 1. If nothing is ready, idle until the next arrival.
//! 2. Otherwise pick the ready process with the lowest `(rule key, input index)`.
//! 3. Non-preemptive: run it to completion. Preemptive: run one tick and
//!    re-evaluate.
//!
//! # Complexity
//! O(T * n) for preemptive runs where T = total burst, O(n^2) otherwise.

use log::trace;

use super::state::{any_pending, next_arrival};
use super::{ProcessState, Simulation};
use crate::dispatching::{select_ready, SelectionRule};
use crate::models::{PreemptionMode, Process, TimelineRecorder};

/// Runs `processes` to completion under `rule`.
pub(crate) fn run_selection<R: SelectionRule + ?Sized>(
    rule: &R,
    processes: &[Process],
    mode: PreemptionMode,
) -> Simulation {
    let mut states = ProcessState::from_processes(processes);
    let mut timeline = TimelineRecorder::new();
    let mut completed = Vec::with_capacity(states.len());
    let mut clock = 0;

    while any_pending(&states) {
        let Some(idx) = select_ready(rule, &states, clock) else {
            match next_arrival(&states, clock) {
                Some(next) => {
                    trace!("[{}] idle {clock}..{next}", rule.name());
                    timeline.idle(clock, next);
                    clock = next;
                    continue;
                }
                None => break,
            }
        };

        let state = &mut states[idx];
        let start = clock;
        match mode {
            PreemptionMode::NonPreemptive => {
                let ticks = state.remaining;
                clock = state.run(start, ticks);
                timeline.record(&state.process.id, start, clock);
            }
            PreemptionMode::Preemptive => {
                clock = state.run(start, 1);
                timeline.extend(&state.process.id, start, clock);
            }
        }
        trace!(
            "[{}] {} ran {start}..{clock}, {} left",
            rule.name(),
            state.process.id,
            state.remaining
        );

        completed.extend(state.finalize());
    }

    Simulation {
        completed,
        timeline: timeline.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestPriority, ShortestRemaining};
    use crate::models::GanttSegment;

    #[test]
    fn test_idle_until_first_arrival() {
        let sim = run_selection(
            &ShortestRemaining,
            &[Process::new("P1", 2).with_arrival(3)],
            PreemptionMode::NonPreemptive,
        );
        assert_eq!(
            sim.timeline.segments,
            vec![GanttSegment::idle(0, 3), GanttSegment::process("P1", 3, 5)]
        );
        assert_eq!(sim.completed[0].completion_time, 5);
        assert_eq!(sim.completed[0].wait_time, 0);
    }

    #[test]
    fn test_preemptive_merges_ticks() {
        let sim = run_selection(
            &HighestPriority,
            &[Process::new("P1", 3)],
            PreemptionMode::Preemptive,
        );
        assert_eq!(sim.timeline.segments, vec![GanttSegment::process("P1", 0, 3)]);
    }

    #[test]
    fn test_empty_input() {
        let sim = run_selection(&ShortestRemaining, &[], PreemptionMode::Preemptive);
        assert!(sim.completed.is_empty());
        assert!(sim.timeline.is_empty());
    }
}
