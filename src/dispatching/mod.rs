//! Ready-set selection rules.
//!
//! Every discipline that picks "the best ready process" does so through a
//! [`SelectionRule`] and [`select_ready`]. Ordering is fully explicit: the
//! rule's key first, then the process's position in the input list.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_ready};
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::ProcessState;
//!
//! let states = ProcessState::from_processes(&[
//!     Process::new("long", 8),
//!     Process::new("short", 2),
//! ]);
//! assert_eq!(select_ready(&rules::ShortestRemaining, &states, 0), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use std::fmt::Debug;

use crate::scheduler::ProcessState;

/// Key returned by a selection rule.
///
/// Lower keys = selected first.
pub type RuleKey = i64;

/// A rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = higher precedence.** Equal keys fall back to input order.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "PRIO").
    fn name(&self) -> &'static str;

    /// Ranks one process.
    fn evaluate(&self, state: &ProcessState) -> RuleKey;
}

/// Returns the index of the ready process with the lowest `(key, input index)`.
///
/// A process is ready when it has arrived by `clock` and still has work.
/// Returns `None` when nothing is ready.
pub fn select_ready<R: SelectionRule + ?Sized>(
    rule: &R,
    states: &[ProcessState],
    clock: i64,
) -> Option<usize> {
    states
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_ready(clock))
        .min_by_key(|(_, s)| (rule.evaluate(s), s.index))
        .map(|(i, _)| i)
}
