//! Process model.
//!
//! A process is the unit of work handed to a scheduling discipline. It is
//! read-only for the whole simulation: engines clone it into their own
//! simulation state before mutating anything.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Total processor time required (ticks, ≥ 1).
    pub burst_time: i64,
    /// Tick at which the process becomes eligible to run (≥ 0).
    pub arrival_time: i64,
    /// Scheduling priority (lower = more important). Only used by priority scheduling.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: impl Into<String>, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            burst_time,
            arrival_time: 0,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }
}
