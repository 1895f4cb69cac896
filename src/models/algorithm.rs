//! Algorithm and preemption selectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Static priority (lower value = higher priority).
    Priority,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in selector order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short selector tag (`fcfs`, `sjf`, `srtf`, `priority`, `rr`).
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Srtf => "srtf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve (FCFS)",
            Algorithm::Sjf => "Shortest Job First (SJF)",
            Algorithm::Srtf => "Shortest Remaining Time First (SRTF)",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::RoundRobin => "Round Robin (RR)",
        }
    }

    /// Whether the discipline has both a preemptive and a non-preemptive variant.
    pub fn supports_comparison(&self) -> bool {
        matches!(self, Algorithm::Sjf | Algorithm::Priority)
    }

    /// Whether a quantum is required.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.tag() == tag)
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownAlgorithm,
                    format!("Unknown algorithm: '{s}'"),
                )
            })
    }
}

/// Preemption mode of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreemptionMode {
    /// A dispatched process runs to completion.
    NonPreemptive,
    /// A running process may be suspended and resumed later.
    Preemptive,
}

impl PreemptionMode {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PreemptionMode::NonPreemptive => "Non-Preemptive",
            PreemptionMode::Preemptive => "Preemptive",
        }
    }
}

impl fmt::Display for PreemptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Requested preemption behaviour.
///
/// Only meaningful for SJF and priority scheduling; other disciplines
/// have a single canonical mode and ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeSelection {
    /// Run the non-preemptive variant.
    #[default]
    NonPreemptive,
    /// Run the preemptive variant.
    Preemptive,
    /// Run both variants and compare them.
    Both,
}

impl ModeSelection {
    /// Single mode this selection maps to, or `None` for `Both`.
    pub fn single(&self) -> Option<PreemptionMode> {
        match self {
            ModeSelection::NonPreemptive => Some(PreemptionMode::NonPreemptive),
            ModeSelection::Preemptive => Some(PreemptionMode::Preemptive),
            ModeSelection::Both => None,
        }
    }
}
