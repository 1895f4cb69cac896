//! Random process batches.
//!
//! Produces valid process lists for exercising disciplines on varied
//! workloads. Pass a seeded RNG for reproducible batches.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(5).generate(&mut rng);
//! assert_eq!(processes.len(), 5);
//! assert_eq!(processes[0].id, "P1");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Bounds for randomly generated processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time (inclusive).
    pub max_arrival: i64,
    /// Largest burst time (inclusive, ≥ 1).
    pub max_burst: i64,
    /// Largest priority value (inclusive).
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with small default bounds.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the largest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates processes `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        let max_priority = self.max_priority.max(0);

        (1..=self.count)
            .map(|i| {
                Process::new(format!("P{i}"), rng.random_range(1..=max_burst))
                    .with_arrival(rng.random_range(0..=max_arrival))
                    .with_priority(rng.random_range(0..=max_priority))
            })
            .collect()
    }
}
