//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical single-processor scheduling disciplines on a fixed
//! batch of processes and reports per-process timing, run-wide averages,
//! and the execution timeline (Gantt chart).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `CompletedProcess`, `Timeline`,
//!   `ScheduleResult`, `ComparisonResult`, `Algorithm`
//! - **`dispatching`**: Ready-set selection rules with deterministic tie-breaks
//! - **`scheduler`**: FCFS, SJF, SRTF, priority and round-robin engines,
//!   comparison, KPIs, and the request-level `Simulator`
//! - **`validation`**: Precondition checks (empty input, bad bursts, quantum)
//! - **`workload`**: Random process batches
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{SchedulingAlgorithm, Srtf};
//!
//! let processes = vec![
//!     Process::new("P1", 8),
//!     Process::new("P2", 4).with_arrival(1),
//!     Process::new("P3", 9).with_arrival(2),
//!     Process::new("P4", 5).with_arrival(3),
//! ];
//! let result = Srtf.schedule(&processes).unwrap();
//! assert_eq!(result.avg_wait_time, 6.5);
//! println!("{}", result.timeline); // P1 [0-1] P2 [1-5] P4 [5-10] P1 [10-17] P3 [17-26]
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
