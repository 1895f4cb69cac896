//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run: processes,
//! the execution timeline, per-process metrics, and results.
//!
//! # Lifecycle
//!
//! | Type | Role |
//! |------|------|
//! | Process | Read-only input |
//! | Timeline | Dispatch history of one run |
//! | CompletedProcess | Per-process output |
//! | ScheduleResult | One run |
//! | ComparisonResult | Two runs side by side |

mod algorithm;
mod metrics;
mod process;
mod result;
mod timeline;

pub use algorithm::{Algorithm, ModeSelection, PreemptionMode};
pub use metrics::{CompletedProcess, MetricsSummary};
pub use process::Process;
pub use result::{ComparisonResult, MetricDelta, ScheduleResult, Side};
pub use timeline::{GanttSegment, Slot, Timeline, TimelineRecorder};
