//! Side-by-side comparison of two runs of one discipline.

use log::debug;

use crate::models::{ComparisonResult, MetricDelta, ScheduleResult};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Packages two finished runs of the same discipline.
///
/// No recomputation takes place; the deltas are derived from the averages
/// already stored in each result. By convention `a` is the non-preemptive
/// run and `b` the preemptive one.
///
/// # Errors
/// `AlgorithmMismatch` if the two results come from different disciplines.
pub fn compose(a: ScheduleResult, b: ScheduleResult) -> Result<ComparisonResult, ValidationError> {
    if a.algorithm != b.algorithm {
        return Err(ValidationError::new(
            ValidationErrorKind::AlgorithmMismatch,
            format!(
                "Cannot compare '{}' with '{}'",
                a.algorithm.tag(),
                b.algorithm.tag()
            ),
        ));
    }

    let wait_delta = MetricDelta::between(a.avg_wait_time, b.avg_wait_time);
    let turnaround_delta = MetricDelta::between(a.avg_turnaround_time, b.avg_turnaround_time);
    debug!(
        "comparison {}: wait {:?} by {:.2}, turnaround {:?} by {:.2}",
        a.algorithm.tag(),
        wait_delta.better,
        wait_delta.difference,
        turnaround_delta.better,
        turnaround_delta.difference
    );

    Ok(ComparisonResult {
        algorithm: a.algorithm,
        label_a: format!("{} ({})", a.algorithm.display_name(), a.label()),
        label_b: format!("{} ({})", b.algorithm.display_name(), b.label()),
        result_a: a,
        result_b: b,
        wait_delta,
        turnaround_delta,
    })
}
