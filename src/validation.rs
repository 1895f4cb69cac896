//! Input validation for scheduling runs.
//!
//! Checks preconditions before any simulation starts. Detects:
//! - Empty process lists
//! - Non-positive burst times and negative arrival times
//! - Duplicate process IDs
//! - Workloads whose end time does not fit in `i64`
//! - Missing or non-positive round-robin quanta
//!
//! All detected issues are reported together; a run never starts on
//! invalid input and never returns partial results.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Algorithm, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Round-robin quantum is missing or not positive.
    InvalidQuantum,
    /// A process has a non-positive burst or a negative arrival.
    InvalidProcess,
    /// Two processes share the same ID.
    DuplicateId,
    /// Two results of different disciplines were compared.
    AlgorithmMismatch,
    /// An algorithm selector tag was not recognized.
    UnknownAlgorithm,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every burst time is ≥ 1
/// 3. Every arrival time is ≥ 0
/// 4. No duplicate process IDs
/// 5. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock value
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max();
    let horizon = processes.iter().try_fold(latest_arrival.unwrap_or(0), |acc, p| {
        acc.checked_add(p.burst_time.max(0))
    });
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProcess,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin quantum.
pub fn validate_quantum(quantum: Option<i64>) -> Result<i64, ValidationError> {
    match quantum {
        Some(q) if q > 0 => Ok(q),
        Some(q) => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {q}"),
        )),
        None => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round-robin requires a time quantum",
        )),
    }
}

/// Validates everything a run of `algorithm` needs.
///
/// The quantum is only checked for round-robin.
pub fn validate_input(
    processes: &[Process],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = match validate_processes(processes) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    if algorithm.requires_quantum() {
        if let Err(e) = validate_quantum(quantum) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 5),
            Process::new("P2", 3).with_arrival(1),
            Process::new("P3", 8).with_arrival(2).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_input(&sample_processes(), Algorithm::RoundRobin, Some(2)).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("P1", 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidProcess && e.message.contains("P1")));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", 3).with_arrival(-1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidProcess && e.message.contains("arrival")));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 3), Process::new("P1", 4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let processes = vec![Process::new("P1", 5).with_arrival(i64::MAX - 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcess);

        let processes = vec![Process::new("P1", i64::MAX), Process::new("P2", 1)];
        assert!(validate_processes(&processes).is_err());

        let processes = vec![Process::new("P1", 2).with_arrival(i64::MAX - 2)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert_eq!(validate_quantum(Some(3)), Ok(3));
        assert_eq!(
            validate_quantum(Some(0)).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert_eq!(
            validate_quantum(Some(-2)).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert_eq!(
            validate_quantum(None).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_quantum_ignored_for_other_algorithms() {
        assert!(validate_input(&sample_processes(), Algorithm::Fcfs, None).is_ok());
        assert!(validate_input(&sample_processes(), Algorithm::Priority, Some(0)).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", 0), Process::new("P1", -3)];
        let errors = validate_input(&processes, Algorithm::RoundRobin, Some(0)).unwrap_err();
        // two invalid bursts + one duplicate + quantum
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_display() {
        let e = ValidationError::new(ValidationErrorKind::EmptyInput, "nothing to run");
        assert_eq!(e.to_string(), "EmptyInput: nothing to run");
    }
}
