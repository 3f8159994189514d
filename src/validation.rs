//! Input validation for problem instances.
//!
//! Checks structural integrity of an instance before solving. Detects:
//! - Empty task or worker lists
//! - Duplicate task/worker names
//! - Tasks with no eligible workers
//! - Eligibility references to unknown workers
//! - Missing or non-positive processing-time entries
//!
//! Every solver validates its input and refuses to run on a broken
//! instance, so a failed solve never returns a partially computed result.

use crate::models::ProblemInstance;
use std::collections::HashSet;

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
    /// The instance has no tasks or no workers.
    EmptyInstance,
    /// Two entities share the same name.
    DuplicateName,
    /// A task's eligibility list is empty.
    NoEligibleWorkers,
    /// A task lists an eligible worker that doesn't exist.
    UnknownWorker,
    /// An eligible worker has no processing-time entry for the task.
    MissingProcessingTime,
    /// A processing time is zero.
    NonPositiveProcessingTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem instance.
///
/// Checks:
/// 1. At least one task and one worker exist
/// 2. No duplicate task or worker names
/// 3. Every task has a non-empty eligibility list
/// 4. Every eligible worker exists in the instance worker list
/// 5. Every eligible worker has a positive processing-time entry
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate(instance: &ProblemInstance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstance,
            format!("Instance '{}' has no tasks", instance.name),
        ));
    }
    if instance.workers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstance,
            format!("Instance '{}' has no workers", instance.name),
        ));
    }

    // Collect worker names
    let mut worker_names = HashSet::new();
    for worker in &instance.workers {
        if !worker_names.insert(worker.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate worker name: {}", worker.name),
            ));
        }
    }

    let mut task_names = HashSet::new();
    for task in &instance.tasks {
        if !task_names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if task.eligible_workers.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoEligibleWorkers,
                format!("Task '{}' has no eligible workers", task.name),
            ));
        }

        for worker in &task.eligible_workers {
            if !worker_names.contains(worker.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownWorker,
                    format!("Task '{}' references unknown worker '{worker}'", task.name),
                ));
            }

            match task.time_on(worker) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::MissingProcessingTime,
                    format!(
                        "Task '{}' has no processing time for eligible worker '{worker}'",
                        task.name
                    ),
                )),
                Some(0) => errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveProcessingTime,
                    format!(
                        "Task '{}' has zero processing time on worker '{worker}'",
                        task.name
                    ),
                )),
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether the instance passes all validation checks.
pub fn is_valid(instance: &ProblemInstance) -> bool {
    validate(instance).is_ok()
}
