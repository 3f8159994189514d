//! Task model.
//!
//! A task is a unit of work assigned to exactly one worker. Processing
//! time depends on which worker executes it (the "unrelated machines"
//! setting), and only a subset of workers is eligible at all.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! (R || C_max with machine eligibility restrictions)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A task to be assigned to one of its eligible workers.
///
/// The eligibility list is ordered: solvers branch and break final ties
/// in list order, so the list order is part of the deterministic contract.
/// Processing times are defined for exactly the eligible workers.
///
/// Immutable after construction; build with `new` + `with_*`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name.
    pub name: String,
    /// Workers this task may be assigned to, in branch/tie-break order.
    pub eligible_workers: Vec<String>,
    /// Processing time (positive) per eligible worker.
    pub processing_times: HashMap<String, u64>,
}

impl Task {
    /// Creates a task with no eligibility yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            eligible_workers: Vec::new(),
            processing_times: HashMap::new(),
        }
    }

    /// Declares a worker eligible with the given processing time.
    ///
    /// Eligibility order follows the order of `with_worker` calls.
    pub fn with_worker(mut self, worker: impl Into<String>, processing_time: u64) -> Self {
        let worker = worker.into();
        self.eligible_workers.push(worker.clone());
        self.processing_times.insert(worker, processing_time);
        self
    }

    /// Processing time on the given worker, if eligible.
    pub fn time_on(&self, worker: &str) -> Option<u64> {
        self.processing_times.get(worker).copied()
    }

    /// Whether the given worker is eligible for this task.
    pub fn is_eligible(&self, worker: &str) -> bool {
        self.eligible_workers.iter().any(|w| w == worker)
    }

    /// Number of eligible workers.
    pub fn eligibility_count(&self) -> usize {
        self.eligible_workers.len()
    }

    /// Maximum processing time across eligible workers (0 if none).
    pub fn max_time(&self) -> u64 {
        self.eligible_workers
            .iter()
            .filter_map(|w| self.time_on(w))
            .max()
            .unwrap_or(0)
    }

    /// Minimum processing time across eligible workers (0 if none).
    pub fn min_time(&self) -> u64 {
        self.eligible_workers
            .iter()
            .filter_map(|w| self.time_on(w))
            .min()
            .unwrap_or(0)
    }

    /// Spread between the worst and best eligible worker for this task.
    pub fn time_range(&self) -> u64 {
        self.max_time() - self.min_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1").with_worker("W1", 10).with_worker("W2", 4);

        assert_eq!(task.name, "T1");
        assert_eq!(task.eligible_workers, vec!["W1", "W2"]);
        assert_eq!(task.time_on("W1"), Some(10));
        assert_eq!(task.time_on("W2"), Some(4));
        assert_eq!(task.time_on("W3"), None);
        assert!(task.is_eligible("W2"));
        assert!(!task.is_eligible("W3"));
        assert_eq!(task.eligibility_count(), 2);
    }

    #[test]
    fn test_derived_attributes() {
        let task = Task::new("T1")
            .with_worker("W1", 10)
            .with_worker("W2", 4)
            .with_worker("W3", 7);

        assert_eq!(task.max_time(), 10);
        assert_eq!(task.min_time(), 4);
        assert_eq!(task.time_range(), 6);
    }

    #[test]
    fn test_empty_eligibility() {
        let task = Task::new("bare");
        assert_eq!(task.eligibility_count(), 0);
        assert_eq!(task.max_time(), 0);
        assert_eq!(task.min_time(), 0);
        assert_eq!(task.time_range(), 0);
    }
}
