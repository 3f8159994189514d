//! Assignment metrics.
//!
//! Pure functions over a finished (or in-progress) assignment: per-worker
//! loads, the makespan objective, and feasibility. None of these
//! second-guess validation; they compute exactly what they are given.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::{Assignment, LoadVector, Task, Worker};

/// Computes per-worker loads for an assignment.
///
/// Every worker starts at load 0; each assigned task adds its processing
/// time on its assigned worker. Idle workers stay at 0.
///
/// # Panics
/// Panics if an assigned worker has no processing-time entry for its
/// task. Validation rules that out for feasible assignments, so hitting
/// it means the caller broke the contract, not that the input data was
/// merely bad.
pub fn compute_loads(assignment: &Assignment, tasks: &[Task], workers: &[Worker]) -> LoadVector {
    let mut loads: LoadVector = workers.iter().map(|w| (w.name.clone(), 0)).collect();

    for task in tasks {
        if let Some(worker) = assignment.get(&task.name) {
            let time = task.time_on(worker).unwrap_or_else(|| {
                panic!(
                    "task '{}' assigned to worker '{worker}' without a processing time",
                    task.name
                )
            });
            *loads.entry(worker.clone()).or_insert(0) += time;
        }
    }

    loads
}

/// Maximum load across all workers, or 0 for an empty load vector.
pub fn compute_makespan(loads: &LoadVector) -> u64 {
    loads.values().copied().max().unwrap_or(0)
}

/// Whether every task is assigned to one of its own eligible workers.
pub fn is_feasible(assignment: &Assignment, tasks: &[Task]) -> bool {
    tasks.iter().all(|task| {
        assignment
            .get(&task.name)
            .is_some_and(|worker| task.is_eligible(worker))
    })
}
