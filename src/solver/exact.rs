//! Exact solver: exhaustive enumeration.
//!
//! Searches the full Cartesian product of every task's eligibility list
//! and keeps the first assignment achieving the minimum makespan. The
//! leaf count is exponential in the task count, so callers should gate
//! invocation with [`estimate_assignment_count`].

use std::time::Instant;

use crate::models::{ProblemInstance, SchedulingResult};

use super::indexed::IndexedInstance;
use super::{finish, validated, SolveError};

/// Estimate above which [`ExactSolver::solve`] logs a warning before
/// proceeding. The solver never aborts on the estimate; bounding the
/// search is the caller's responsibility.
pub const ENUMERATION_WARN_THRESHOLD: u64 = 10_000_000;

/// Number of complete assignments the exact solver would enumerate:
/// the product of all eligibility-list sizes.
///
/// Saturates at `u64::MAX` on overflow — "too large to enumerate" —
/// rather than failing.
pub fn estimate_assignment_count(instance: &ProblemInstance) -> u64 {
    instance
        .tasks
        .iter()
        .map(|t| t.eligibility_count() as u64)
        .fold(1u64, u64::saturating_mul)
}

/// Optimal solver by depth-first enumeration.
///
/// # Determinism
/// Branches over tasks in instance order and over each task's
/// eligibility list in list order; ties on makespan are resolved in
/// favor of the first-found leaf under that traversal. Any alternate
/// implementation (including a parallelized one) must merge candidates
/// in the same total order to stay reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }

    /// Finds an assignment of minimum makespan.
    ///
    /// Fails with [`SolveError::InvalidInput`] when the instance does
    /// not validate. Every leaf is visited; there is no pruning, so the
    /// visited-leaf count equals [`estimate_assignment_count`] for
    /// instances below the overflow threshold.
    pub fn solve(&self, instance: &ProblemInstance) -> Result<SchedulingResult, SolveError> {
        let started = Instant::now();
        validated(instance)?;

        let estimate = estimate_assignment_count(instance);
        if estimate > ENUMERATION_WARN_THRESHOLD {
            log::warn!(
                "exact solver on instance '{}': ~{estimate} assignments to enumerate",
                instance.name
            );
        }

        let ixd = IndexedInstance::new(instance);
        for (t, eligible) in ixd.eligible.iter().enumerate() {
            if eligible.is_empty() {
                return Err(SolveError::NoEligibleWorker {
                    task: instance.tasks[t].name.clone(),
                });
            }
        }

        let mut search = Search {
            ixd: &ixd,
            slots: vec![0; ixd.task_count()],
            loads: vec![0; ixd.worker_count()],
            best: None,
            leaves: 0,
        };
        search.descend(0);

        if estimate <= ENUMERATION_WARN_THRESHOLD {
            debug_assert_eq!(search.leaves, estimate);
        }

        // Validation guarantees at least one task with at least one
        // eligible worker, so the search always reaches a leaf.
        let (_, best_slots) = search
            .best
            .ok_or_else(|| SolveError::NoEligibleWorker {
                task: instance.tasks.first().map(|t| t.name.clone()).unwrap_or_default(),
            })?;

        Ok(finish(&ixd, &best_slots, "exact".to_string(), started))
    }
}

/// Recursive search state: the running slot assignment and load vector
/// are threaded through the recursion, never global.
struct Search<'a, 'i> {
    ixd: &'a IndexedInstance<'i>,
    slots: Vec<usize>,
    loads: Vec<u64>,
    best: Option<(u64, Vec<usize>)>,
    leaves: u64,
}

impl Search<'_, '_> {
    fn descend(&mut self, task: usize) {
        if task == self.ixd.task_count() {
            self.leaves = self.leaves.saturating_add(1);
            let makespan = self.loads.iter().copied().max().unwrap_or(0);
            // Strict '<': the first leaf reaching a makespan wins ties.
            if self.best.as_ref().is_none_or(|(b, _)| makespan < *b) {
                self.best = Some((makespan, self.slots.clone()));
            }
            return;
        }

        for slot in 0..self.ixd.eligible[task].len() {
            let worker = self.ixd.eligible[task][slot];
            let time = self.ixd.times[task][slot];
            self.slots[task] = slot;
            self.loads[worker] += time;
            self.descend(task + 1);
            self.loads[worker] -= time;
        }
    }
}
