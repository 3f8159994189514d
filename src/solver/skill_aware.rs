//! Skill-aware greedy heuristic.
//!
//! Selects workers by scarcity rather than by load: each task goes to
//! its eligible worker that the fewest tasks can use. Ties go to the
//! worker with the *largest* current load — a busy scarce worker keeps
//! collecting work so flexible workers stay free for tasks that may
//! need them exclusively later.

use std::time::Instant;

use crate::models::{ProblemInstance, SchedulingResult};

use super::indexed::IndexedInstance;
use super::{finish, validated, SolveError};

/// Fixed scarcity-first heuristic (not parameterized).
///
/// Tasks are processed in instance order; per task the eligible worker
/// with the smallest constraint count wins, ties broken by largest
/// current load, then by eligibility-list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillAwareGreedy;

impl SkillAwareGreedy {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }

    /// Runs the heuristic.
    pub fn solve(&self, instance: &ProblemInstance) -> Result<SchedulingResult, SolveError> {
        let started = Instant::now();
        validated(instance)?;

        let ixd = IndexedInstance::new(instance);
        let mut loads = vec![0u64; ixd.worker_count()];
        let mut slots = vec![0usize; ixd.task_count()];

        for t in 0..ixd.task_count() {
            let candidates = &ixd.eligible[t];
            if candidates.is_empty() {
                // Unreachable after validation; defensive.
                return Err(SolveError::NoEligibleWorker {
                    task: instance.tasks[t].name.clone(),
                });
            }

            let mut best = 0usize;
            for (slot, &worker) in candidates.iter().enumerate().skip(1) {
                let incumbent = candidates[best];
                let better = match ixd.constraint_counts[worker]
                    .cmp(&ixd.constraint_counts[incumbent])
                {
                    std::cmp::Ordering::Less => true,
                    std::cmp::Ordering::Greater => false,
                    // Scarcity tie: keep the busier worker busy.
                    std::cmp::Ordering::Equal => loads[worker] > loads[incumbent],
                };
                if better {
                    best = slot;
                }
            }

            slots[t] = best;
            loads[candidates[best]] += ixd.times[t][best];
        }

        Ok(finish(&ixd, &slots, "skill-aware".to_string(), started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, Worker};

    #[test]
    fn test_prefers_scarce_worker() {
        // W2 is eligible for one task, W1 for two: T1 goes to W2 even
        // though both are idle and W1 is listed first.
        let instance = ProblemInstance::new("scarcity")
            .with_task(Task::new("T1").with_worker("W1", 5).with_worker("W2", 5))
            .with_task(Task::new("T2").with_worker("W1", 5))
            .with_worker(Worker::new("W1"))
            .with_worker(Worker::new("W2"));

        let result = SkillAwareGreedy::new().solve(&instance).unwrap();
        assert_eq!(result.assigned_worker("T1"), Some("W2"));
        assert_eq!(result.assigned_worker("T2"), Some("W1"));
        assert_eq!(result.makespan, 5);
        assert_eq!(result.algorithm, "skill-aware");
    }

    #[test]
    fn test_scarcity_tie_prefers_loaded_worker() {
        // All constraint counts equal; after T1 loads W1, the tie on T2
        // must go to the busier W1, not the idle W2.
        let instance = ProblemInstance::new("busy-tie")
            .with_task(Task::new("T1").with_worker("W1", 3))
            .with_task(Task::new("T2").with_worker("W2", 4).with_worker("W1", 4))
            .with_task(Task::new("T3").with_worker("W2", 2))
            .with_worker(Worker::new("W1"))
            .with_worker(Worker::new("W2"));

        // Constraint counts: W1 = 2 (T1, T2), W2 = 2 (T2, T3).
        let result = SkillAwareGreedy::new().solve(&instance).unwrap();
        assert_eq!(result.assigned_worker("T2"), Some("W1"));
        assert_eq!(result.worker_load("W1"), 7);
        assert_eq!(result.worker_load("W2"), 2);
    }

    #[test]
    fn test_all_ties_fall_to_eligibility_order() {
        let instance = ProblemInstance::new("flat")
            .with_task(Task::new("T1").with_worker("W2", 1).with_worker("W1", 1))
            .with_worker(Worker::new("W1"))
            .with_worker(Worker::new("W2"));

        let result = SkillAwareGreedy::new().solve(&instance).unwrap();
        // Equal counts, equal (zero) loads: first listed wins.
        assert_eq!(result.assigned_worker("T1"), Some("W2"));
    }

    #[test]
    fn test_deterministic() {
        let instance = ProblemInstance::new("det")
            .with_task(Task::new("T1").with_worker("W1", 2).with_worker("W2", 3))
            .with_task(Task::new("T2").with_worker("W2", 1).with_worker("W1", 4))
            .with_worker(Worker::new("W1"))
            .with_worker(Worker::new("W2"));

        let a = SkillAwareGreedy::new().solve(&instance).unwrap();
        let b = SkillAwareGreedy::new().solve(&instance).unwrap();
        assert_eq!(a.assignment, b.assignment);
        assert_eq!(a.makespan, b.makespan);
    }

    #[test]
    fn test_invalid_input() {
        let instance = ProblemInstance::new("empty");
        assert!(matches!(
            SkillAwareGreedy::new().solve(&instance),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
