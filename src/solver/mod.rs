//! Assignment solvers.
//!
//! Every solver consumes a validated `ProblemInstance` and produces a
//! `SchedulingResult`; solvers hold no state between calls and are
//! deterministic functions of their input.
//!
//! # Solvers
//!
//! - [`ExactSolver`]: exhaustive enumeration, optimal, exponential —
//!   gate with [`estimate_assignment_count`] before invoking.
//! - [`GreedySolver`]: single-pass constructive heuristic, configured by
//!   [`TaskOrder`] and [`TieBreak`] strategy values.
//! - [`SkillAwareGreedy`]: fixed scarcity-first heuristic.
//! - [`LocalImprovement`]: hill-climbing refinement over a greedy start.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Lenstra, Shmoys & Tardos (1990), "Approximation algorithms for
//!   scheduling unrelated parallel machines"

mod exact;
mod greedy;
mod indexed;
mod local_search;
mod skill_aware;

pub use exact::{estimate_assignment_count, ExactSolver, ENUMERATION_WARN_THRESHOLD};
pub use greedy::{GreedyConfig, GreedySolver, TaskOrder, TieBreak};
pub use local_search::LocalImprovement;
pub use skill_aware::SkillAwareGreedy;

use std::time::Instant;

use crate::models::{ProblemInstance, SchedulingResult};
use crate::validation::{validate, ValidationError};

use indexed::IndexedInstance;

/// Errors raised by solvers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SolveError {
    /// The instance failed validation; no search was started.
    #[error("invalid problem instance ({} validation error(s)): {}", .0.len(), summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// A task had no eligible workers at selection time. Unreachable
    /// when validation ran; indicates a caller contract violation.
    #[error("task '{task}' has no eligible workers")]
    NoEligibleWorker {
        /// Name of the offending task.
        task: String,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates an instance, mapping failure to `SolveError::InvalidInput`.
fn validated(instance: &ProblemInstance) -> Result<(), SolveError> {
    validate(instance).map_err(SolveError::InvalidInput)
}

/// Wraps a finished slot assignment into a `SchedulingResult`.
fn finish(
    ixd: &IndexedInstance<'_>,
    slots: &[usize],
    algorithm: String,
    started: Instant,
) -> SchedulingResult {
    let (assignment, loads) = ixd.resolve(slots);
    let makespan = crate::metrics::compute_makespan(&loads);
    SchedulingResult {
        assignment,
        loads,
        makespan,
        solve_time: started.elapsed(),
        algorithm,
    }
}

#[cfg(test)]
mod tests {
    //! Cross-solver properties: every solver agrees on feasibility,
    //! determinism, and the exact solver's optimality bound.

    use super::*;
    use crate::metrics::{compute_loads, compute_makespan, is_feasible};
    use crate::models::{ProblemInstance, Task, Worker};

    /// 8 tasks, 3 workers, mixed eligibility.
    fn small_instance() -> ProblemInstance {
        ProblemInstance::new("small")
            .with_task(Task::new("T1").with_worker("A1", 10).with_worker("A3", 7))
            .with_task(Task::new("T2").with_worker("A2", 8).with_worker("A3", 12))
            .with_task(Task::new("T3").with_worker("A1", 6).with_worker("A2", 6))
            .with_task(Task::new("T4").with_worker("A3", 5))
            .with_task(Task::new("T5").with_worker("A1", 9).with_worker("A2", 3))
            .with_task(
                Task::new("T6")
                    .with_worker("A1", 4)
                    .with_worker("A2", 4)
                    .with_worker("A3", 4),
            )
            .with_task(Task::new("T7").with_worker("A2", 11))
            .with_task(Task::new("T8").with_worker("A1", 2).with_worker("A3", 6))
            .with_worker(Worker::new("A1"))
            .with_worker(Worker::new("A2"))
            .with_worker(Worker::new("A3"))
    }

    fn all_results(instance: &ProblemInstance) -> Vec<crate::models::SchedulingResult> {
        let mut results = vec![ExactSolver::new().solve(instance).unwrap()];
        for order in [
            TaskOrder::Input,
            TaskOrder::MaxTimeDesc,
            TaskOrder::MinTimeAsc,
            TaskOrder::RangeDesc,
        ] {
            for tie in [TieBreak::EligibilityOrder, TieBreak::ConstraintCount] {
                let config = GreedyConfig::new(order, tie);
                results.push(GreedySolver::new(config).solve(instance).unwrap());
                results.push(LocalImprovement::new(config).solve(instance).unwrap());
            }
        }
        results.push(SkillAwareGreedy::new().solve(instance).unwrap());
        results
    }

    #[test]
    fn test_all_solvers_feasible_and_consistent() {
        let instance = small_instance();
        for result in all_results(&instance) {
            assert!(
                is_feasible(&result.assignment, &instance.tasks),
                "{} produced an infeasible assignment",
                result.algorithm
            );
            let loads = compute_loads(&result.assignment, &instance.tasks, &instance.workers);
            assert_eq!(loads, result.loads, "{} loads mismatch", result.algorithm);
            assert_eq!(
                compute_makespan(&loads),
                result.makespan,
                "{} makespan mismatch",
                result.algorithm
            );
        }
    }

    #[test]
    fn test_exact_is_lower_bound() {
        let instance = small_instance();
        let results = all_results(&instance);
        let optimal = results[0].makespan;
        for result in &results[1..] {
            assert!(
                optimal <= result.makespan,
                "exact ({optimal}) beaten by {} ({})",
                result.algorithm,
                result.makespan
            );
        }
    }

    #[test]
    fn test_solvers_are_idempotent() {
        let instance = small_instance();
        let first = all_results(&instance);
        let second = all_results(&instance);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.assignment, b.assignment, "{} not deterministic", a.algorithm);
            assert_eq!(a.loads, b.loads);
            assert_eq!(a.makespan, b.makespan);
        }
    }

    #[test]
    fn test_single_eligible_worker_routes_everywhere() {
        let instance = ProblemInstance::new("forced")
            .with_task(Task::new("only").with_worker("W1", 13))
            .with_worker(Worker::new("W1"))
            .with_worker(Worker::new("W2"));

        for result in all_results(&instance) {
            assert_eq!(result.assigned_worker("only"), Some("W1"), "{}", result.algorithm);
            assert_eq!(result.makespan, 13, "{}", result.algorithm);
            assert_eq!(result.worker_load("W2"), 0);
        }
    }

    #[test]
    fn test_invalid_instance_rejected_by_every_solver() {
        let instance = ProblemInstance::new("broken")
            .with_task(Task::new("T1")) // no eligible workers
            .with_worker(Worker::new("W1"));

        assert!(matches!(
            ExactSolver::new().solve(&instance),
            Err(SolveError::InvalidInput(_))
        ));
        assert!(matches!(
            GreedySolver::default().solve(&instance),
            Err(SolveError::InvalidInput(_))
        ));
        assert!(matches!(
            SkillAwareGreedy::new().solve(&instance),
            Err(SolveError::InvalidInput(_))
        ));
        assert!(matches!(
            LocalImprovement::new(GreedyConfig::default()).solve(&instance),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_solve_error_messages() {
        let err = SolveError::NoEligibleWorker { task: "T9".into() };
        assert!(err.to_string().contains("T9"));

        let instance = ProblemInstance::new("empty");
        let err = ExactSolver::new().solve(&instance).unwrap_err();
        assert!(err.to_string().contains("validation error"));
    }
}
