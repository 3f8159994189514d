//! Makespan minimization for unrelated parallel machines with
//! eligibility restrictions (R|M_j|C_max).
//!
//! Tasks have worker-dependent processing times and may only run on a
//! subset of workers; the objective is to minimize the maximum total
//! load over all workers. The problem is NP-hard, so the crate pairs an
//! exact enumerator for small instances with constructive heuristics
//! and local search for everything else.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Worker`, `ProblemInstance`,
//!   `SchedulingResult`
//! - **`validation`**: Input integrity checks (empty instances, dangling
//!   eligibility references, missing processing times)
//! - **`metrics`**: Pure load/makespan/feasibility computation
//! - **`solver`**: `ExactSolver`, the `GreedySolver` strategy family,
//!   `SkillAwareGreedy`, and `LocalImprovement`
//!
//! # Example
//!
//! ```
//! use makespan::models::{ProblemInstance, Task, Worker};
//! use makespan::solver::ExactSolver;
//!
//! let instance = ProblemInstance::new("demo")
//!     .with_task(Task::new("A").with_worker("A1", 10).with_worker("A3", 7))
//!     .with_task(Task::new("B").with_worker("A2", 8).with_worker("A3", 12))
//!     .with_worker(Worker::new("A1"))
//!     .with_worker(Worker::new("A2"))
//!     .with_worker(Worker::new("A3"));
//!
//! let result = ExactSolver::new().solve(&instance).unwrap();
//! assert_eq!(result.makespan, 8);
//! ```
//!
//! # Scope
//!
//! Instance generators, report formatting, and experiment drivers live
//! outside this crate; the boundary is `ProblemInstance` in,
//! `SchedulingResult` out. Worker `max_capacity` and `available` are
//! declared in the model for those layers but not enforced by any
//! solver here.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Lenstra, Shmoys & Tardos (1990), "Approximation algorithms for
//!   scheduling unrelated parallel machines"

pub mod metrics;
pub mod models;
pub mod solver;
pub mod validation;
