//! Scheduling domain models.
//!
//! Core data types for the unrelated-parallel-machines problem with
//! eligibility restrictions: tasks with worker-dependent processing
//! times, workers, problem instances, and solver results.
//!
//! # Domain Mappings
//!
//! | makespan | Teaching | Manufacturing | Services |
//! |----------|----------|---------------|----------|
//! | Task | Course Section | Job | Ticket |
//! | Worker | Teaching Assistant | Machine | Agent |
//! | Eligibility | Qualification | Tooling Fit | Skill Match |
//! | Makespan | Heaviest TA Load | C_max | Peak Backlog |

mod instance;
mod result;
mod task;
mod worker;

pub use instance::ProblemInstance;
pub use result::{Assignment, LoadVector, SchedulingResult};
pub use task::Task;
pub use worker::Worker;
