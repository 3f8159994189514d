//! Problem instance container.
//!
//! A `ProblemInstance` bundles the tasks and workers of one scheduling
//! problem. Instances are built by external generators and treated as
//! read-only input by every solver.

use serde::{Deserialize, Serialize};

use super::{Task, Worker};

/// One R|M_j|C_max problem: tasks, workers, and metadata.
///
/// Task order and worker order are meaningful: the exact solver branches
/// over tasks in instance order, and instance order is the crate-wide
/// final tie-break axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Instance name (for labeling and reports).
    pub name: String,
    /// Tasks to assign, in branch order.
    pub tasks: Vec<Task>,
    /// Workers available for assignment.
    pub workers: Vec<Worker>,
    /// Free-text description.
    pub description: String,
}

impl ProblemInstance {
    /// Creates an empty instance with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            workers: Vec::new(),
            description: String::new(),
        }
    }

    /// Adds a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Adds a worker.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Looks up a worker by name.
    pub fn worker(&self, name: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.name == name)
    }

    /// Looks up a task by name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Number of tasks that list the given worker as eligible.
    ///
    /// This is the worker's "constraint count": a low count marks a
    /// scarce worker that few tasks can use.
    pub fn constraint_count(&self, worker: &str) -> usize {
        self.tasks.iter().filter(|t| t.is_eligible(worker)).count()
    }
}
