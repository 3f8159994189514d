//! Solver output record.
//!
//! A `SchedulingResult` captures one solver run: the assignment, the
//! per-worker loads, the makespan, and how long the solve took.
//! Reporting layers read it as an opaque, immutable record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Total mapping task name → assigned worker name.
pub type Assignment = HashMap<String, String>;

/// Per-worker load: worker name → summed processing time.
///
/// Every worker of the instance is present; idle workers carry load 0.
pub type LoadVector = HashMap<String, u64>;

/// The outcome of one solver run.
///
/// Constructed once at the end of a solve and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Task → worker mapping.
    pub assignment: Assignment,
    /// Resulting per-worker loads.
    pub loads: LoadVector,
    /// Maximum load across all workers.
    pub makespan: u64,
    /// Wall-clock time of the solve.
    pub solve_time: Duration,
    /// Human-readable label of the producing algorithm.
    pub algorithm: String,
}

impl SchedulingResult {
    /// Worker assigned to the given task, if any.
    pub fn assigned_worker(&self, task: &str) -> Option<&str> {
        self.assignment.get(task).map(String::as_str)
    }

    /// Load of the given worker (0 if unknown).
    pub fn worker_load(&self, worker: &str) -> u64 {
        self.loads.get(worker).copied().unwrap_or(0)
    }

    /// Workers carrying no load, sorted by name for stable reporting.
    pub fn idle_workers(&self) -> Vec<&str> {
        let mut idle: Vec<&str> = self
            .loads
            .iter()
            .filter(|(_, &load)| load == 0)
            .map(|(name, _)| name.as_str())
            .collect();
        idle.sort_unstable();
        idle
    }
}
