//! Constructive greedy heuristics.
//!
//! A single-pass constructor configured by two independent strategy
//! values: the order tasks are processed in, and how ties between
//! equally-loaded workers are broken. The construction loop itself
//! (sort → iterate → select → record) exists exactly once; strategies
//! are data, not subclasses.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::models::{ProblemInstance, SchedulingResult};

use super::indexed::IndexedInstance;
use super::{finish, validated, SolveError};

/// Order in which tasks are handed to the selection rule.
///
/// All sorts are stable: tasks with equal keys keep instance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskOrder {
    /// Instance order, no sort.
    Input,
    /// Descending by maximum processing time (LPT-style): place
    /// hard-to-place, expensive tasks while workers are still empty.
    MaxTimeDesc,
    /// Ascending by minimum processing time.
    MinTimeAsc,
    /// Descending by max−min spread: high-variance tasks first, while
    /// their cheap worker is still likely to be free.
    RangeDesc,
}

impl TaskOrder {
    /// Strategy name used in result labels.
    pub fn name(&self) -> &'static str {
        match self {
            TaskOrder::Input => "input",
            TaskOrder::MaxTimeDesc => "max-desc",
            TaskOrder::MinTimeAsc => "min-asc",
            TaskOrder::RangeDesc => "range-desc",
        }
    }
}

/// Secondary key between workers tied on resulting load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// No secondary key: first candidate in the task's eligibility list.
    EligibilityOrder,
    /// Ascending constraint count: prefer the worker fewer tasks can
    /// use, preserving flexible workers' idle capacity for later.
    ConstraintCount,
}

impl TieBreak {
    /// Strategy name used in result labels.
    pub fn name(&self) -> &'static str {
        match self {
            TieBreak::EligibilityOrder => "eligibility",
            TieBreak::ConstraintCount => "constraint-count",
        }
    }
}

/// Full configuration of one greedy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Task processing order.
    pub task_order: TaskOrder,
    /// Worker tie-break rule.
    pub tie_break: TieBreak,
    /// Initialize the load vector in ascending constraint-count order
    /// instead of instance order. Affects only the order loads are
    /// initialized (and thus displayed by reporters that iterate
    /// insertion-ordered maps); selection always iterates the task's
    /// own eligibility list.
    pub scarce_workers_first: bool,
}

impl GreedyConfig {
    /// Creates a config with the given order and tie-break.
    pub fn new(task_order: TaskOrder, tie_break: TieBreak) -> Self {
        Self {
            task_order,
            tie_break,
            scarce_workers_first: false,
        }
    }

    /// Enables scarce-first load initialization.
    pub fn with_scarce_workers_first(mut self) -> Self {
        self.scarce_workers_first = true;
        self
    }

    /// Label fragment identifying this configuration.
    pub fn label(&self) -> String {
        let base = format!("{}/{}", self.task_order.name(), self.tie_break.name());
        if self.scarce_workers_first {
            format!("{base}/scarce-first")
        } else {
            base
        }
    }
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self::new(TaskOrder::Input, TieBreak::EligibilityOrder)
    }
}

/// Single-pass greedy constructor.
///
/// For each task (in configured order), assigns the eligible worker
/// minimizing the resulting load; ties fall to the configured secondary
/// key, then to eligibility-list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver {
    config: GreedyConfig,
}

impl GreedySolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> GreedyConfig {
        self.config
    }

    /// Runs the heuristic.
    pub fn solve(&self, instance: &ProblemInstance) -> Result<SchedulingResult, SolveError> {
        let started = Instant::now();
        validated(instance)?;

        let ixd = IndexedInstance::new(instance);
        let slots = construct(&ixd, &self.config)?;
        Ok(finish(
            &ixd,
            &slots,
            format!("greedy/{}", self.config.label()),
            started,
        ))
    }
}

/// Task indices in the configured processing order.
fn ordered_tasks(ixd: &IndexedInstance<'_>, order: TaskOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..ixd.task_count()).collect();
    let tasks = &ixd.instance.tasks;
    match order {
        TaskOrder::Input => {}
        TaskOrder::MaxTimeDesc => {
            indices.sort_by_key(|&t| std::cmp::Reverse(tasks[t].max_time()));
        }
        TaskOrder::MinTimeAsc => {
            indices.sort_by_key(|&t| tasks[t].min_time());
        }
        TaskOrder::RangeDesc => {
            indices.sort_by_key(|&t| std::cmp::Reverse(tasks[t].time_range()));
        }
    }
    indices
}

/// The shared construction pass. Returns one slot per task (indexed by
/// original task position). Also used as the starting point for local
/// improvement.
pub(crate) fn construct(
    ixd: &IndexedInstance<'_>,
    config: &GreedyConfig,
) -> Result<Vec<usize>, SolveError> {
    // `scarce_workers_first` reorders only how the load vector would be
    // initialized/displayed; with index-keyed loads that leaves selection
    // untouched (selection always iterates the task's eligibility list),
    // so the flag surfaces solely in the result label.
    let mut loads = vec![0u64; ixd.worker_count()];
    let mut slots = vec![0usize; ixd.task_count()];
    for t in ordered_tasks(ixd, config.task_order) {
        let slot = select_worker(ixd, t, &loads, config.tie_break)?;
        slots[t] = slot;
        loads[ixd.eligible[t][slot]] += ixd.times[t][slot];
    }
    Ok(slots)
}

/// Picks the slot minimizing resulting load for task `t`.
fn select_worker(
    ixd: &IndexedInstance<'_>,
    t: usize,
    loads: &[u64],
    tie_break: TieBreak,
) -> Result<usize, SolveError> {
    let candidates = &ixd.eligible[t];
    if candidates.is_empty() {
        // Unreachable after validation; defensive.
        return Err(SolveError::NoEligibleWorker {
            task: ixd.instance.tasks[t].name.clone(),
        });
    }

    let mut best = 0usize;
    let mut best_load = loads[candidates[0]] + ixd.times[t][0];
    for (slot, &worker) in candidates.iter().enumerate().skip(1) {
        let resulting = loads[worker] + ixd.times[t][slot];
        let better = match resulting.cmp(&best_load) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => match tie_break {
                TieBreak::EligibilityOrder => false,
                TieBreak::ConstraintCount => {
                    ixd.constraint_counts[worker] < ixd.constraint_counts[candidates[best]]
                }
            },
        };
        if better {
            best = slot;
            best_load = resulting;
        }
    }
    Ok(best)
}
