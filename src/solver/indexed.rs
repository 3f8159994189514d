//! Integer-indexed view of a problem instance.
//!
//! Solvers run their hot loops over small integer ids instead of name
//! strings: tasks and workers are addressed by their position in the
//! instance, and a task's candidates by their slot in its eligibility
//! list. Names reappear only when a finished assignment is resolved
//! back into a `SchedulingResult`.

use std::collections::HashMap;

use crate::models::{Assignment, LoadVector, ProblemInstance};

/// Indexed instance data, built once per solve from a validated instance.
///
/// A partial or complete assignment is a slice `slots` where `slots[t]`
/// is an index into `eligible[t]` (and `times[t]`).
pub(crate) struct IndexedInstance<'a> {
    pub instance: &'a ProblemInstance,
    /// Per task: eligible worker indices, in eligibility-list order.
    pub eligible: Vec<Vec<usize>>,
    /// Per task: processing times, aligned with `eligible`.
    pub times: Vec<Vec<u64>>,
    /// Per worker: number of tasks listing it as eligible.
    pub constraint_counts: Vec<usize>,
}

impl<'a> IndexedInstance<'a> {
    /// Builds the indexed view. The instance must already be validated:
    /// every eligibility reference resolves and carries a time entry.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        let worker_index: HashMap<&str, usize> = instance
            .workers
            .iter()
            .enumerate()
            .map(|(i, w)| (w.name.as_str(), i))
            .collect();

        let mut eligible = Vec::with_capacity(instance.tasks.len());
        let mut times = Vec::with_capacity(instance.tasks.len());
        let mut constraint_counts = vec![0usize; instance.workers.len()];

        for task in &instance.tasks {
            let mut task_eligible = Vec::with_capacity(task.eligible_workers.len());
            let mut task_times = Vec::with_capacity(task.eligible_workers.len());
            for worker in &task.eligible_workers {
                if let (Some(&w), Some(time)) = (worker_index.get(worker.as_str()), task.time_on(worker)) {
                    task_eligible.push(w);
                    task_times.push(time);
                    constraint_counts[w] += 1;
                }
            }
            eligible.push(task_eligible);
            times.push(task_times);
        }

        Self {
            instance,
            eligible,
            times,
            constraint_counts,
        }
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.eligible.len()
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.instance.workers.len()
    }

    /// Per-worker loads for a complete slot assignment.
    pub fn loads_for(&self, slots: &[usize]) -> Vec<u64> {
        let mut loads = vec![0u64; self.worker_count()];
        for (t, &slot) in slots.iter().enumerate() {
            loads[self.eligible[t][slot]] += self.times[t][slot];
        }
        loads
    }

    /// Resolves a complete slot assignment back to name-keyed records.
    pub fn resolve(&self, slots: &[usize]) -> (Assignment, LoadVector) {
        let mut assignment = Assignment::with_capacity(slots.len());
        for (t, &slot) in slots.iter().enumerate() {
            let task = &self.instance.tasks[t];
            let worker = &self.instance.workers[self.eligible[t][slot]];
            assignment.insert(task.name.clone(), worker.name.clone());
        }

        let loads_by_index = self.loads_for(slots);
        let loads: LoadVector = self
            .instance
            .workers
            .iter()
            .enumerate()
            .map(|(w, worker)| (worker.name.clone(), loads_by_index[w]))
            .collect();

        (assignment, loads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, Worker};

    fn instance() -> ProblemInstance {
        ProblemInstance::new("idx")
            .with_task(Task::new("T1").with_worker("W2", 5).with_worker("W1", 3))
            .with_task(Task::new("T2").with_worker("W2", 4))
            .with_worker(Worker::new("W1"))
            .with_worker(Worker::new("W2"))
    }

    #[test]
    fn test_index_preserves_eligibility_order() {
        let inst = instance();
        let ixd = IndexedInstance::new(&inst);
        // T1 lists W2 before W1; slots must follow list order, not worker order.
        assert_eq!(ixd.eligible[0], vec![1, 0]);
        assert_eq!(ixd.times[0], vec![5, 3]);
        assert_eq!(ixd.eligible[1], vec![1]);
        assert_eq!(ixd.constraint_counts, vec![1, 2]);
    }

    #[test]
    fn test_loads_and_resolve() {
        let inst = instance();
        let ixd = IndexedInstance::new(&inst);
        // T1 → slot 1 (W1, 3), T2 → slot 0 (W2, 4)
        let slots = vec![1, 0];
        assert_eq!(ixd.loads_for(&slots), vec![3, 4]);

        let (assignment, loads) = ixd.resolve(&slots);
        assert_eq!(assignment["T1"], "W1");
        assert_eq!(assignment["T2"], "W2");
        assert_eq!(loads["W1"], 3);
        assert_eq!(loads["W2"], 4);
    }
}
