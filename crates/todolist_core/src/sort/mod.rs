//! In-place task ordering over a list container.
//!
//! # Responsibility
//! - Reorder the owned sequence with caller-supplied comparison rules.
//! - Expose the two named preset orderings.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their relative insertion order.
//! - Sorting reorders in place; no task is added, dropped or mutated.

use crate::list::{ListCore, ListError, TaskList};
use crate::model::task::{Task, TaskId};
use log::debug;
use std::cmp::Ordering;

/// Named preset orderings exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrder {
    /// Unfinished tasks before finished ones.
    UnfinishedFirst,
    /// By creation time, oldest first.
    CreatedAscending,
}

impl TaskOrder {
    /// Comparator implementing this preset.
    pub fn comparator(self) -> fn(&Task, &Task) -> Ordering {
        match self {
            Self::UnfinishedFirst => compare_unfinished_first,
            Self::CreatedAscending => compare_created_ascending,
        }
    }

    /// Stable name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnfinishedFirst => "unfinished_first",
            Self::CreatedAscending => "created_ascending",
        }
    }
}

fn compare_unfinished_first(a: &Task, b: &Task) -> Ordering {
    a.is_finished.cmp(&b.is_finished)
}

fn compare_created_ascending(a: &Task, b: &Task) -> Ordering {
    a.date_create.cmp(&b.date_create)
}

/// List variant specializing the base contract with in-place sorting.
///
/// Editing stays unsupported, same as the search variant.
#[derive(Debug, Clone)]
pub struct SortTodoList {
    core: ListCore,
}

impl SortTodoList {
    /// Creates a sortable list seeded with one task.
    pub fn new(seed: Task) -> Self {
        Self {
            core: ListCore::new(seed),
        }
    }

    /// Shared container state, including seed metadata.
    pub fn core(&self) -> &ListCore {
        &self.core
    }

    /// Reorders the sequence in place and returns the reordered view.
    ///
    /// Uses a stable sort, so equal keys keep insertion order and repeating
    /// the same sort is idempotent.
    pub fn sort_tasks<F>(&mut self, mut compare: F) -> &[Task]
    where
        F: FnMut(&Task, &Task) -> Ordering,
    {
        self.core.tasks_mut().sort_by(|a, b| compare(a, b));
        self.core.all_tasks()
    }

    /// Reorders the sequence with one of the named presets.
    pub fn sort_by_order(&mut self, order: TaskOrder) -> &[Task] {
        debug!(
            "event=task_sort module=sort status=ok order={}",
            order.as_str()
        );
        self.sort_tasks(order.comparator())
    }
}

impl TaskList for SortTodoList {
    fn add_task(&mut self, task: Task) -> Result<(), ListError> {
        self.core.add_task(task)
    }

    fn all_tasks(&self) -> &[Task] {
        self.core.all_tasks()
    }

    fn get_task_info(&self, id: TaskId) -> Option<&Task> {
        self.core.get_task_info(id)
    }

    fn delete_task(&mut self, id: TaskId) {
        self.core.delete_task(id);
    }

    fn finish_task(&mut self, id: TaskId) {
        self.core.finish_task(id);
    }

    fn total_count(&self) -> usize {
        self.core.total_count()
    }

    fn remaining_count(&self) -> usize {
        self.core.remaining_count()
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_created_ascending, compare_unfinished_first, TaskOrder};
    use crate::model::task::Task;
    use std::cmp::Ordering;

    fn task(id: i64, created_at: i64, finished: bool) -> Task {
        let mut task = Task::new(id, "t", "b", created_at).expect("valid test task");
        task.is_finished = finished;
        task
    }

    #[test]
    fn unfinished_sorts_before_finished() {
        let open = task(1, 10, false);
        let done = task(2, 10, true);
        assert_eq!(compare_unfinished_first(&open, &done), Ordering::Less);
        assert_eq!(compare_unfinished_first(&done, &open), Ordering::Greater);
        assert_eq!(compare_unfinished_first(&open, &open), Ordering::Equal);
    }

    #[test]
    fn creation_order_is_oldest_first() {
        let older = task(1, 10, false);
        let newer = task(2, 20, false);
        assert_eq!(compare_created_ascending(&older, &newer), Ordering::Less);
    }

    #[test]
    fn preset_names_are_stable() {
        assert_eq!(TaskOrder::UnfinishedFirst.as_str(), "unfinished_first");
        assert_eq!(TaskOrder::CreatedAscending.as_str(), "created_ascending");
    }
}
