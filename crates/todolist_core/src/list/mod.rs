//! List containers and the shared CRUD/query contract.
//!
//! # Responsibility
//! - Own the ordered task sequence and expose base CRUD + status queries.
//! - Define the polymorphic contract shared by every list variant.
//!
//! # Invariants
//! - Task ids are unique within one container; `add_task` rejects duplicates.
//! - Insertion order is preserved unless a sort variant reorders explicitly.
//! - Every mutating operation either fully applies or fully no-ops.

pub mod editable;

use crate::model::task::{Task, TaskId};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Container-level errors for mutating operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// `add_task` received an id already present in the sequence.
    DuplicateId(TaskId),
    /// `edit_task` was invoked on a variant without edit capability.
    EditUnsupported,
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "task id already present in list: {id}"),
            Self::EditUnsupported => {
                write!(f, "editing is not supported by this list variant")
            }
        }
    }
}

impl Error for ListError {}

/// Soft outcome of an edit attempt.
///
/// Declined and not-found are normal results, not failures; hard failures
/// surface as [`ListError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The matching task was overwritten.
    Applied,
    /// The confirmation collaborator declined; nothing was mutated.
    Declined,
    /// No task with the given id exists; nothing was mutated.
    NotFound,
}

impl EditOutcome {
    /// `true` iff the edit mutated the sequence.
    pub fn was_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Base contract shared by every list variant.
///
/// Editing is part of the contract but defaults to unsupported; editable
/// variants override [`TaskList::edit_task`] with their own authorization
/// policy, while search/sort variants keep the default.
pub trait TaskList {
    /// Appends a task to the sequence.
    ///
    /// # Errors
    /// - [`ListError::DuplicateId`] when the id is already present.
    fn add_task(&mut self, task: Task) -> Result<(), ListError>;

    /// Read-only view of the current sequence (not a snapshot).
    fn all_tasks(&self) -> &[Task];

    /// First task matching `id`, or `None` as the not-found signal.
    fn get_task_info(&self, id: TaskId) -> Option<&Task>;

    /// Removes the matching task. No-op when the id is absent.
    fn delete_task(&mut self, id: TaskId);

    /// Marks the matching task finished. Idempotent; no-op when absent.
    fn finish_task(&mut self, id: TaskId);

    /// Total number of tasks in the sequence.
    fn total_count(&self) -> usize;

    /// Number of tasks still unfinished.
    fn remaining_count(&self) -> usize;

    /// Applies an edit according to the variant's authorization policy.
    fn edit_task(&mut self, _task: Task) -> Result<EditOutcome, ListError> {
        Err(ListError::EditUnsupported)
    }
}

/// Shared container state backing every list variant.
///
/// Carries the owned task sequence plus identity metadata mirrored from the
/// seed task the container was created with.
#[derive(Debug, Clone)]
pub struct ListCore {
    id: TaskId,
    /// Seed title, freely readable and writable by the owner.
    pub title: String,
    /// Seed body, freely readable and writable by the owner.
    pub body: String,
    date_create: i64,
    date_edit: i64,
    is_finished: bool,
    tasks: Vec<Task>,
}

impl ListCore {
    /// Creates a container seeded with exactly one initial task.
    ///
    /// The container mirrors the seed's identity fields and starts its
    /// sequence with the seed itself.
    pub fn new(seed: Task) -> Self {
        let mut core = Self {
            id: seed.id,
            title: seed.title.clone(),
            body: seed.body.clone(),
            date_create: seed.date_create,
            date_edit: seed.date_edit,
            is_finished: seed.is_finished,
            tasks: Vec::new(),
        };
        // The seed id cannot collide in an empty sequence.
        let _ = core.add_task(seed);
        core
    }

    /// Container identity mirrored from the seed task.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Seed creation time in epoch milliseconds.
    pub fn date_create(&self) -> i64 {
        self.date_create
    }

    /// Seed last-edit time in epoch milliseconds.
    pub fn date_edit(&self) -> i64 {
        self.date_edit
    }

    /// Seed completion flag.
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Appends a task, rejecting ids already present in the sequence.
    pub fn add_task(&mut self, task: Task) -> Result<(), ListError> {
        if self.tasks.iter().any(|existing| existing.id == task.id) {
            warn!(
                "event=task_add_rejected module=list status=error reason=duplicate_id id={}",
                task.id
            );
            return Err(ListError::DuplicateId(task.id));
        }
        debug!("event=task_added module=list status=ok id={}", task.id);
        self.tasks.push(task);
        Ok(())
    }

    /// Read-only view of the current sequence.
    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// First task matching `id`, or `None` when absent.
    pub fn get_task_info(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Removes the matching task. No-op when the id is absent.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() < before {
            debug!("event=task_deleted module=list status=ok id={id}");
        }
    }

    /// Flips `is_finished` to `true` on the matching task.
    ///
    /// Idempotent: already-finished tasks and absent ids are no-ops.
    pub fn finish_task(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            if !task.is_finished {
                task.is_finished = true;
                info!("event=task_finished module=list status=ok id={id}");
            }
        }
    }

    /// Total number of tasks in the sequence.
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks still unfinished.
    pub fn remaining_count(&self) -> usize {
        self.unfinished_tasks().count()
    }

    /// Iterator over tasks that are still open.
    pub(crate) fn unfinished_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.is_finished)
    }

    /// Overwrites the mutable fields of the task matching `patch.id`.
    ///
    /// `id` and `date_create` are preserved; `date_edit` comes from the
    /// caller-supplied payload since the core never stamps its own clock.
    pub(crate) fn apply_edit(&mut self, patch: &Task) -> EditOutcome {
        match self.tasks.iter_mut().find(|task| task.id == patch.id) {
            Some(task) => {
                task.title = patch.title.clone();
                task.body = patch.body.clone();
                task.date_edit = patch.date_edit;
                task.is_finished = patch.is_finished;
                info!("event=task_edited module=list status=ok id={}", patch.id);
                EditOutcome::Applied
            }
            None => EditOutcome::NotFound,
        }
    }

    /// Mutable access to the sequence for in-place reordering.
    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    /// Owned snapshots of every task matching `predicate`.
    pub(crate) fn filter_tasks(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }
}
