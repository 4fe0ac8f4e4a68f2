//! Editable list variants and the confirmation collaborator.
//!
//! # Responsibility
//! - Provide the two edit-authorization policies over the base container.
//! - Keep confirmation injectable so the core needs no terminal to test.
//!
//! # Invariants
//! - An edit either fully applies or leaves the sequence untouched.
//! - The confirmation call blocks and resolves before any mutation starts.

use crate::list::{EditOutcome, ListCore, ListError, TaskList};
use crate::model::task::{Task, TaskId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Descriptive tag recorded when an editable variant is constructed.
///
/// Dispatch happens through each variant's own `edit_task`; the tag exists
/// for display and serialization only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Default,
    Confirm,
}

impl ListKind {
    /// Stable string id used in logs and serialized snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Confirm => "confirm",
        }
    }
}

/// Yes/no authorization collaborator for confirmation-gated edits.
///
/// Injected at construction so the core never talks to a terminal directly.
/// Production implementations may block on an interactive prompt; tests use
/// a scripted boolean.
pub trait ConfirmPrompt {
    /// Blocks until the actor answers. `true` authorizes the edit.
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// List whose edits apply unconditionally.
#[derive(Debug, Clone)]
pub struct DefaultTodoList {
    core: ListCore,
    kind: ListKind,
}

impl DefaultTodoList {
    /// Creates a list seeded with one task and tagged [`ListKind::Default`].
    pub fn new(seed: Task) -> Self {
        Self {
            core: ListCore::new(seed),
            kind: ListKind::Default,
        }
    }

    /// Descriptive variant tag recorded at construction.
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Shared container state, including seed metadata.
    pub fn core(&self) -> &ListCore {
        &self.core
    }
}

impl TaskList for DefaultTodoList {
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

    /// Overwrites the matching task without asking anyone.
    fn edit_task(&mut self, task: Task) -> Result<EditOutcome, ListError> {
        Ok(self.core.apply_edit(&task))
    }
}

/// List whose edits require a yes from the injected prompt first.
pub struct ConfirmTodoList<P: ConfirmPrompt> {
    core: ListCore,
    kind: ListKind,
    prompt: P,
}

impl<P: ConfirmPrompt> ConfirmTodoList<P> {
    /// Creates a list seeded with one task and tagged [`ListKind::Confirm`].
    pub fn new(seed: Task, prompt: P) -> Self {
        Self {
            core: ListCore::new(seed),
            kind: ListKind::Confirm,
            prompt,
        }
    }

    /// Descriptive variant tag recorded at construction.
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Shared container state, including seed metadata.
    pub fn core(&self) -> &ListCore {
        &self.core
    }
}

impl<P: ConfirmPrompt> TaskList for ConfirmTodoList<P> {
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

    /// Asks the prompt first; mutation starts only after a yes.
    fn edit_task(&mut self, task: Task) -> Result<EditOutcome, ListError> {
        let message = format!("Apply edit to task {}?", task.id);
        if !self.prompt.confirm(&message) {
            debug!("event=edit_declined module=list status=ok id={}", task.id);
            return Ok(EditOutcome::Declined);
        }
        Ok(self.core.apply_edit(&task))
    }
}
