//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record held by list containers.
//! - Validate the non-empty title/body invariant at construction time.
//!
//! # Invariants
//! - `id` is caller-assigned and stays stable for the task lifetime.
//! - `date_create` is set once and never changes after construction.
//! - `is_finished` only ever moves from `false` to `true` through
//!   `finish_task`; edits may overwrite it wholesale.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-assigned stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Single todo record with identity, text content and lifecycle state.
///
/// Timestamps are unix epoch milliseconds supplied by the caller; the core
/// never reads a system clock, which keeps every operation deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-assigned id, unique within one container.
    pub id: TaskId,
    /// Short human-readable name. Never empty.
    pub title: String,
    /// Free-form note body. Never empty.
    pub body: String,
    /// Creation time in epoch milliseconds. Immutable after construction.
    pub date_create: i64,
    /// Last edit time in epoch milliseconds. Taken from the edit payload.
    pub date_edit: i64,
    /// Completion flag. Defaults to `false`.
    pub is_finished: bool,
}

impl Task {
    /// Creates a validated task with `date_edit` initialized to creation time.
    ///
    /// # Errors
    /// - [`TaskValidationError::EmptyTitle`] when `title` is empty or blank.
    /// - [`TaskValidationError::EmptyBody`] when `body` is empty or blank.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into(),
            body: body.into(),
            date_create: created_at,
            date_edit: created_at,
            is_finished: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the non-empty text invariant.
    ///
    /// Containers do not re-validate; callers run this before handing a task
    /// or an edit payload to a container.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(TaskValidationError::EmptyBody);
        }
        Ok(())
    }
}

/// Validation errors for task text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    EmptyBody,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyBody => write!(f, "task body must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};

    #[test]
    fn new_sets_defaults() {
        let task = Task::new(7, "write report", "quarterly numbers", 1_700_000_000_000)
            .expect("valid task");

        assert_eq!(task.id, 7);
        assert_eq!(task.date_create, 1_700_000_000_000);
        assert_eq!(task.date_edit, task.date_create);
        assert!(!task.is_finished);
    }

    #[test]
    fn rejects_empty_title() {
        let err = Task::new(1, "", "body", 0).expect_err("empty title must fail");
        assert_eq!(err, TaskValidationError::EmptyTitle);
    }

    #[test]
    fn rejects_blank_body() {
        let err = Task::new(1, "title", "   ", 0).expect_err("blank body must fail");
        assert_eq!(err, TaskValidationError::EmptyBody);
    }

    #[test]
    fn validate_catches_post_construction_blanking() {
        let mut task = Task::new(1, "title", "body", 0).expect("valid task");
        task.title.clear();
        assert_eq!(
            task.validate().expect_err("cleared title must fail"),
            TaskValidationError::EmptyTitle
        );
    }
}
