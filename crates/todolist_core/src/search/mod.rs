//! Field-equality search over a list container.
//!
//! # Responsibility
//! - Restrict searchable fields to a closed enumeration.
//! - Match values with exact, type-checked equality.
//!
//! # Invariants
//! - Unsupported field names fail at the boundary, never as empty results.
//! - Search never mutates the sequence; editing stays unsupported.

use crate::list::{ListCore, ListError, TaskList};
use crate::model::task::{Task, TaskId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed set of task fields accepted by [`SearchTodoList::find_tasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Id,
    Title,
    Body,
    DateCreate,
    DateEdit,
    IsFinished,
}

impl SearchField {
    /// Stable field name used in user-facing queries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Body => "body",
            Self::DateCreate => "date_create",
            Self::DateEdit => "date_edit",
            Self::IsFinished => "is_finished",
        }
    }

    /// Parses a field name, rejecting anything outside the closed set.
    ///
    /// # Errors
    /// - [`SearchError::EmptyField`] for blank input.
    /// - [`SearchError::UnsupportedField`] for unknown names.
    pub fn parse(value: &str) -> Result<Self, SearchError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(SearchError::EmptyField);
        }
        match normalized {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "body" => Ok(Self::Body),
            "date_create" => Ok(Self::DateCreate),
            "date_edit" => Ok(Self::DateEdit),
            "is_finished" => Ok(Self::IsFinished),
            other => Err(SearchError::UnsupportedField(other.to_string())),
        }
    }

    /// Name of the value type this field matches against.
    fn expected_type(self) -> &'static str {
        match self {
            Self::Id | Self::DateCreate | Self::DateEdit => "integer",
            Self::Title | Self::Body => "text",
            Self::IsFinished => "boolean",
        }
    }
}

/// Typed comparison value for field search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

/// Search-layer errors for field selection and value typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyField,
    UnsupportedField(String),
    TypeMismatch {
        field: SearchField,
        expected: &'static str,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField => write!(f, "search field name must not be empty"),
            Self::UnsupportedField(name) => write!(f, "search field is unsupported: {name}"),
            Self::TypeMismatch { field, expected } => write!(
                f,
                "field `{}` matches {expected} values only",
                field.as_str()
            ),
        }
    }
}

impl Error for SearchError {}

/// List variant specializing the base contract with field search.
///
/// Editing stays unsupported: the variant specializes structure, not
/// mutation semantics.
#[derive(Debug, Clone)]
pub struct SearchTodoList {
    core: ListCore,
}

impl SearchTodoList {
    /// Creates a searchable list seeded with one task.
    pub fn new(seed: Task) -> Self {
        Self {
            core: ListCore::new(seed),
        }
    }

    /// Shared container state, including seed metadata.
    pub fn core(&self) -> &ListCore {
        &self.core
    }

    /// Returns owned snapshots of every task whose `field` equals `value`.
    ///
    /// # Errors
    /// - [`SearchError::TypeMismatch`] when the value variant does not match
    ///   the field's type.
    pub fn find_tasks(
        &self,
        field: SearchField,
        value: &FieldValue,
    ) -> Result<Vec<Task>, SearchError> {
        let hits = match (field, value) {
            (SearchField::Id, FieldValue::Int(id)) => {
                self.core.filter_tasks(|task| task.id == *id)
            }
            (SearchField::Title, FieldValue::Text(text)) => {
                self.core.filter_tasks(|task| task.title == *text)
            }
            (SearchField::Body, FieldValue::Text(text)) => {
                self.core.filter_tasks(|task| task.body == *text)
            }
            (SearchField::DateCreate, FieldValue::Int(stamp)) => {
                self.core.filter_tasks(|task| task.date_create == *stamp)
            }
            (SearchField::DateEdit, FieldValue::Int(stamp)) => {
                self.core.filter_tasks(|task| task.date_edit == *stamp)
            }
            (SearchField::IsFinished, FieldValue::Bool(flag)) => {
                self.core.filter_tasks(|task| task.is_finished == *flag)
            }
            (field, _) => {
                return Err(SearchError::TypeMismatch {
                    field,
                    expected: field.expected_type(),
                })
            }
        };

        debug!(
            "event=task_search module=search status=ok field={} hits={}",
            field.as_str(),
            hits.len()
        );
        Ok(hits)
    }
}

impl TaskList for SearchTodoList {
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
    use super::{SearchError, SearchField};

    #[test]
    fn parses_all_supported_fields() {
        assert_eq!(SearchField::parse("id").expect("id parse"), SearchField::Id);
        assert_eq!(
            SearchField::parse("title").expect("title parse"),
            SearchField::Title
        );
        assert_eq!(
            SearchField::parse("body").expect("body parse"),
            SearchField::Body
        );
        assert_eq!(
            SearchField::parse("date_create").expect("date_create parse"),
            SearchField::DateCreate
        );
        assert_eq!(
            SearchField::parse("date_edit").expect("date_edit parse"),
            SearchField::DateEdit
        );
        assert_eq!(
            SearchField::parse("is_finished").expect("is_finished parse"),
            SearchField::IsFinished
        );
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(
            SearchField::parse("  title  ").expect("padded name parses"),
            SearchField::Title
        );
    }

    #[test]
    fn rejects_empty_field_name() {
        let err = SearchField::parse("   ").expect_err("blank field must fail");
        assert_eq!(err, SearchError::EmptyField);
    }

    #[test]
    fn rejects_unknown_field_name() {
        let err = SearchField::parse("priority").expect_err("unknown field must fail");
        assert_eq!(err, SearchError::UnsupportedField("priority".to_string()));
    }

    #[test]
    fn field_names_round_trip_through_parse() {
        for field in [
            SearchField::Id,
            SearchField::Title,
            SearchField::Body,
            SearchField::DateCreate,
            SearchField::DateEdit,
            SearchField::IsFinished,
        ] {
            assert_eq!(SearchField::parse(field.as_str()).expect("round trip"), field);
        }
    }
}
