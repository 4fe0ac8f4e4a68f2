//! Core domain logic for the todo-list manager.
//! This crate is the single source of truth for business invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod search;
pub mod sort;

pub use list::editable::{ConfirmPrompt, ConfirmTodoList, DefaultTodoList, ListKind};
pub use list::{EditOutcome, ListCore, ListError, TaskList};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use search::{FieldValue, SearchError, SearchField, SearchTodoList};
pub use sort::{SortTodoList, TaskOrder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
