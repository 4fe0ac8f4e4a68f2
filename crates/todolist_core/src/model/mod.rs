//! Domain model for todo records.
//!
//! # Responsibility
//! - Define the canonical task shape shared by every list variant.
//! - Enforce the non-empty text invariant at the model boundary.
//!
//! # Invariants
//! - Every task reaching a container has passed `Task::validate()`.

pub mod task;
