//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `todolist_core` end to end from a terminal.
//! - Host the interactive confirmation provider for confirm lists.
//!
//! The default run is deterministic; pass `--confirm-demo` for the
//! interactive edit walk-through.

use std::io::{self, BufRead, Write};

use todolist_core::{ConfirmPrompt, ConfirmTodoList, DefaultTodoList, Task, TaskList};

/// Blocking y/n prompt on stdin, the interactive [`ConfirmPrompt`].
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

fn main() {
    println!("todolist_core version={}", todolist_core::core_version());

    if std::env::args().any(|arg| arg == "--confirm-demo") {
        run_confirm_demo();
        return;
    }

    let seed = Task::new(1, "Inbox", "Everything lands here first", 0)
        .expect("seed task is statically valid");
    let mut list = DefaultTodoList::new(seed);

    let groceries =
        Task::new(2, "Groceries", "Milk, bread, coffee", 1).expect("task is statically valid");
    list.add_task(groceries).expect("id 2 is fresh");
    list.finish_task(2);

    println!(
        "kind={} total={} remaining={}",
        list.kind().as_str(),
        list.total_count(),
        list.remaining_count()
    );
}

fn run_confirm_demo() {
    let seed = Task::new(1, "Draft", "First version of the plan", 0)
        .expect("seed task is statically valid");
    let mut list = ConfirmTodoList::new(seed, StdinConfirm);

    let mut patch =
        Task::new(1, "Draft v2", "Revised plan", 0).expect("task is statically valid");
    patch.date_edit = 1;

    match list.edit_task(patch) {
        Ok(outcome) if outcome.was_applied() => {
            println!("edit applied: {}", list.get_task_info(1).map(|t| t.title.as_str()).unwrap_or("?"));
        }
        Ok(_) => println!("edit skipped"),
        Err(err) => eprintln!("edit failed: {err}"),
    }
}
