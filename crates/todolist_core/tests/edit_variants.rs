use std::cell::RefCell;
use todolist_core::{
    ConfirmTodoList, DefaultTodoList, EditOutcome, ListKind, Task, TaskList,
};

fn task(id: i64, title: &str, body: &str) -> Task {
    Task::new(id, title, body, 1_000 + id).unwrap()
}

#[test]
fn default_edit_always_applies() {
    let mut list = DefaultTodoList::new(task(1, "before", "old body"));

    let mut patch = task(1, "after", "new body");
    patch.date_edit = 9_999;
    patch.is_finished = true;

    let outcome = list.edit_task(patch).unwrap();
    assert_eq!(outcome, EditOutcome::Applied);
    assert!(outcome.was_applied());

    let edited = list.get_task_info(1).unwrap();
    assert_eq!(edited.title, "after");
    assert_eq!(edited.body, "new body");
    assert_eq!(edited.date_edit, 9_999);
    assert!(edited.is_finished);
    // Identity and creation time survive the overwrite.
    assert_eq!(edited.id, 1);
    assert_eq!(edited.date_create, 1_001);
}

#[test]
fn default_edit_of_absent_id_reports_not_found() {
    let mut list = DefaultTodoList::new(task(1, "seed", "seed body"));

    let outcome = list.edit_task(task(42, "ghost", "nothing")).unwrap();
    assert_eq!(outcome, EditOutcome::NotFound);
    assert_eq!(list.total_count(), 1);
}

#[test]
fn confirm_edit_applies_when_prompt_says_yes() {
    let mut list = ConfirmTodoList::new(task(1, "before", "old body"), |_: &str| true);

    let outcome = list.edit_task(task(1, "after", "new body")).unwrap();
    assert_eq!(outcome, EditOutcome::Applied);
    assert!(outcome.was_applied());
    assert_eq!(list.get_task_info(1).unwrap().title, "after");
}

#[test]
fn confirm_edit_declined_leaves_state_untouched() {
    let mut list = ConfirmTodoList::new(task(1, "keep me", "old body"), |_: &str| false);

    let outcome = list.edit_task(task(1, "X", "new body")).unwrap();
    assert_eq!(outcome, EditOutcome::Declined);
    assert!(!outcome.was_applied());

    let untouched = list.get_task_info(1).unwrap();
    assert_eq!(untouched.title, "keep me");
    assert_eq!(untouched.body, "old body");
}

#[test]
fn confirm_prompt_receives_a_message_naming_the_task() {
    let seen = RefCell::new(None);
    let prompt = |message: &str| {
        *seen.borrow_mut() = Some(message.to_string());
        false
    };

    let mut list = ConfirmTodoList::new(task(7, "seed", "seed body"), prompt);
    list.edit_task(task(7, "new", "new body")).unwrap();

    let message = seen.borrow().clone().expect("prompt should be consulted");
    assert!(message.contains('7'), "unexpected message: {message}");
}

#[test]
fn confirm_prompt_is_not_consulted_before_the_edit() {
    let calls = RefCell::new(0_usize);
    let prompt = |_: &str| {
        *calls.borrow_mut() += 1;
        true
    };

    let mut list = ConfirmTodoList::new(task(1, "seed", "seed body"), prompt);
    list.add_task(task(2, "second", "b")).unwrap();
    list.finish_task(2);
    list.delete_task(2);
    assert_eq!(*calls.borrow(), 0);

    list.edit_task(task(1, "edited", "b")).unwrap();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn variants_carry_their_descriptive_kind_tag() {
    let default_list = DefaultTodoList::new(task(1, "seed", "seed body"));
    assert_eq!(default_list.kind(), ListKind::Default);
    assert_eq!(default_list.kind().as_str(), "default");

    let confirm_list = ConfirmTodoList::new(task(1, "seed", "seed body"), |_: &str| true);
    assert_eq!(confirm_list.kind(), ListKind::Confirm);
    assert_eq!(confirm_list.kind().as_str(), "confirm");
}
