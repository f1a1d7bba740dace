//! End-to-end assistant flows: interpret an utterance, apply the resulting
//! action to the list, and keep going, the same loop the chat UI runs.

use chrono::{DateTime, Duration, Local, TimeZone};
use pretty_assertions::assert_eq;
use prism::assistant::{self, Assistant, Reply, TaskAction};
use prism::model::task::{Priority, Task};
use prism::ops::store_ops;

fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
}

/// Interpret one utterance and apply its action, as the UI would.
fn step(assistant: &Assistant, tasks: &mut Vec<Task>, utterance: &str) -> Reply {
    let reply = assistant.interpret_at(utterance, tasks, fixed_now());
    store_ops::apply(tasks, reply.action.clone(), fixed_now()).unwrap();
    reply
}

#[test]
fn conversation_covers_the_whole_task_lifecycle() {
    let assistant = Assistant::default();
    let mut tasks: Vec<Task> = Vec::new();

    // Add with priority and date extraction
    let reply = step(&assistant, &mut tasks, "add buy milk tomorrow high priority");
    assert_eq!(reply.response, "I've added \"Milk\" to your list.");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Milk");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].due_date, Some(fixed_now() + Duration::days(1)));

    // Greeting leaves the list alone
    let reply = step(&assistant, &mut tasks, "hello");
    assert!(reply.response.starts_with("Hello!"));
    assert_eq!(tasks.len(), 1);

    // Complete it through fuzzy matching
    let reply = step(&assistant, &mut tasks, "mark milk done");
    assert_eq!(reply.response, "Great job! Marked \"Milk\" as complete.");
    assert!(tasks[0].is_completed);

    // Completing again is a no-op with an explanation
    let reply = step(&assistant, &mut tasks, "mark milk done");
    assert_eq!(reply.response, "\"Milk\" is already completed.");
    assert!(tasks[0].is_completed);

    // Reschedule only moves the due date
    let before = tasks[0].clone();
    let reply = step(&assistant, &mut tasks, "reschedule milk");
    assert_eq!(reply.response, "Rescheduled \"Milk\" to tomorrow.");
    assert_eq!(tasks[0].due_date, Some(fixed_now() + Duration::days(1)));
    assert_eq!(tasks[0].id, before.id);
    assert_eq!(tasks[0].title, before.title);
    assert_eq!(tasks[0].is_completed, before.is_completed);

    // And finally delete it
    let reply = step(&assistant, &mut tasks, "delete milk");
    assert_eq!(reply.response, "Deleted task: \"Milk\".");
    assert!(tasks.is_empty());
}

#[test]
fn unmatched_commands_never_mutate() {
    let assistant = Assistant::default();
    let mut tasks = vec![Task::new(
        "1".into(),
        "Buy Milk".into(),
        Priority::Medium,
        fixed_now(),
    )];
    let before = tasks.clone();

    for utterance in [
        "delete xyz123",
        "complete xyz123",
        "reschedule xyz123",
        "what even is this",
        "salam",
    ] {
        let reply = step(&assistant, &mut tasks, utterance);
        assert_eq!(reply.action, TaskAction::None, "for {:?}", utterance);
        assert_eq!(tasks, before, "for {:?}", utterance);
    }
}

#[test]
fn code_switched_commands_work_end_to_end() {
    let assistant = Assistant::default();
    let mut tasks: Vec<Task> = Vec::new();

    let reply = step(&assistant, &mut tasks, "kal sabzi lena zaruri karna hai");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Sabzi lena");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].due_date, Some(fixed_now() + Duration::days(1)));
    assert!(reply.response.contains("Sabzi lena"));

    let reply = step(&assistant, &mut tasks, "sabzi khatam karo");
    assert_eq!(reply.response, "Deleted task: \"Sabzi lena\".");
    assert!(tasks.is_empty());
}

#[test]
fn top_level_interpret_uses_stock_vocabulary() {
    let reply = assistant::interpret("hello", &[]);
    assert_eq!(reply.action, TaskAction::None);
    assert_eq!(
        reply.response,
        "Hello! I am your Todo Assistant. You can ask me to add, complete, or delete tasks."
    );
}
