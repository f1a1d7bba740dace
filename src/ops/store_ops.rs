use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::assistant::TaskAction;
use crate::model::task::{Recurrence, Task};

/// Error type for task-list operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(String),
}

/// Counts shown in the header and by `prism stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

pub fn stats(tasks: &[Task]) -> Stats {
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    Stats {
        total: tasks.len(),
        active: tasks.len() - completed,
        completed,
    }
}

// ---------------------------------------------------------------------------
// Task list mutations (the caller side of the assistant's action protocol)
// ---------------------------------------------------------------------------

/// Insert a new task at the top of the list.
pub fn add_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

/// Remove a task by id, returning it.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> Result<Task, StoreError> {
    let idx = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    Ok(tasks.remove(idx))
}

/// Flip completion on a task. Completing a recurring task that has a due
/// date spawns its next occurrence at the top of the list; the spawned
/// title is returned for display.
pub fn toggle_task(
    tasks: &mut Vec<Task>,
    id: &str,
    now: DateTime<Local>,
) -> Result<Option<String>, StoreError> {
    let idx = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    let completing = !tasks[idx].is_completed;
    tasks[idx].is_completed = completing;

    if completing
        && tasks[idx].recurrence != Recurrence::None
        && let Some(due) = tasks[idx].due_date
        && let Some(next_due) = tasks[idx].recurrence.advance(due)
    {
        let template = &tasks[idx];
        let successor = Task {
            id: Uuid::new_v4().to_string(),
            title: format!("{} (Recurring)", template.title),
            is_completed: false,
            due_date: Some(next_due),
            created_at: now,
            ..template.clone()
        };
        let title = successor.title.clone();
        tasks.insert(0, successor);
        return Ok(Some(title));
    }

    Ok(None)
}

/// Replace the task carrying `task.id` by `task`.
pub fn update_task(tasks: &mut [Task], task: Task) -> Result<(), StoreError> {
    let slot = tasks
        .iter_mut()
        .find(|t| t.id == task.id)
        .ok_or_else(|| StoreError::NotFound(task.id.clone()))?;
    *slot = task;
    Ok(())
}

/// Apply one interpreted action to the list. `None` applies nothing.
pub fn apply(tasks: &mut Vec<Task>, action: TaskAction, now: DateTime<Local>) -> Result<(), StoreError> {
    match action {
        TaskAction::Add { task } => {
            add_task(tasks, task);
            Ok(())
        }
        TaskAction::Delete { target } => delete_task(tasks, &target).map(|_| ()),
        TaskAction::Toggle { target } => toggle_task(tasks, &target, now).map(|_| ()),
        TaskAction::Update { task, .. } => update_task(tasks, task),
        TaskAction::None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn task(id: &str, title: &str) -> Task {
        Task::new(id.into(), title.into(), Priority::Medium, now())
    }

    fn recurring(id: &str, title: &str, recurrence: Recurrence) -> Task {
        let mut t = task(id, title);
        t.recurrence = recurrence;
        t.due_date = Some(now());
        t
    }

    #[test]
    fn test_add_prepends() {
        let mut tasks = vec![task("1", "Old")];
        add_task(&mut tasks, task("2", "New"));
        assert_eq!(tasks[0].id, "2");
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut tasks = vec![task("1", "Only")];
        assert!(matches!(
            delete_task(&mut tasks, "nope"),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut tasks = vec![task("1", "Buy Milk")];
        assert_eq!(toggle_task(&mut tasks, "1", now()).unwrap(), None);
        assert!(tasks[0].is_completed);
        assert_eq!(toggle_task(&mut tasks, "1", now()).unwrap(), None);
        assert!(!tasks[0].is_completed);
    }

    #[test]
    fn test_completing_recurring_task_spawns_successor() {
        let mut tasks = vec![recurring("1", "Water plants", Recurrence::Daily)];
        let spawned = toggle_task(&mut tasks, "1", now()).unwrap();
        assert_eq!(spawned, Some("Water plants (Recurring)".to_string()));
        assert_eq!(tasks.len(), 2);
        // Successor sits at the top, incomplete, due one day later
        assert_eq!(tasks[0].title, "Water plants (Recurring)");
        assert!(!tasks[0].is_completed);
        assert_eq!(tasks[0].due_date, Some(now() + Duration::days(1)));
        assert_eq!(tasks[0].recurrence, Recurrence::Daily);
        assert_ne!(tasks[0].id, tasks[1].id);
        // The completed original stays
        assert!(tasks[1].is_completed);
    }

    #[test]
    fn test_weekly_and_monthly_intervals() {
        let mut tasks = vec![recurring("1", "Review budget", Recurrence::Weekly)];
        toggle_task(&mut tasks, "1", now()).unwrap();
        assert_eq!(tasks[0].due_date, Some(now() + Duration::days(7)));

        let mut tasks = vec![recurring("1", "Pay rent", Recurrence::Monthly)];
        toggle_task(&mut tasks, "1", now()).unwrap();
        assert_eq!(
            tasks[0].due_date,
            Some(Local.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_uncompleting_never_spawns() {
        let mut done = recurring("1", "Water plants", Recurrence::Daily);
        done.is_completed = true;
        let mut tasks = vec![done];
        assert_eq!(toggle_task(&mut tasks, "1", now()).unwrap(), None);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_undated_recurring_task_never_spawns() {
        let mut t = task("1", "Stretch");
        t.recurrence = Recurrence::Daily;
        let mut tasks = vec![t];
        assert_eq!(toggle_task(&mut tasks, "1", now()).unwrap(), None);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut tasks = vec![task("1", "Old title"), task("2", "Other")];
        let mut updated = tasks[0].clone();
        updated.title = "New title".to_string();
        updated.priority = Priority::High;
        update_task(&mut tasks, updated).unwrap();
        assert_eq!(tasks[0].title, "New title");
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[1].title, "Other");
    }

    #[test]
    fn test_apply_none_is_noop() {
        let mut tasks = vec![task("1", "Only")];
        apply(&mut tasks, TaskAction::None, now()).unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_stats() {
        let mut done = task("1", "A");
        done.is_completed = true;
        let tasks = vec![done, task("2", "B"), task("3", "C")];
        let s = stats(&tasks);
        assert_eq!((s.total, s.active, s.completed), (3, 2, 1));
    }
}
