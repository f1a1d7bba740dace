use serde::Serialize;

use crate::assistant::{Reply, TaskAction};
use crate::model::task::{Priority, Task};
use crate::ops::search::MatchField;
use crate::ops::store_ops::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ReplyJson<'a> {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<&'a Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a str>,
    pub response: &'a str,
}

impl<'a> ReplyJson<'a> {
    pub fn new(reply: &'a Reply) -> Self {
        let (task, target) = match &reply.action {
            TaskAction::Add { task } => (Some(task), None),
            TaskAction::Delete { target } => (None, Some(target.as_str())),
            TaskAction::Toggle { target } => (None, Some(target.as_str())),
            TaskAction::Update { target, task } => (Some(task), Some(target.as_str())),
            TaskAction::None => (None, None),
        };
        ReplyJson {
            action: reply.action.kind(),
            task,
            target,
            response: &reply.response,
        }
    }
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl From<Stats> for StatsJson {
    fn from(s: Stats) -> Self {
        StatsJson {
            total: s.total,
            active: s.active,
            completed: s.completed,
        }
    }
}

#[derive(Serialize)]
pub struct SearchHitJson<'a> {
    pub id: &'a str,
    pub field: &'static str,
    pub title: &'a str,
    pub spans: Vec<std::ops::Range<usize>>,
}

pub fn field_name(field: MatchField) -> &'static str {
    match field {
        MatchField::Title => "title",
        MatchField::Description => "description",
        MatchField::Tag => "tag",
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// First eight characters of an id, enough to address a task on the CLI.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// One task as a list line: checkbox, title, priority/due/tag annotations,
/// short id.
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.is_completed { "[x]" } else { "[ ]" };
    let mut line = format!("{} {}", checkbox, task.title);
    match task.priority {
        Priority::High => line.push_str("  !high"),
        Priority::Low => line.push_str("  !low"),
        Priority::Medium => {}
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!("  due {}", due.format("%Y-%m-%d")));
    }
    for tag in &task.tags {
        line.push_str(&format!("  #{}", tag));
    }
    line.push_str(&format!("  ({})", short_id(&task.id)));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_task_line() {
        let mut task = Task::new(
            "3f2a9b10-aaaa-bbbb-cccc-000000000000".into(),
            "Buy milk".into(),
            Priority::High,
            Local::now(),
        );
        task.due_date = Some(Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap());
        task.tags = vec!["errand".into()];
        assert_eq!(
            task_line(&task),
            "[ ] Buy milk  !high  due 2025-06-02  #errand  (3f2a9b10)"
        );
    }

    #[test]
    fn test_reply_json_shapes() {
        let reply = Reply::none("nothing to do");
        let json = serde_json::to_string(&ReplyJson::new(&reply)).unwrap();
        assert_eq!(json, r#"{"action":"none","response":"nothing to do"}"#);

        let reply = Reply {
            action: TaskAction::Delete {
                target: "t1".into(),
            },
            response: "Deleted task: \"X\".".into(),
        };
        let json = serde_json::to_string(&ReplyJson::new(&reply)).unwrap();
        assert!(json.contains(r#""action":"delete""#));
        assert!(json.contains(r#""target":"t1""#));
        assert!(!json.contains(r#""task""#));
    }
}
