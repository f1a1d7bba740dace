use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, Months};
use serde::{Deserialize, Serialize};

/// Task urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("unknown priority '{}' (high, medium, low)", s)),
        }
    }
}

/// How often a task repeats once completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Default for Recurrence {
    fn default() -> Self {
        Recurrence::None
    }
}

impl Recurrence {
    /// Next due date after `from` for this interval. `None` for
    /// non-recurring tasks, or if the month addition overflows.
    pub fn advance(self, from: DateTime<Local>) -> Option<DateTime<Local>> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => Some(from + Duration::days(1)),
            Recurrence::Weekly => Some(from + Duration::days(7)),
            Recurrence::Monthly => from.checked_add_months(Months::new(1)),
        }
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Recurrence::None),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            _ => Err(format!(
                "unknown recurrence '{}' (none, daily, weekly, monthly)",
                s
            )),
        }
    }
}

/// A task with all its fields.
///
/// Serialized field names are camelCase to stay compatible with the JSON
/// the web frontend keeps in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque stable identifier, unique across the list, never reused
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,
    /// Completion state
    pub is_completed: bool,
    pub priority: Priority,
    /// Tags, order not significant
    #[serde(default)]
    pub tags: Vec<String>,
    /// Due date; absent means no due date
    #[serde(default)]
    pub due_date: Option<DateTime<Local>>,
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Creation timestamp, used only for ordering
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a new incomplete, non-recurring task with the given fields.
    pub fn new(id: String, title: String, priority: Priority, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            title,
            description: String::new(),
            is_completed: false,
            priority,
            tags: Vec::new(),
            due_date: None,
            recurrence: Recurrence::None,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_recurrence_advance() {
        let from = Local.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap();
        assert_eq!(Recurrence::None.advance(from), None);
        assert_eq!(
            Recurrence::Daily.advance(from),
            Some(Local.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap())
        );
        assert_eq!(
            Recurrence::Weekly.advance(from),
            Some(Local.with_ymd_and_hms(2025, 2, 7, 9, 0, 0).unwrap())
        );
        // Jan 31 + 1 month clamps to Feb 28
        assert_eq!(
            Recurrence::Monthly.advance(from),
            Some(Local.with_ymd_and_hms(2025, 2, 28, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_task_json_field_names() {
        let created = Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let task = Task::new("t1".into(), "Buy milk".into(), Priority::High, created);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"isCompleted\":false"));
        assert!(json.contains("\"dueDate\":null"));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"priority\":\"High\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
