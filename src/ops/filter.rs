use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::task::{Priority, Task};

/// Completion filter for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(format!("unknown status '{}' (all, active, completed)", s)),
        }
    }
}

/// List sort orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Newest first
    #[default]
    DateAdded,
    /// High before Low
    Priority,
    /// Soonest first, undated tasks last
    DueDate,
    /// By title
    Alphabetical,
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date-added" => Ok(SortOption::DateAdded),
            "priority" => Ok(SortOption::Priority),
            "due-date" => Ok(SortOption::DueDate),
            "alphabetical" => Ok(SortOption::Alphabetical),
            _ => Err(format!(
                "unknown sort '{}' (date-added, priority, due-date, alphabetical)",
                s
            )),
        }
    }
}

/// A list view: filters applied first, then a stable sort.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Case-insensitive substring over title, description, and tags
    pub search: Option<String>,
    pub status: StatusFilter,
    /// Only tasks of exactly this priority
    pub priority: Option<Priority>,
    pub sort: SortOption,
}

pub fn filter_and_sort(tasks: &[Task], filters: &Filters) -> Vec<Task> {
    let mut result: Vec<Task> = tasks
        .iter()
        .filter(|t| match filters.status {
            StatusFilter::All => true,
            StatusFilter::Active => !t.is_completed,
            StatusFilter::Completed => t.is_completed,
        })
        .filter(|t| filters.priority.is_none_or(|p| t.priority == p))
        .filter(|t| match &filters.search {
            None => true,
            Some(q) => {
                let q = q.to_lowercase();
                t.title.to_lowercase().contains(&q)
                    || t.description.to_lowercase().contains(&q)
                    || t.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
            }
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| match filters.sort {
        SortOption::DateAdded => b.created_at.cmp(&a.created_at),
        SortOption::Priority => b.priority.cmp(&a.priority),
        SortOption::DueDate => match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(&y),
        },
        SortOption::Alphabetical => a.title.cmp(&b.title),
    });

    result
}
