use clap::{Args, Parser, Subcommand};

use crate::model::task::{Priority, Recurrence};
use crate::ops::filter::{SortOption, StatusFilter};

#[derive(Parser)]
#[command(name = "prism", about = concat!("[*] prism v", env!("CARGO_PKG_VERSION"), " - your tasks, typed or spoken"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store directory
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Talk to the assistant interactively (default)
    Chat,
    /// Send the assistant one command, e.g. `prism ask delete grocery`
    Ask(AskArgs),
    /// List tasks
    List(ListArgs),
    /// Add a task directly, bypassing the assistant
    Add(AddArgs),
    /// Mark a task completed
    Done(DoneArgs),
    /// Permanently delete a task
    Delete(DeleteArgs),
    /// Search tasks by regex
    Search(SearchArgs),
    /// Show task statistics
    Stats,
}

// ---------------------------------------------------------------------------
// Assistant args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AskArgs {
    /// The utterance; quoting is optional
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

// ---------------------------------------------------------------------------
// List args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Completion filter: all, active, completed
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Only tasks with this priority (high, medium, low)
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Sort order: date-added, priority, due-date, alphabetical
    #[arg(long, default_value = "date-added")]
    pub sort: SortOption,

    /// Substring filter over title, description, and tags
    #[arg(long)]
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Direct task manipulation args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title; quoting is optional
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,

    /// Priority (high, medium, low)
    #[arg(long, default_value = "medium")]
    pub priority: Priority,

    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,

    /// Tag (repeatable)
    #[arg(long = "tag", action = clap::ArgAction::Append)]
    pub tags: Vec<String>,

    /// Recurrence (none, daily, weekly, monthly)
    #[arg(long, default_value = "none")]
    pub recurrence: Recurrence,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task id (a unique prefix is enough)
    pub id: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task id (a unique prefix is enough)
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern
    pub pattern: String,
}
