//! The natural-language assistant: maps a free-text utterance (typed or
//! transcribed speech, English or Roman-Urdu mixed) and a snapshot of the
//! task list to a structured action plus a reply string.
//!
//! The interpreter is pure and synchronous. It never mutates the snapshot
//! and never fails: unrecognized input comes back as [`TaskAction::None`]
//! with an explanatory response.

pub mod intent;
pub mod lexicon;
pub mod resolver;

pub use lexicon::Lexicon;

use chrono::{DateTime, Local};

use crate::model::config::AppConfig;
use crate::model::task::Task;

/// The action a command resolved to. The caller owns the task list and is
/// responsible for applying this to it (see `ops::store_ops::apply`).
#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
    /// Insert a fully-formed new task
    Add { task: Task },
    /// Remove the task with this id
    Delete { target: String },
    /// Flip completion on the task with this id
    Toggle { target: String },
    /// Replace the task with this id by the given copy
    Update { target: String, task: Task },
    /// No mutation; display the response only
    None,
}

impl TaskAction {
    /// Short lowercase name of the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskAction::Add { .. } => "add",
            TaskAction::Delete { .. } => "delete",
            TaskAction::Toggle { .. } => "toggle",
            TaskAction::Update { .. } => "update",
            TaskAction::None => "none",
        }
    }
}

/// One interpreted command: the action to perform and what to tell the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub action: TaskAction,
    /// Confirmation or explanation, always non-empty
    pub response: String,
}

impl Reply {
    /// A no-action reply carrying only a message.
    pub fn none(response: impl Into<String>) -> Self {
        Reply {
            action: TaskAction::None,
            response: response.into(),
        }
    }
}

/// Everything an intent rule gets to look at.
pub(crate) struct CommandInput<'a> {
    /// The utterance with its original casing (titles are extracted from it)
    pub raw: &'a str,
    /// The lower-cased utterance (triggers match against it)
    pub lower: &'a str,
    pub tasks: &'a [Task],
    pub now: DateTime<Local>,
}

/// The command interpreter, holding the trigger vocabulary and the
/// assistant's display name.
#[derive(Debug, Clone)]
pub struct Assistant {
    pub lexicon: Lexicon,
    pub name: String,
}

impl Default for Assistant {
    fn default() -> Self {
        Assistant {
            lexicon: Lexicon::default(),
            name: "Todo Assistant".to_string(),
        }
    }
}

impl Assistant {
    pub fn from_config(config: &AppConfig) -> Self {
        Assistant {
            lexicon: config.lexicon.clone(),
            name: config.assistant.name.clone(),
        }
    }

    /// Interpret an utterance against a task snapshot, stamping new tasks
    /// and due dates with the current time.
    pub fn interpret(&self, utterance: &str, tasks: &[Task]) -> Reply {
        self.interpret_at(utterance, tasks, Local::now())
    }

    /// Interpret with an explicit "now": deterministic, for tests and
    /// callers that batch commands against one instant.
    pub fn interpret_at(&self, utterance: &str, tasks: &[Task], now: DateTime<Local>) -> Reply {
        let lower = utterance.to_lowercase();
        let input = CommandInput {
            raw: utterance,
            lower: &lower,
            tasks,
            now,
        };
        intent::dispatch(self, &input)
    }
}

/// Interpret `utterance` against `tasks` with the stock vocabulary.
pub fn interpret(utterance: &str, tasks: &[Task]) -> Reply {
    Assistant::default().interpret(utterance, tasks)
}
