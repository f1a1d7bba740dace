//! Intent rules: an ordered table of (trigger, handler) pairs evaluated
//! first-match-wins over the utterance.

use chrono::Duration;
use uuid::Uuid;

use crate::assistant::lexicon::Lexicon;
use crate::assistant::resolver;
use crate::assistant::{Assistant, CommandInput, Reply, TaskAction};
use crate::model::task::{Priority, Recurrence, Task};
use crate::util::text;

/// Tag marking tasks created by the assistant
pub const CREATED_TAG: &str = "AI-Created";
/// Description marking tasks created by the assistant
pub const CREATED_DESCRIPTION: &str = "Created via AI Assistant";

const FALLBACK_RESPONSE: &str =
    "I didn't quite catch that. Try saying 'Add a task' or 'Delete grocery'.";

type Rule = fn(&Assistant, &CommandInput<'_>) -> Option<Reply>;

/// Rule order is significant: only the first rule that yields a reply runs.
/// A rule returns None when its trigger doesn't fire, and, for the
/// priority rule, when no target resolves (see `priority`).
const RULES: &[Rule] = &[add, delete, complete, reschedule, priority, greeting];

/// Run the rule table over one utterance.
pub(super) fn dispatch(assistant: &Assistant, input: &CommandInput<'_>) -> Reply {
    RULES
        .iter()
        .find_map(|rule| rule(assistant, input))
        .unwrap_or_else(|| Reply::none(FALLBACK_RESPONSE))
}

// ---------------------------------------------------------------------------
// Rule 1: add
// ---------------------------------------------------------------------------

fn add(assistant: &Assistant, input: &CommandInput<'_>) -> Option<Reply> {
    let lex = &assistant.lexicon;
    let triggered = lex
        .add_lead_ins
        .iter()
        .any(|w| input.lower.starts_with(w.as_str()))
        || Lexicon::contains_any(input.lower, &lex.add_triggers);
    if !triggered {
        return None;
    }

    // Title pipeline, in fixed order: lead phrases, tail phrase, priority
    // keywords, date keywords, whitespace normalization. Later steps see the
    // output of earlier ones.
    let mut title = input.raw.to_string();

    // Strip lead phrases repeatedly: "add buy milk" → "buy milk" → "milk"
    loop {
        let mut stripped = false;
        for phrase in &lex.add_lead_strips {
            if phrase.is_empty() {
                continue;
            }
            if let Some(rest) = text::strip_prefix_ci(&title, phrase) {
                title = rest.trim_start().to_string();
                stripped = true;
                break;
            }
        }
        if !stripped {
            break;
        }
    }

    for phrase in &lex.add_tail_strips {
        if let Some(rest) = text::strip_suffix_ci(&title, phrase) {
            title = rest.trim_end().to_string();
            break;
        }
    }

    let mut priority = Priority::Medium;
    if Lexicon::contains_any(input.lower, &lex.high_words) {
        priority = Priority::High;
        for pat in &lex.high_strips {
            title = text::remove_all_ci(&title, pat);
        }
    } else if Lexicon::contains_any(input.lower, &lex.low_words) {
        priority = Priority::Low;
        for pat in &lex.low_strips {
            title = text::remove_all_ci(&title, pat);
        }
    }

    let mut due_date = None;
    if Lexicon::contains_any(input.lower, &lex.tomorrow_words) {
        due_date = Some(input.now + Duration::days(1));
        for word in &lex.tomorrow_words {
            title = text::remove_all_ci(&title, word);
        }
    }

    let mut title = text::collapse_whitespace(&title);
    if title.is_empty() {
        title = "New Task".to_string();
    }
    let title = text::capitalize_first(&title);

    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: title.clone(),
        description: CREATED_DESCRIPTION.to_string(),
        is_completed: false,
        priority,
        tags: vec![CREATED_TAG.to_string()],
        due_date,
        recurrence: Recurrence::None,
        created_at: input.now,
    };

    Some(Reply {
        action: TaskAction::Add { task },
        response: format!("I've added \"{}\" to your list.", title),
    })
}

// ---------------------------------------------------------------------------
// Rule 2: delete
// ---------------------------------------------------------------------------

fn delete(assistant: &Assistant, input: &CommandInput<'_>) -> Option<Reply> {
    let lex = &assistant.lexicon;
    if !Lexicon::contains_any(input.lower, &lex.delete_triggers) {
        return None;
    }
    Some(match resolver::resolve(input.lower, input.tasks, lex) {
        Some(task) => Reply {
            action: TaskAction::Delete {
                target: task.id.clone(),
            },
            response: format!("Deleted task: \"{}\".", task.title),
        },
        None => Reply::none("I couldn't find a task with that name to delete."),
    })
}

// ---------------------------------------------------------------------------
// Rule 3: complete
// ---------------------------------------------------------------------------

fn complete(assistant: &Assistant, input: &CommandInput<'_>) -> Option<Reply> {
    let lex = &assistant.lexicon;
    if !Lexicon::contains_any(input.lower, &lex.complete_triggers) {
        return None;
    }
    Some(match resolver::resolve(input.lower, input.tasks, lex) {
        Some(task) if task.is_completed => {
            Reply::none(format!("\"{}\" is already completed.", task.title))
        }
        Some(task) => Reply {
            action: TaskAction::Toggle {
                target: task.id.clone(),
            },
            response: format!("Great job! Marked \"{}\" as complete.", task.title),
        },
        None => Reply::none("Which task matches that description?"),
    })
}

// ---------------------------------------------------------------------------
// Rule 4: reschedule
// ---------------------------------------------------------------------------

fn reschedule(assistant: &Assistant, input: &CommandInput<'_>) -> Option<Reply> {
    let lex = &assistant.lexicon;
    if !Lexicon::contains_any(input.lower, &lex.reschedule_triggers) {
        return None;
    }
    Some(match resolver::resolve(input.lower, input.tasks, lex) {
        Some(task) => {
            let mut updated = task.clone();
            updated.due_date = Some(input.now + Duration::days(1));
            Reply {
                action: TaskAction::Update {
                    target: task.id.clone(),
                    task: updated,
                },
                response: format!("Rescheduled \"{}\" to tomorrow.", task.title),
            }
        }
        None => Reply::none("I couldn't identify which task to reschedule."),
    })
}

// ---------------------------------------------------------------------------
// Rule 5: priority change
// ---------------------------------------------------------------------------

fn priority(assistant: &Assistant, input: &CommandInput<'_>) -> Option<Reply> {
    let lex = &assistant.lexicon;
    if !Lexicon::contains_any(input.lower, &lex.priority_triggers) {
        return None;
    }
    // No resolvable target yields nothing: evaluation falls through to the
    // greeting/fallback rules instead of reporting "not found".
    let task = resolver::resolve(input.lower, input.tasks, lex)?;

    let new_priority = if input.lower.contains("high") {
        Priority::High
    } else if input.lower.contains("low") {
        Priority::Low
    } else {
        Priority::Medium
    };

    let mut updated = task.clone();
    updated.priority = new_priority;
    Some(Reply {
        action: TaskAction::Update {
            target: task.id.clone(),
            task: updated,
        },
        response: format!("Updated \"{}\" priority to {}.", task.title, new_priority),
    })
}

// ---------------------------------------------------------------------------
// Rule 6: greeting
// ---------------------------------------------------------------------------

fn greeting(assistant: &Assistant, input: &CommandInput<'_>) -> Option<Reply> {
    let lex = &assistant.lexicon;
    if !Lexicon::contains_any(input.lower, &lex.greeting_triggers) {
        return None;
    }
    Some(Reply::none(format!(
        "Hello! I am your {}. You can ask me to add, complete, or delete tasks.",
        assistant.name
    )))
}
