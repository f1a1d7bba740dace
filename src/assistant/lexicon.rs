use serde::{Deserialize, Serialize};

/// The trigger vocabulary for every intent and field, English and Roman-Urdu
/// mixed. Kept as flat data so behavior is exactly reproducible and so
/// config.toml can override individual tables.
///
/// All entries are matched against the lower-cased utterance; tables are
/// expected to be lower-case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Words that mark an add command when the utterance starts with one
    pub add_lead_ins: Vec<String>,
    /// Leading phrases stripped (repeatedly) from the new task's title
    pub add_lead_strips: Vec<String>,
    /// Substrings anywhere in the utterance that mark an add command
    pub add_triggers: Vec<String>,
    /// Trailing phrases stripped once from the new task's title
    pub add_tail_strips: Vec<String>,
    /// Words that set a new task's priority to High
    pub high_words: Vec<String>,
    /// Phrases removed from the title when High matched, longest first
    pub high_strips: Vec<String>,
    /// Words that set a new task's priority to Low
    pub low_words: Vec<String>,
    /// Phrases removed from the title when Low matched, longest first
    pub low_strips: Vec<String>,
    /// Words that set the due date to tomorrow
    pub tomorrow_words: Vec<String>,
    pub delete_triggers: Vec<String>,
    pub complete_triggers: Vec<String>,
    pub reschedule_triggers: Vec<String>,
    pub priority_triggers: Vec<String>,
    pub greeting_triggers: Vec<String>,
    /// Command words ignored when matching an utterance against task titles
    pub stop_words: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            add_lead_ins: words(&["add", "create", "new", "remind me to", "buy"]),
            add_lead_strips: words(&["add", "create", "new task", "remind me to", "buy"]),
            add_triggers: words(&["shamil", "banao", "karna hai"]),
            add_tail_strips: words(&["shamil karein", "banao", "likho", "karna hai"]),
            high_words: words(&["high", "urgent", "important", "zaruri"]),
            high_strips: words(&["high priority", "high", "urgent", "important", "zaruri"]),
            low_words: words(&["low", "kam"]),
            low_strips: words(&["low priority", "low", "kam"]),
            tomorrow_words: words(&["tomorrow", "kal"]),
            delete_triggers: words(&["delete", "remove", "khatam", "hatao"]),
            complete_triggers: words(&["complete", "done", "finish", "mukammal", "ho gaya"]),
            reschedule_triggers: words(&["reschedule", "tomorrow", "kal"]),
            priority_triggers: words(&["priority"]),
            greeting_triggers: words(&["hello", "hi", "salam"]),
            stop_words: words(&[
                "delete",
                "remove",
                "complete",
                "mark",
                "as",
                "done",
                "task",
                "the",
                "my",
                "khatam",
                "karo",
                "mukammal",
                "reschedule",
                "priority",
                "change",
                "to",
                "high",
                "low",
            ]),
        }
    }
}

impl Lexicon {
    /// True if the lower-cased utterance contains any entry of `table`.
    pub(crate) fn contains_any(lower: &str, table: &[String]) -> bool {
        table.iter().any(|w| lower.contains(w.as_str()))
    }
}
