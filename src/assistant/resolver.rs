//! Fuzzy target resolution: picks the task an utterance refers to.

use crate::assistant::lexicon::Lexicon;
use crate::model::task::Task;

/// Find the task that best matches the words of a (lower-cased) utterance.
///
/// The utterance is split on whitespace; stop words and tokens of one or
/// two characters are discarded. Each remaining term scores one point per
/// task whose title contains it (case-insensitive substring). The strictly
/// highest score wins, earliest task first on ties. A score of zero never
/// matches: at least one term must appear in some title.
pub fn resolve<'a>(lower: &str, tasks: &'a [Task], lexicon: &Lexicon) -> Option<&'a Task> {
    let terms: Vec<&str> = lower
        .split_whitespace()
        .filter(|w| !lexicon.stop_words.iter().any(|s| s == w))
        .filter(|w| w.chars().count() > 2)
        .collect();

    if terms.is_empty() {
        return None;
    }

    let mut best: Option<&Task> = None;
    let mut best_score = 0;

    for task in tasks {
        let title = task.title.to_lowercase();
        let score = terms.iter().filter(|term| title.contains(**term)).count();
        if score > best_score {
            best_score = score;
            best = Some(task);
        }
    }

    best
}
