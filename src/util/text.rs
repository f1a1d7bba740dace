/// Byte length of the prefix of `text` that matches `pat` ignoring case,
/// or None if `text` does not start with `pat`.
fn ci_prefix_len(text: &str, pat: &str) -> Option<usize> {
    let mut tc = text.char_indices();
    let mut pc = pat.chars();
    loop {
        let Some(p) = pc.next() else {
            // Pattern exhausted; the next char index is the matched length
            return Some(tc.next().map_or(text.len(), |(i, _)| i));
        };
        let (_, t) = tc.next()?;
        if !t.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
}

/// If `text` starts with `pat` ignoring case, return the remainder.
pub fn strip_prefix_ci<'a>(text: &'a str, pat: &str) -> Option<&'a str> {
    ci_prefix_len(text, pat).map(|n| &text[n..])
}

/// If `text` ends with `pat` ignoring case, return the part before it.
pub fn strip_suffix_ci<'a>(text: &'a str, pat: &str) -> Option<&'a str> {
    if pat.is_empty() {
        return Some(text);
    }
    let mut tc = text.char_indices().rev();
    let mut pc = pat.chars().rev();
    let mut start = text.len();
    loop {
        let Some(p) = pc.next() else {
            return Some(&text[..start]);
        };
        let (i, t) = tc.next()?;
        if !t.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
        start = i;
    }
}

/// Remove every occurrence of `pat` from `text`, ignoring case.
/// Matches are not restricted to word boundaries.
pub fn remove_all_ci(text: &str, pat: &str) -> String {
    if pat.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(n) = ci_prefix_len(rest, pat) {
            rest = &rest[n..];
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first character.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
