//! Text utilities for identifier checks and typo matching.

/// Check if a character may start an identifier.
///
/// Uses Unicode Standard Annex #31 rules, plus `_`.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character is considered part of a word (identifier).
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check whether `text` is a well-formed identifier.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_word_character),
        _ => false,
    }
}

/// Levenshtein edit distance between two strings, counted in characters.
///
/// # Example
/// ```
/// use tonto::core::text_utils::levenshtein;
///
/// assert_eq!(levenshtein("kind", "knd"), 1);
/// assert_eq!(levenshtein("subkind", "sbukind"), 2);
/// assert_eq!(levenshtein("", "role"), 4);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}

/// True when `a` and `b` differ but are within `max_distance` edits.
///
/// Comparison is case-sensitive: `Kind` vs `kind` counts one edit.
pub fn is_similar(a: &str, b: &str, max_distance: usize) -> bool {
    if a == b {
        return false;
    }
    // Length difference is a lower bound on the distance
    if a.chars().count().abs_diff(b.chars().count()) > max_distance {
        return false;
    }
    levenshtein(a, b) <= max_distance
}

/// Find the closest candidate within `max_distance` edits.
///
/// Ties keep the earliest candidate, so callers control preference by
/// ordering their vocabulary.
pub fn closest_match<'c, I>(word: &str, candidates: I, max_distance: usize) -> Option<&'c str>
where
    I: IntoIterator<Item = &'c str>,
{
    let mut best: Option<(&'c str, usize)> = None;
    for candidate in candidates {
        if candidate == word {
            continue;
        }
        if candidate.chars().count().abs_diff(word.chars().count()) > max_distance {
            continue;
        }
        let distance = levenshtein(word, candidate);
        if distance > max_distance {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(candidate, _)| candidate)
}
