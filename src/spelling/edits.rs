//! Candidate generation by single-character edits.
//!
//! A distance-1 edit is one deletion, one transposition of adjacent
//! characters, one substitution or one insertion. Distance 2 is the plain
//! composition of two distance-1 steps. Distance 3 is never collected into a
//! set: [`for_each_edit3`] walks it lazily because it typically spans millions
//! of strings.

use ahash::AHashSet;

/// Letters used for substitutions and insertions.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of distance-1 strings generated for a word of `len` characters
/// before duplicates collapse.
pub fn raw_edit_count(len: usize) -> usize {
    let alphabet = ALPHABET.len();
    len + len.saturating_sub(1) + alphabet * len + alphabet * (len + 1)
}

/// Visit every distance-1 edit of `word`, duplicates included.
///
/// The candidate is assembled in a reused buffer, so the visitor only sees a
/// borrowed `&str`. Substituting a letter with itself yields `word` back.
pub fn for_each_edit1<F>(word: &str, mut visit: F)
where
    F: FnMut(&str),
{
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();
    let len = bounds.len() - 1;
    let mut buf = String::with_capacity(word.len() + 4);

    // Deletions
    for i in 0..len {
        buf.clear();
        buf.push_str(&word[..bounds[i]]);
        buf.push_str(&word[bounds[i + 1]..]);
        visit(&buf);
    }

    // Transpositions
    for i in 0..len.saturating_sub(1) {
        buf.clear();
        buf.push_str(&word[..bounds[i]]);
        buf.push_str(&word[bounds[i + 1]..bounds[i + 2]]);
        buf.push_str(&word[bounds[i]..bounds[i + 1]]);
        buf.push_str(&word[bounds[i + 2]..]);
        visit(&buf);
    }

    // Substitutions
    for i in 0..len {
        for ch in ALPHABET.chars() {
            buf.clear();
            buf.push_str(&word[..bounds[i]]);
            buf.push(ch);
            buf.push_str(&word[bounds[i + 1]..]);
            visit(&buf);
        }
    }

    // Insertions
    for &at in &bounds {
        for ch in ALPHABET.chars() {
            buf.clear();
            buf.push_str(&word[..at]);
            buf.push(ch);
            buf.push_str(&word[at..]);
            visit(&buf);
        }
    }
}

/// All strings one edit away from `word`.
pub fn edits1(word: &str) -> AHashSet<String> {
    let mut edits = AHashSet::with_capacity(raw_edit_count(word.chars().count()));
    for_each_edit1(word, |candidate| {
        if !edits.contains(candidate) {
            edits.insert(candidate.to_string());
        }
    });
    edits
}

/// All strings reachable by applying [`edits1`] twice.
///
/// Distance-1 and distance-0 strings are included as side effects of the
/// overlapping edit space.
pub fn edits2(word: &str) -> AHashSet<String> {
    let mut edits = AHashSet::new();
    for one_away in edits1(word) {
        for_each_edit1(&one_away, |candidate| {
            if !edits.contains(candidate) {
                edits.insert(candidate.to_string());
            }
        });
    }
    edits
}

/// Visit `edits1(x)` for every `x` in `edits2(word)` without materializing
/// the distance-3 set. Candidates repeat; deduplication is up to the visitor.
pub fn for_each_edit3<F>(word: &str, mut visit: F)
where
    F: FnMut(&str),
{
    for two_away in edits2(word) {
        for_each_edit1(&two_away, &mut visit);
    }
}
