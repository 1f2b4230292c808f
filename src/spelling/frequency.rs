//! Word frequency model built from a reference corpus.

use ahash::AHashMap;

/// Count reported for any word that was never observed.
pub const DEFAULT_COUNT: u64 = 1;

/// A read-only mapping from known word to smoothed occurrence count.
///
/// Every observed word starts at an implicit count of [`DEFAULT_COUNT`] and is
/// incremented once per occurrence, so a word seen once has count 2. Lookups
/// of unknown words return [`DEFAULT_COUNT`], never zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    counts: AHashMap<String, u64>,
    total_count: u64,
}

impl FrequencyModel {
    /// Build a model from a sequence of already filtered, lowercase words.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), DEFAULT_COUNT + 1);
                }
            }
        }
        Self::with_counts(counts)
    }

    /// Build a model from explicit `(word, count)` pairs, such as a saved
    /// frequency file. Counts are taken as-is; zero is raised to
    /// [`DEFAULT_COUNT`]. Repeated words keep the last count.
    pub fn from_counts<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let counts = pairs
            .into_iter()
            .map(|(word, count)| (word.into(), count.max(DEFAULT_COUNT)))
            .collect();
        Self::with_counts(counts)
    }

    fn with_counts(counts: AHashMap<String, u64>) -> Self {
        let total_count = counts.values().sum();
        FrequencyModel {
            counts,
            total_count,
        }
    }

    /// Smoothed count of `word`, or [`DEFAULT_COUNT`] if it is unknown.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(DEFAULT_COUNT)
    }

    /// Stored count of `word`, if it was observed.
    pub fn count(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Check if `word` was observed in the corpus.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct known words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the model knows no words at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all stored counts.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Iterate over all known words and their counts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The most frequent words, count descending, ties ordered by word.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(limit)
            .map(|(word, count)| (word.to_string(), count))
            .collect()
    }
}
