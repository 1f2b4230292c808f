//! Weighted scoring of known candidates, one function per edit-distance tier.

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::config::TierWeights;
use crate::spelling::edits::{edits1, edits2, for_each_edit3};
use crate::spelling::frequency::FrequencyModel;

/// Known candidates of one tier and their weighted scores.
pub type CandidateSet = AHashMap<String, u64>;

/// Orders candidates by score descending, then by word ascending.
pub fn compare_scored(a: &(String, u64), b: &(String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Turn a candidate set into a vector ordered with [`compare_scored`].
pub fn sort_by_score(candidates: CandidateSet) -> Vec<(String, u64)> {
    let mut sorted: Vec<(String, u64)> = candidates.into_iter().collect();
    sorted.sort_unstable_by(compare_scored);
    sorted
}

/// Scores generated candidates against a frequency model.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScorer<'a> {
    model: &'a FrequencyModel,
    weights: TierWeights,
}

impl<'a> CandidateScorer<'a> {
    /// Create a scorer over `model` with the given tier weights.
    pub fn new(model: &'a FrequencyModel, weights: TierWeights) -> Self {
        CandidateScorer { model, weights }
    }

    /// Known words one edit away, scored by `count × weight_1away`.
    pub fn found_1away(&self, word: &str) -> CandidateSet {
        let mut found = CandidateSet::new();
        for candidate in edits1(word) {
            if let Some(count) = self.model.count(&candidate) {
                found.insert(candidate, count.saturating_mul(self.weights.weight_1away));
            }
        }
        self.boost_original(word, &mut found);
        found
    }

    /// Known words two edits away, scored by `count × weight_2away`.
    pub fn found_2away(&self, word: &str) -> CandidateSet {
        let mut found = CandidateSet::new();
        for candidate in edits2(word) {
            if let Some(count) = self.model.count(&candidate) {
                found.insert(candidate, count.saturating_mul(self.weights.weight_2away));
            }
        }
        self.boost_original(word, &mut found);
        found
    }

    /// Known words three edits away, scored by `count × weight_3away` and
    /// already sorted.
    pub fn found_3away(&self, word: &str) -> Vec<(String, u64)> {
        let mut found = CandidateSet::new();
        let weight = self.weights.weight_3away;
        for_each_edit3(word, |candidate| {
            if found.contains_key(candidate) {
                return;
            }
            if let Some(count) = self.model.count(candidate) {
                found.insert(candidate.to_string(), count.saturating_mul(weight));
            }
        });
        self.boost_original(word, &mut found);
        sort_by_score(found)
    }

    /// A known input word that reappears among its own candidates has its
    /// tier score multiplied by `weight_0away`.
    fn boost_original(&self, word: &str, found: &mut CandidateSet) {
        if !self.model.contains(word) {
            return;
        }
        if let Some(score) = found.get_mut(word) {
            *score = score.saturating_mul(self.weights.weight_0away);
        }
    }
}
