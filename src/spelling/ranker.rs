//! Tier selection, ranking and probability normalization.
//!
//! Tiers are consulted as a strict priority cascade rather than merged
//! wholesale:
//!
//! 1. short words with any distance-1 match use distance 1 alone,
//! 2. otherwise distance 1 and 2 are merged when both have matches,
//! 3. otherwise distance 2 is used when it has matches,
//! 4. otherwise distance 3 is generated unless the caller asked for the
//!    limited mode, in which case nothing is returned.
//!
//! Probabilities are each entry's score over the total of the whole selected
//! tier, so the truncated result may sum to less than one.

use serde::{Deserialize, Serialize};

use crate::config::SpellConfig;
use crate::spelling::scorer::{CandidateScorer, sort_by_score};

/// A proposed correction with its normalized probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The suggested word.
    pub word: String,
    /// Share of the selected tier's total score, rounded.
    pub probability: f64,
}

impl Correction {
    /// Create a new correction.
    pub fn new(word: String, probability: f64) -> Self {
        Correction { word, probability }
    }
}

/// Which branch of the cascade produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedTier {
    /// Distance 1 only, for short words.
    Short,
    /// Union of distance 1 and distance 2.
    Merged,
    /// Distance 2 only.
    Second,
    /// Distance 3, generated on demand.
    Third,
    /// No candidates, or distance 3 was skipped in limited mode.
    None,
}

/// Outcome of the tier cascade for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Branch that produced the candidates.
    pub tier: SelectedTier,
    /// Sum of all scores in the selected tier before truncation.
    pub total: u64,
    /// Best candidates, score descending then word ascending.
    pub ranked: Vec<(String, u64)>,
}

impl Selection {
    fn empty() -> Self {
        Selection {
            tier: SelectedTier::None,
            total: 0,
            ranked: Vec::new(),
        }
    }

    fn from_sorted(tier: SelectedTier, mut sorted: Vec<(String, u64)>, limit: usize) -> Self {
        let total = sorted
            .iter()
            .fold(0u64, |acc, (_, score)| acc.saturating_add(*score));
        sorted.truncate(limit);
        Selection {
            tier,
            total,
            ranked: sorted,
        }
    }

    /// Whether the cascade found nothing to propose.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Normalize scores into probabilities rounded to `precision` decimals.
    /// A zero total yields no corrections.
    pub fn into_corrections(self, precision: u32) -> Vec<Correction> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        self.ranked
            .into_iter()
            .map(|(word, score)| Correction::new(word, round_to(score as f64 / total, precision)))
            .collect()
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Applies the tier cascade on top of a [`CandidateScorer`].
#[derive(Debug, Clone, Copy)]
pub struct TierRanker<'a> {
    scorer: CandidateScorer<'a>,
    max_results: usize,
    short_word_len: usize,
}

impl<'a> TierRanker<'a> {
    /// Create a ranker using the limits in `config`.
    pub fn new(scorer: CandidateScorer<'a>, config: &SpellConfig) -> Self {
        TierRanker {
            scorer,
            max_results: config.max_results,
            short_word_len: config.short_word_len,
        }
    }

    /// Run the cascade for `word`. Distance 2 is only generated when the
    /// short-word branch does not apply, and distance 3 only when neither
    /// cheaper tier matched and `limited` is false.
    pub fn select(&self, word: &str, limited: bool) -> Selection {
        let tier1 = self.scorer.found_1away(word);
        if word.chars().count() < self.short_word_len && !tier1.is_empty() {
            return Selection::from_sorted(
                SelectedTier::Short,
                sort_by_score(tier1),
                self.max_results,
            );
        }

        let tier2 = self.scorer.found_2away(word);
        if !tier1.is_empty() && !tier2.is_empty() {
            let mut merged = tier2;
            // Distance-1 scores take precedence for words found in both.
            merged.extend(tier1);
            Selection::from_sorted(SelectedTier::Merged, sort_by_score(merged), self.max_results)
        } else if !tier2.is_empty() {
            Selection::from_sorted(SelectedTier::Second, sort_by_score(tier2), self.max_results)
        } else if !limited {
            let tier3 = self.scorer.found_3away(word);
            if tier3.is_empty() {
                return Selection::empty();
            }
            Selection::from_sorted(SelectedTier::Third, tier3, self.max_results)
        } else {
            Selection::empty()
        }
    }
}
