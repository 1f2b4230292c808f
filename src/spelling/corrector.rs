//! The correction API: a read-only model plus configuration.

use ahash::AHashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SpellConfig;
use crate::corpus::tokenize;
use crate::spelling::frequency::FrequencyModel;
use crate::spelling::ranker::{Correction, Selection, TierRanker};
use crate::spelling::scorer::CandidateScorer;

/// Corrections proposed for one word of a longer text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCorrection {
    /// The unknown word as it appeared after tokenization.
    pub word: String,
    /// Ranked corrections; empty when nothing was found.
    pub corrections: Vec<Correction>,
}

/// Statistics about the loaded model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of distinct known words.
    pub known_words: usize,
    /// Sum of all smoothed counts.
    pub total_count: u64,
    /// Most frequent words.
    pub top_words: Vec<(String, u64)>,
}

/// Spelling corrector over an immutable [`FrequencyModel`].
///
/// Every request is an independent computation. The corrector holds no
/// mutable state, so it can be shared between threads by reference.
#[derive(Debug, Clone)]
pub struct Corrector {
    model: FrequencyModel,
    config: SpellConfig,
}

impl Corrector {
    /// Create a corrector with the default configuration.
    pub fn new(model: FrequencyModel) -> Self {
        Self::with_config(model, SpellConfig::default())
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(model: FrequencyModel, config: SpellConfig) -> Self {
        log::debug!(
            "Corrector ready: {} known words, max {} results",
            model.len(),
            config.max_results
        );
        Corrector { model, config }
    }

    /// Ranked corrections for `word`, generating distance-3 candidates if
    /// nothing closer matches.
    pub fn correct(&self, word: &str) -> Vec<Correction> {
        self.select(word, false).into_corrections(self.config.precision)
    }

    /// Ranked corrections for `word` without ever generating distance-3
    /// candidates. Empty when nothing within two edits is known.
    pub fn correct_bounded(&self, word: &str) -> Vec<Correction> {
        self.select(word, true).into_corrections(self.config.precision)
    }

    /// Run the tier cascade and return the raw selection.
    pub fn select(&self, word: &str, limited: bool) -> Selection {
        let selection = self.ranker().select(word, limited);
        log::trace!(
            "'{}' -> {:?} tier, {} candidates, total {}",
            word,
            selection.tier,
            selection.ranked.len(),
            selection.total
        );
        selection
    }

    /// Correct many words in parallel. Results keep the input order.
    pub fn correct_batch<S>(&self, words: &[S], limited: bool) -> Vec<Vec<Correction>>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| {
                self.select(word.as_ref(), limited)
                    .into_corrections(self.config.precision)
            })
            .collect()
    }

    /// Tokenize `text` and propose corrections for every unknown word, in
    /// order of first appearance.
    pub fn correct_text(&self, text: &str, limited: bool) -> Vec<TextCorrection> {
        self.correct_tokens(&tokenize(text), limited)
    }

    /// Propose corrections for every unknown token, each distinct token once,
    /// in order of first appearance.
    pub fn correct_tokens<S: AsRef<str>>(&self, tokens: &[S], limited: bool) -> Vec<TextCorrection> {
        let mut seen = AHashSet::new();
        let mut unknown: Vec<String> = Vec::new();
        for token in tokens {
            let word = token.as_ref();
            if !self.model.contains(word) && seen.insert(word) {
                unknown.push(word.to_string());
            }
        }

        let corrections = self.correct_batch(unknown.as_slice(), limited);
        unknown
            .into_iter()
            .zip(corrections)
            .map(|(word, corrections)| TextCorrection { word, corrections })
            .collect()
    }

    /// Check if a word is in the model.
    pub fn is_known(&self, word: &str) -> bool {
        self.model.contains(word)
    }

    /// The underlying frequency model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &SpellConfig {
        &self.config
    }

    /// Summary of the model with the `top` most frequent words.
    pub fn stats(&self, top: usize) -> CorrectorStats {
        CorrectorStats {
            known_words: self.model.len(),
            total_count: self.model.total_count(),
            top_words: self.model.most_frequent(top),
        }
    }

    fn ranker(&self) -> TierRanker<'_> {
        let scorer = CandidateScorer::new(&self.model, self.config.weights);
        TierRanker::new(scorer, &self.config)
    }
}
