//! Integration tests for the tiered correction cascade.

use std::io::Write;

use tempfile::NamedTempFile;
use tierspell::corpus::{CorpusFormat, load_corpus, save_frequency_file};
use tierspell::prelude::*;
use tierspell::spelling::{edits1, edits2};

fn corrector(pairs: &[(&str, u64)]) -> Corrector {
    Corrector::new(FrequencyModel::from_counts(pairs.iter().copied()))
}

#[test]
fn test_teh_corrects_to_the() {
    let corrector = corrector(&[("the", 50)]);
    let corrections = corrector.correct("teh");

    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].word, "the");
    assert_eq!(corrections[0].probability, 1.0);
}

#[test]
fn test_known_words_rank_themselves_first() {
    let corrector = corrector(&[
        ("house", 2),
        ("horse", 40),
        ("mouse", 40),
        ("cat", 1),
        ("hat", 30),
    ]);

    for word in ["house", "cat", "hat"] {
        let corrections = corrector.correct(word);
        assert_eq!(corrections[0].word, word, "{word} should rank first");
    }
}

#[test]
fn test_union_of_first_and_second_tier() {
    // "helo" is one edit from "hello" and "help", two from "hold".
    let corrector = corrector(&[("hello", 10), ("help", 10), ("hold", 500)]);
    let selection = corrector.select("helo", false);

    assert_eq!(selection.tier, SelectedTier::Merged);
    let words: Vec<&str> = selection.ranked.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["hold", "hello", "help"]);
    assert_eq!(selection.ranked[0].1, 500 * 4);
    assert_eq!(selection.ranked[1].1, 10 * 95);
    assert_eq!(selection.total, 2000 + 950 + 950);
}

#[test]
fn test_short_word_ignores_second_tier() {
    // "hte" reaches "the" in one edit and "hates" would need two.
    let corrector = corrector(&[("the", 50), ("hates", 5000)]);
    let selection = corrector.select("hte", false);

    assert_eq!(selection.tier, SelectedTier::Short);
    assert_eq!(selection.ranked.len(), 1);
}

#[test]
fn test_bounded_mode_returns_empty() {
    let corrector = corrector(&[("dog", 3)]);

    let selection = corrector.select("cat", true);
    assert_eq!(selection.tier, SelectedTier::None);
    assert!(corrector.correct_bounded("cat").is_empty());

    // The unrestricted mode pays for the distance-3 search.
    assert_eq!(corrector.select("cat", false).tier, SelectedTier::Third);
}

#[test]
fn test_no_candidates_anywhere() {
    let corrector = corrector(&[]);
    assert!(corrector.correct("word").is_empty());
    assert!(corrector.correct_bounded("word").is_empty());
}

#[test]
fn test_truncation_and_tie_break() {
    let corrector = corrector(&[
        ("bat", 7),
        ("cat", 7),
        ("eat", 7),
        ("fat", 7),
        ("hat", 7),
        ("mat", 7),
        ("rat", 9),
    ]);
    let corrections = corrector.correct("zat");

    let words: Vec<&str> = corrections.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, vec!["rat", "bat", "cat", "eat", "fat"]);

    // Normalized against all seven candidates, not only the five returned.
    assert_eq!(corrections[0].probability, 0.176);
    assert_eq!(corrections[1].probability, 0.137);
    let sum: f64 = corrections.iter().map(|c| c.probability).sum();
    assert!(sum < 1.0);
}

#[test]
fn test_probabilities_are_rounded() {
    let corrector = corrector(&[("the", 2), ("then", 1)]);
    for correction in corrector.correct("thn") {
        let scaled = correction.probability * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&correction.probability));
    }
}

#[test]
fn test_edits2_is_union_of_edits1() {
    let word = "ox";
    let mut expected = std::collections::HashSet::new();
    for one_away in edits1(word) {
        expected.extend(edits1(&one_away));
    }

    let actual: std::collections::HashSet<String> = edits2(word).into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_custom_weights() {
    let mut config = SpellConfig::default();
    config.weights = TierWeights {
        weight_2away: 1000,
        ..TierWeights::default()
    };
    let model = FrequencyModel::from_counts([("hello", 10), ("hold", 10)]);
    let corrector = Corrector::with_config(model, config);

    let corrections = corrector.correct("helo");
    assert_eq!(corrections[0].word, "hold");
}

#[test]
fn test_corpus_to_corrections() {
    let mut corpus = NamedTempFile::new().unwrap();
    writeln!(
        corpus,
        "Spelling matters. Good spelling helps readers; bad spelling distracts them."
    )
    .unwrap();
    corpus.flush().unwrap();

    let model = load_corpus(corpus.path(), CorpusFormat::Text).unwrap();
    assert_eq!(model.get("spelling"), 4);

    let saved = NamedTempFile::new().unwrap();
    save_frequency_file(&model, saved.path()).unwrap();
    let reloaded = load_corpus(saved.path(), CorpusFormat::Frequency).unwrap();
    assert_eq!(reloaded.get("spelling"), 4);

    let corrector = Corrector::new(reloaded);
    let corrections = corrector.correct("speling");
    assert_eq!(corrections[0].word, "spelling");
    assert_eq!(corrections[0].probability, 1.0);
}
