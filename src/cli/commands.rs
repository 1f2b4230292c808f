//! Command implementations for tierspell CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpellConfig;
use crate::corpus::{builtin_sample, load_corpus, normalize_word, save_frequency_file, tokenize};
use crate::error::{Result, SpellError};
use crate::spelling::{Corrector, FrequencyModel};

/// Execute a CLI command.
pub fn execute_command(args: SpellArgs) -> Result<()> {
    let corrector = build_corrector(&args)?;

    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args, &corrector, &args),
        Command::Check(check_args) => check_text(check_args, &corrector, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &corrector, &args),
        Command::Export(export_args) => export_model(export_args, &corrector, &args),
    }
}

/// Load configuration and frequency model from the global options.
pub fn build_corrector(args: &SpellArgs) -> Result<Corrector> {
    let config = match &args.config {
        Some(path) => SpellConfig::load_from_file(path)?,
        None => SpellConfig::default(),
    };

    let model = match &args.corpus {
        Some(path) => load_corpus(path, args.corpus_format.into())?,
        None => {
            log::info!("No corpus given, using the built-in sample");
            builtin_sample()
        }
    };

    if model.is_empty() {
        log::warn!("Frequency model is empty; no corrections can be proposed");
    }

    Ok(Corrector::with_config(model, config))
}

/// Correct each word given on the command line.
fn correct_words(args: &CorrectArgs, corrector: &Corrector, cli_args: &SpellArgs) -> Result<()> {
    let words = args
        .words
        .iter()
        .map(|word| normalize_word(word))
        .collect::<Result<Vec<_>>>()?;

    let start_time = Instant::now();
    let mut results = Vec::with_capacity(words.len());

    for word in words {
        let selection = corrector.select(&word, args.bounded);
        let (tier, total_score, scores) = if args.explain {
            (
                Some(selection.tier),
                Some(selection.total),
                Some(selection.ranked.clone()),
            )
        } else {
            (None, None, None)
        };

        results.push(WordReport {
            known: corrector.is_known(&word),
            corrections: selection.into_corrections(corrector.config().precision),
            word,
            tier,
            total_score,
            scores,
        });
    }

    let report = CorrectionReport {
        results,
        bounded: args.bounded,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    output_result("Corrections", &report, cli_args)
}

/// Report unknown words in a piece of text.
fn check_text(args: &CheckArgs, corrector: &Corrector, cli_args: &SpellArgs) -> Result<()> {
    let start_time = Instant::now();
    let tokens = tokenize(&args.text);
    let misspelled = corrector.correct_tokens(&tokens, args.bounded);

    let report = CheckReport {
        words_checked: tokens.len(),
        misspelled,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    output_result("Text check", &report, cli_args)
}

/// Show model statistics.
fn show_stats(args: &StatsArgs, corrector: &Corrector, cli_args: &SpellArgs) -> Result<()> {
    let stats = corrector.stats(args.top);
    output_result("Model statistics", &stats, cli_args)
}

/// Save the model as a frequency file.
fn export_model(args: &ExportArgs, corrector: &Corrector, cli_args: &SpellArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(SpellError::invalid_argument(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    let model: &FrequencyModel = corrector.model();
    save_frequency_file(model, &args.output)?;

    let report = ExportReport {
        path: args.output.to_string_lossy().to_string(),
        words_written: model.len(),
    };
    output_result("Model exported", &report, cli_args)
}
