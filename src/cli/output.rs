//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellArgs};
use crate::error::Result;
use crate::spelling::{Correction, CorrectorStats, SelectedTier, TextCorrection};

/// Corrections for a single requested word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub known: bool,
    pub corrections: Vec<Correction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SelectedTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<(String, u64)>>,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub results: Vec<WordReport>,
    pub bounded: bool,
    pub duration_ms: u64,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub words_checked: usize,
    pub misspelled: Vec<TextCorrection>,
    pub duration_ms: u64,
}

/// Result structure for the export command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportReport {
    pub path: String,
    pub words_written: usize,
}

/// Types that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self, args: &SpellArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn format_corrections(corrections: &[Correction]) -> String {
    if corrections.is_empty() {
        return "no correction found".to_string();
    }
    corrections
        .iter()
        .map(|c| format!("{} ({:.3})", c.word, c.probability))
        .collect::<Vec<_>>()
        .join(", ")
}

impl HumanOutput for CorrectionReport {
    fn print_human(&self, args: &SpellArgs) {
        for report in &self.results {
            let marker = if report.known { " [known]" } else { "" };
            println!(
                "{}{}: {}",
                report.word,
                marker,
                format_corrections(&report.corrections)
            );

            if let Some(tier) = report.tier {
                println!("  tier: {tier:?}, total score: {}", report.total_score.unwrap_or(0));
            }
            if let Some(scores) = &report.scores {
                for (word, score) in scores {
                    println!("    {word:<20} {score}");
                }
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!("Corrected {} word(s) in {}ms", self.results.len(), self.duration_ms);
        }
    }
}

impl HumanOutput for CheckReport {
    fn print_human(&self, args: &SpellArgs) {
        if self.misspelled.is_empty() {
            println!("No misspellings found in {} word(s).", self.words_checked);
        } else {
            println!("Misspellings:");
            println!("─────────────");
            for item in &self.misspelled {
                println!("{}: {}", item.word, format_corrections(&item.corrections));
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!("Check time: {}ms", self.duration_ms);
        }
    }
}

impl HumanOutput for CorrectorStats {
    fn print_human(&self, _args: &SpellArgs) {
        println!("Model Statistics:");
        println!("═════════════════");
        println!("Known words: {}", self.known_words);
        println!("Total count: {}", self.total_count);

        if !self.top_words.is_empty() {
            println!();
            println!("Most frequent:");
            for (word, count) in &self.top_words {
                println!("  {word:<20} {count}");
            }
        }
    }
}

impl HumanOutput for ExportReport {
    fn print_human(&self, _args: &SpellArgs) {
        println!("Wrote {} words to {}", self.words_written, self.path);
    }
}
