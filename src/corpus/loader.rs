//! Building frequency models from files.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corpus::tokenizer::{filter_words, is_word, tokenize};
use crate::error::{Result, SpellError};
use crate::spelling::frequency::FrequencyModel;

/// Supported corpus file layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// Free running text, tokenized into letter runs.
    Text,
    /// One token per line; tokens with non-letters are skipped.
    Words,
    /// `word count` per line, counts taken verbatim.
    Frequency,
}

/// Load a model from `path` using the given layout.
pub fn load_corpus<P: AsRef<Path>>(path: P, format: CorpusFormat) -> Result<FrequencyModel> {
    let path = path.as_ref();
    let model = match format {
        CorpusFormat::Text => load_text_corpus(path)?,
        CorpusFormat::Words => load_word_list(path)?,
        CorpusFormat::Frequency => load_frequency_file(path)?,
    };
    log::info!(
        "Loaded {} words ({} total count) from {}",
        model.len(),
        model.total_count(),
        path.display()
    );
    Ok(model)
}

/// Build a model from a free text file.
pub fn load_text_corpus<P: AsRef<Path>>(path: P) -> Result<FrequencyModel> {
    let text = fs::read_to_string(path)?;
    Ok(FrequencyModel::from_tokens(tokenize(&text)))
}

/// Build a model from a file with one token per line.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<FrequencyModel> {
    let reader = BufReader::new(File::open(path)?);
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.push(line.trim().to_string());
    }
    Ok(FrequencyModel::from_tokens(filter_words(tokens)))
}

/// Load a model saved by [`save_frequency_file`].
///
/// Blank lines and lines starting with `#` are ignored. Entries whose word is
/// not purely alphabetic are skipped. A line that is not exactly a word and
/// a parsable count is an error.
pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> Result<FrequencyModel> {
    let reader = BufReader::new(File::open(path)?);
    let mut pairs = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (Some(word), Some(count), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SpellError::corpus(format!(
                "line {}: expected 'word count'",
                line_num + 1
            )));
        };
        let count: u64 = count.parse().map_err(|e| {
            SpellError::corpus(format!("line {}: invalid count '{count}': {e}", line_num + 1))
        })?;

        if !is_word(word) {
            log::warn!("Skipping non-word '{}' on line {}", word, line_num + 1);
            continue;
        }
        pairs.push((word.to_ascii_lowercase(), count));
    }

    Ok(FrequencyModel::from_counts(pairs))
}

/// Write `model` as `word count` lines, most frequent first.
pub fn save_frequency_file<P: AsRef<Path>>(model: &FrequencyModel, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (word, count) in model.most_frequent(model.len()) {
        writeln!(writer, "{word} {count}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_text_corpus() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "The dog was lazy. The DOG slept.").unwrap();
        temp_file.flush().unwrap();

        let model = load_corpus(temp_file.path(), CorpusFormat::Text).unwrap();
        assert_eq!(model.get("the"), 3);
        assert_eq!(model.get("dog"), 3);
        assert_eq!(model.get("slept"), 2);
        assert!(!model.contains("cat"));
    }

    #[test]
    fn test_load_word_list() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "World").unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "it's").unwrap();
        temp_file.flush().unwrap();

        let model = load_word_list(temp_file.path()).unwrap();
        assert_eq!(model.get("hello"), 3);
        assert_eq!(model.get("world"), 2);
        assert!(!model.contains("it"));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_frequency_file_round_trip() {
        let model = FrequencyModel::from_counts([("hello", 5), ("world", 3)]);
        let temp_file = NamedTempFile::new().unwrap();
        save_frequency_file(&model, temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "hello 5\nworld 3\n");

        let loaded = load_frequency_file(temp_file.path()).unwrap();
        assert_eq!(loaded.get("hello"), 5);
        assert_eq!(loaded.get("world"), 3);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_frequency_file_skips_comments_and_non_words() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# generated").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "Cat 7").unwrap();
        writeln!(temp_file, "r2d2 9").unwrap();
        temp_file.flush().unwrap();

        let model = load_frequency_file(temp_file.path()).unwrap();
        assert_eq!(model.get("cat"), 7);
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_frequency_file_rejects_bad_count() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat seven").unwrap();
        temp_file.flush().unwrap();

        let err = load_frequency_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, SpellError::Corpus(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_frequency_file_rejects_extra_fields() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "dog 3").unwrap();
        writeln!(temp_file, "cat 7 junk").unwrap();
        temp_file.flush().unwrap();

        let err = load_frequency_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, SpellError::Corpus(_)));
        assert_eq!(err.to_string(), "Corpus error: line 2: expected 'word count'");
    }

    #[test]
    fn test_frequency_file_rejects_missing_count() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat").unwrap();
        temp_file.flush().unwrap();

        let err = load_frequency_file(temp_file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Corpus error: line 1: expected 'word count'");
    }

    #[test]
    fn test_missing_file() {
        let result = load_corpus("/nonexistent/corpus.txt", CorpusFormat::Text);
        assert!(matches!(result, Err(SpellError::Io(_))));
    }
}
