//! Word extraction for corpora and user input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SpellError};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("[a-z]+").expect("Word pattern should be valid");
}

/// Lowercase `text` and extract every run of ASCII letters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `token` consists only of ASCII letters.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Drop tokens containing anything but letters and lowercase the rest.
///
/// Unlike [`tokenize`], a token such as `"don't"` is discarded whole rather
/// than split.
pub fn filter_words<I, S>(tokens: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter(|token| is_word(token.as_ref()))
        .map(|token| token.as_ref().to_ascii_lowercase())
}

/// Trim and lowercase a single word of user input, rejecting anything that
/// is not purely alphabetic.
pub fn normalize_word(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if !is_word(trimmed) {
        return Err(SpellError::invalid_argument(format!(
            "'{trimmed}' is not a word (letters a-z only)"
        )));
    }
    Ok(trimmed.to_ascii_lowercase())
}
