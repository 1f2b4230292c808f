//! Corpus tokenization and loading.
//!
//! This is the only place raw text enters the crate. Everything handed to
//! [`FrequencyModel`](crate::spelling::FrequencyModel) has already been reduced
//! to lowercase ASCII words.

pub mod builtin;
pub mod loader;
pub mod tokenizer;

pub use builtin::builtin_sample;
pub use loader::*;
pub use tokenizer::{filter_words, is_word, normalize_word, tokenize};
