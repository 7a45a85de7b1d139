//! Text tokenization
//!
//! The matcher works on token sequences; these tokenizers turn raw text into
//! them. Order is preserved since it defines window alignment.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of tokens
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Word-level tokenizer over Unicode word boundaries (UAX #29).
///
/// Words and punctuation become separate tokens; whitespace is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer {
    pub lowercase: bool,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lowercasing() -> Self {
        Self { lowercase: true }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| {
                if self.lowercase {
                    segment.to_lowercase()
                } else {
                    segment.to_string()
                }
            })
            .collect()
    }
}

/// Splits on whitespace only
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
