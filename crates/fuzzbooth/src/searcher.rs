//! PhraseSearcher - text-level search facade
//!
//! Tokenizes raw text, runs the core matcher and routes scan failures to
//! `tracing`.

use std::sync::Arc;

use fuzzbooth_core::{
    CancellationToken, Completeness, MatchConfig, PhraseMatcher, SearchResults, Tokenizer,
    WordTokenizer,
};
use tracing::{debug, warn};

use crate::error::Result;
use crate::sink::TracingSink;
use crate::tracing::target;

/// Searches raw text for fuzzy phrase occurrences
pub struct PhraseSearcher {
    matcher: PhraseMatcher,
    tokenizer: Box<dyn Tokenizer>,
}

impl PhraseSearcher {
    /// Create a searcher with the default word tokenizer
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::with_tokenizer(config, Box::new(WordTokenizer::new()))
    }

    pub fn with_tokenizer(config: MatchConfig, tokenizer: Box<dyn Tokenizer>) -> Result<Self> {
        let matcher = PhraseMatcher::new(config)?.with_sink(Arc::new(TracingSink));
        Ok(Self { matcher, tokenizer })
    }

    /// Stop scans early when `token` fires
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.matcher = self.matcher.with_cancellation(token);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        self.matcher.config()
    }

    /// Tokenize both inputs and search
    pub fn search(&self, text: &str, phrase: &str) -> Result<SearchResults> {
        let document = self.tokenizer.tokenize(text);
        let phrase = self.tokenizer.tokenize(phrase);
        self.search_tokens(&document, &phrase)
    }

    /// Search pre-tokenized input
    pub fn search_tokens<S, P>(&self, document: &[S], phrase: &[P]) -> Result<SearchResults>
    where
        S: AsRef<str> + Sync,
        P: AsRef<str> + Sync,
    {
        let results = self.matcher.find_matches(document, phrase)?;

        match results.completeness() {
            Completeness::Complete => debug!(
                target: target::SEARCH,
                document_len = document.len(),
                phrase_len = phrase.len(),
                found = results.found().count(),
                "phrase scan complete"
            ),
            Completeness::Cancelled { window } => warn!(
                target: target::SEARCH,
                window,
                found = results.len(),
                "phrase scan cancelled"
            ),
            // Already reported through the sink
            Completeness::Aborted { .. } => {}
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzbooth_core::WhitespaceTokenizer;

    #[test]
    fn test_search_raw_text() {
        let searcher = PhraseSearcher::new(MatchConfig::default()).unwrap();
        let results = searcher
            .search("It was the best of times, it was the worst of times.", "wrost of times")
            .unwrap();
        assert_eq!(results.indices(), vec![10]);
    }

    #[test]
    fn test_custom_tokenizer() {
        let searcher =
            PhraseSearcher::with_tokenizer(MatchConfig::default(), Box::new(WhitespaceTokenizer))
                .unwrap();
        // Punctuation stays attached: "times," is one token
        let results = searcher.search("best of times, worst", "times,").unwrap();
        assert_eq!(results.indices(), vec![2]);
        assert_eq!(results.records()[0].distance(), Some(0.0));
    }

    #[test]
    fn test_invalid_config() {
        let config = MatchConfig::default().with_criterion(-2.0);
        assert!(PhraseSearcher::new(config).is_err());
    }
}
