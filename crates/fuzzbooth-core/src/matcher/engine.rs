//! PhraseMatcher - fixed-window fuzzy phrase matching
//!
//! Every window of the document with the phrase's length is compared token
//! by token against the phrase. The first token acts as a gate: windows whose
//! first token is already beyond the threshold are skipped without comparing
//! the rest. Windows whose accumulated distance stays within the threshold
//! are emitted as Found records in ascending start order.
//!
//! Alignment is positional. A document that contains the phrase with a word
//! inserted or dropped never matches, whatever the tolerance, because every
//! window has exactly the phrase's length. Insertion/deletion-tolerant phrase
//! alignment would be a separate mode.

use std::sync::Arc;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

use super::results::{Completeness, ResultAggregator, SearchResults};
use crate::cancel::CancellationToken;
use crate::config::MatchConfig;
use crate::criterion::scale_criterion;
use crate::diagnostics::{DiagnosticSink, FailureReport, NoopSink};
use crate::distance::{EditDistance, TokenDistance};
use crate::error::{ComparisonFailure, DistanceError, FailureCause, MatchError, MatchResult};
use crate::tokenize::Tokenizer;

/// Result of evaluating one window
#[derive(Debug)]
enum WindowOutcome {
    Accepted(f64),
    Rejected,
    Cancelled,
    Failed(ComparisonFailure),
}

/// Fuzzy phrase matcher over token sequences
pub struct PhraseMatcher<D = EditDistance> {
    config: MatchConfig,
    metric: D,
    sink: Arc<dyn DiagnosticSink>,
    cancel: Option<CancellationToken>,
}

impl PhraseMatcher<EditDistance> {
    /// Create a matcher using the built-in edit distance
    pub fn new(config: MatchConfig) -> MatchResult<Self> {
        let metric = EditDistance::from_config(&config);
        Self::with_metric(config, metric)
    }
}

impl<D: TokenDistance> PhraseMatcher<D> {
    /// Create a matcher with a custom token metric.
    ///
    /// `substitution_cost`, `transpositions` and `max_token_chars` only
    /// configure the built-in metric and are ignored here.
    pub fn with_metric(config: MatchConfig, metric: D) -> MatchResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            metric,
            sink: Arc::new(NoopSink),
            cancel: None,
        })
    }

    /// Route failure reports to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Check `token` once per window and stop early when it fires
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Effective threshold for a phrase of `phrase_len` tokens
    pub fn threshold(&self, phrase_len: usize) -> MatchResult<f64> {
        scale_criterion(
            self.config.criterion,
            phrase_len,
            self.config.criterion_scale,
            self.config.scale_denominator,
        )
    }

    /// Find every window of `document` within tolerance of `phrase`.
    ///
    /// Fails only for an empty phrase or invalid configuration. A document
    /// shorter than the phrase gives a single NotFound record. A failure
    /// inside the metric is reported to the sink and the records gathered
    /// before it are returned with [`Completeness::Aborted`].
    pub fn find_matches<S, P>(&self, document: &[S], phrase: &[P]) -> MatchResult<SearchResults>
    where
        S: AsRef<str> + Sync,
        P: AsRef<str> + Sync,
    {
        if phrase.is_empty() {
            return Err(MatchError::EmptyPhrase);
        }
        let threshold = self.threshold(phrase.len())?;
        let phrase_tokens: Vec<String> = phrase.iter().map(|t| t.as_ref().to_string()).collect();

        if document.len() < phrase.len() {
            return Ok(SearchResults::not_found(phrase_tokens));
        }

        let window_count = document.len() - phrase.len() + 1;
        let mut aggregator = ResultAggregator::new(phrase_tokens);
        let outcomes = self.evaluate_windows(document, phrase, threshold, window_count);

        let mut completeness = Completeness::Complete;
        for (start, outcome) in outcomes {
            match outcome {
                WindowOutcome::Accepted(distance) => {
                    match document.get(start..start + phrase.len()) {
                        Some(window) => aggregator.push_found(start, window, distance),
                        None => {
                            let failure = ComparisonFailure::new(
                                start,
                                FailureCause::IndexOutOfBounds {
                                    index: start + phrase.len() - 1,
                                    len: document.len(),
                                },
                            );
                            completeness = Completeness::Aborted { failure };
                            break;
                        }
                    }
                }
                WindowOutcome::Rejected => {}
                WindowOutcome::Cancelled => {
                    completeness = Completeness::Cancelled { window: start };
                    break;
                }
                WindowOutcome::Failed(failure) => {
                    completeness = Completeness::Aborted { failure };
                    break;
                }
            }
        }

        if let Completeness::Aborted { failure } = &completeness {
            self.sink.comparison_failed(&FailureReport {
                error: failure,
                phrase: aggregator.phrase(),
                phrase_len: phrase.len(),
                window: failure.window,
                document_len: document.len(),
            });
        }

        Ok(aggregator.finish(completeness))
    }

    /// Evaluate windows lazily in order; the caller stops at the first
    /// cancelled or failed window
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn evaluate_windows<'a, S, P>(
        &'a self,
        document: &'a [S],
        phrase: &'a [P],
        threshold: f64,
        window_count: usize,
    ) -> Box<dyn Iterator<Item = (usize, WindowOutcome)> + 'a>
    where
        S: AsRef<str> + Sync,
        P: AsRef<str> + Sync,
    {
        Box::new(
            (0..window_count)
                .map(move |start| (start, self.evaluate_window(document, phrase, start, threshold))),
        )
    }

    /// Evaluate windows on rayon for long documents. The indexed collect keeps
    /// start order, so the caller sees the same sequence as a sequential scan.
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn evaluate_windows<'a, S, P>(
        &'a self,
        document: &'a [S],
        phrase: &'a [P],
        threshold: f64,
        window_count: usize,
    ) -> Box<dyn Iterator<Item = (usize, WindowOutcome)> + 'a>
    where
        S: AsRef<str> + Sync,
        P: AsRef<str> + Sync,
    {
        if window_count >= self.config.parallel_threshold {
            let outcomes: Vec<(usize, WindowOutcome)> = (0..window_count)
                .into_par_iter()
                .map(|start| (start, self.evaluate_window(document, phrase, start, threshold)))
                .collect();
            Box::new(outcomes.into_iter())
        } else {
            Box::new(
                (0..window_count)
                    .map(move |start| (start, self.evaluate_window(document, phrase, start, threshold))),
            )
        }
    }

    /// Compare the window starting at `start` against the phrase
    fn evaluate_window<S, P>(
        &self,
        document: &[S],
        phrase: &[P],
        start: usize,
        threshold: f64,
    ) -> WindowOutcome
    where
        S: AsRef<str>,
        P: AsRef<str>,
    {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return WindowOutcome::Cancelled;
        }

        let mut total = 0.0;
        for (offset, term) in phrase.iter().enumerate() {
            let index = start + offset;
            let token = match document.get(index) {
                Some(token) => token,
                None => {
                    return WindowOutcome::Failed(ComparisonFailure::new(
                        start,
                        FailureCause::IndexOutOfBounds {
                            index,
                            len: document.len(),
                        },
                    ))
                }
            };

            let dist = match self.token_distance(term.as_ref(), token.as_ref()) {
                Ok(dist) => dist,
                Err(err) => return WindowOutcome::Failed(ComparisonFailure::new(start, err)),
            };
            total += dist;

            // First-token gate
            if offset == 0 && total > threshold {
                return WindowOutcome::Rejected;
            }
        }

        if total <= threshold {
            WindowOutcome::Accepted(total)
        } else {
            WindowOutcome::Rejected
        }
    }

    fn token_distance(&self, term: &str, token: &str) -> Result<f64, DistanceError> {
        let dist = self.metric.distance(term, token)?;
        if !dist.is_finite() || dist < 0.0 {
            return Err(DistanceError::InvalidValue { value: dist });
        }
        Ok(dist)
    }
}

/// Search `document` for `phrase` with the built-in edit distance.
///
/// `MatchConfig::default()` gives substitution cost 0.9, transpositions on,
/// criterion 2.5 and no scaling.
pub fn search_for_phrase<S, P>(
    document: &[S],
    phrase: &[P],
    config: &MatchConfig,
) -> MatchResult<SearchResults>
where
    S: AsRef<str> + Sync,
    P: AsRef<str> + Sync,
{
    PhraseMatcher::new(config.clone())?.find_matches(document, phrase)
}

/// Tokenize `text` and `phrase` with `tokenizer`, then search.
///
/// Comparison failures are reported to `sink`.
pub fn search_text(
    text: &str,
    phrase: &str,
    config: &MatchConfig,
    tokenizer: &dyn Tokenizer,
    sink: Arc<dyn DiagnosticSink>,
) -> MatchResult<SearchResults> {
    let document = tokenizer.tokenize(text);
    let phrase = tokenizer.tokenize(phrase);
    PhraseMatcher::new(config.clone())?
        .with_sink(sink)
        .find_matches(&document, &phrase)
}
