//! fuzzbooth Core Engine
//!
//! Approximate phrase search over token sequences. Given a tokenized document
//! and a tokenized phrase, finds every position where a contiguous run of
//! tokens matches the phrase within an edit-distance tolerance.
//!
//! The crate is pure: no logging backend, no I/O. Failures inside a scan are
//! handed to an injectable [`DiagnosticSink`].
//!
//! # Features
//!
//! - `parallel` - Evaluate windows on rayon for long documents
//! - `native` - Enable all native optimizations
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fuzzbooth_core::{search_text, MatchConfig, NoopSink, WordTokenizer};
//!
//! let results = search_text(
//!     "The quick brown fox jumps over the lazy dog",
//!     "lazy dgo",
//!     &MatchConfig::default(),
//!     &WordTokenizer::new(),
//!     Arc::new(NoopSink),
//! )
//! .unwrap();
//!
//! assert_eq!(results.indices(), vec![7]);
//! ```

pub mod cancel;
pub mod config;
pub mod criterion;
pub mod diagnostics;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod tokenize;

// Re-export main types at crate root
pub use cancel::CancellationToken;
pub use config::MatchConfig;
pub use criterion::{scale_criterion, DEFAULT_SCALE_DENOMINATOR};
pub use diagnostics::{DiagnosticSink, FailureReport, NoopSink};
pub use distance::{EditDistance, TokenDistance};
pub use error::{ComparisonFailure, DistanceError, FailureCause, MatchError, MatchResult};
pub use matcher::{
    search_for_phrase, search_text, Completeness, MatchRecord, PhraseMatcher, SearchResults,
};
pub use tokenize::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
