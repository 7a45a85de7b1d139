//! fuzzbooth host library
//!
//! Wires the pure [`fuzzbooth_core`] matcher into a host process: tracing
//! setup, a `tracing`-backed diagnostics sink, JSON config loading and a
//! text-level [`PhraseSearcher`].
//!
//! # Example
//!
//! ```rust
//! use fuzzbooth::{config, PhraseSearcher};
//!
//! fuzzbooth::tracing::init_with_filter("warn");
//!
//! let config = config::from_json_str(r#"{"criterion": 1.0}"#).unwrap();
//! let searcher = PhraseSearcher::new(config).unwrap();
//! let results = searcher.search("the quick brown fox", "quick brwn").unwrap();
//! assert_eq!(results.indices(), vec![1]);
//! ```

pub mod config;
pub mod error;
pub mod searcher;
pub mod sink;
pub mod tracing;

pub use error::{Error, Result};
pub use searcher::PhraseSearcher;
pub use sink::TracingSink;

pub use fuzzbooth_core::{Completeness, MatchConfig, MatchRecord, SearchResults};
