//! Phrase matching
//!
//! Slides a window of the phrase's length over the document, scores each
//! window as the sum of per-token distances, and collects accepted windows.
//!
//! # Example
//!
//! ```rust
//! use fuzzbooth_core::matcher::{search_for_phrase, MatchRecord};
//! use fuzzbooth_core::MatchConfig;
//!
//! let document = ["the", "quick", "brown", "fox"];
//! let results = search_for_phrase(&document, &["quikc", "brown"], &MatchConfig::default()).unwrap();
//!
//! let first = &results.records()[0];
//! assert_eq!(first.index(), Some(1));
//! assert_eq!(first.distance(), Some(1.0));
//! assert!(matches!(first, MatchRecord::Found { .. }));
//! ```

mod engine;
mod results;

pub use engine::{search_for_phrase, search_text, PhraseMatcher};
pub use results::{Completeness, MatchRecord, SearchResults};
