//! Token distance metrics
//!
//! The matcher only needs a non-negative dissimilarity between two tokens.
//! [`EditDistance`] is the built-in metric: character edit distance with a
//! configurable substitution cost and optional adjacent transpositions
//! (unrestricted Damerau-Levenshtein). Any closure with the right signature can be
//! plugged in instead.

use std::collections::HashMap;

use ahash::RandomState;
use strsim::{damerau_levenshtein, levenshtein};

use crate::config::{MatchConfig, DEFAULT_MAX_TOKEN_CHARS};
use crate::error::DistanceError;

/// Dissimilarity between two tokens.
///
/// Implementations must return 0 for identical tokens and must be pure.
pub trait TokenDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> Result<f64, DistanceError>;
}

impl<F> TokenDistance for F
where
    F: Fn(&str, &str) -> Result<f64, DistanceError> + Send + Sync,
{
    fn distance(&self, a: &str, b: &str) -> Result<f64, DistanceError> {
        self(a, b)
    }
}

/// Weighted character edit distance.
///
/// Insertions and deletions cost 1, substitutions cost `substitution_cost`,
/// and with `transpositions` an adjacent swap costs 1.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDistance {
    pub substitution_cost: f64,
    pub transpositions: bool,
    pub max_chars: usize,
}

impl Default for EditDistance {
    fn default() -> Self {
        Self::from_config(&MatchConfig::default())
    }
}

impl EditDistance {
    pub fn new(substitution_cost: f64, transpositions: bool) -> Self {
        Self {
            substitution_cost,
            transpositions,
            max_chars: DEFAULT_MAX_TOKEN_CHARS,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            substitution_cost: config.substitution_cost,
            transpositions: config.transpositions,
            max_chars: config.max_token_chars,
        }
    }

    fn check_len(&self, chars: &[char]) -> Result<(), DistanceError> {
        if chars.len() > self.max_chars {
            return Err(DistanceError::InputTooLong {
                len: chars.len(),
                max: self.max_chars,
            });
        }
        Ok(())
    }
}

impl TokenDistance for EditDistance {
    fn distance(&self, a: &str, b: &str) -> Result<f64, DistanceError> {
        if a == b {
            return Ok(0.0);
        }

        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        self.check_len(&a_chars)?;
        self.check_len(&b_chars)?;

        // Unit costs: strsim computes the same thing on integers
        if self.substitution_cost == 1.0 {
            let dist = if self.transpositions {
                damerau_levenshtein(a, b)
            } else {
                levenshtein(a, b)
            };
            return Ok(dist as f64);
        }

        Ok(weighted_damerau(
            &a_chars,
            &b_chars,
            self.substitution_cost,
            self.transpositions,
        ))
    }
}

/// Damerau-Levenshtein distance with a weighted substitution.
///
/// Unrestricted variant (Lowrance-Wagner): characters between the two halves
/// of a transposed pair may still be inserted or deleted, so `abc` -> `ca`
/// costs 2. `last_row` holds, per character, the last row of `a` where it
/// occurred; the transposition step jumps back to that row and to the last
/// matching column in the current row.
fn weighted_damerau(a: &[char], b: &[char], substitution_cost: f64, transpositions: bool) -> f64 {
    let (rows, cols) = (a.len() + 1, b.len() + 1);
    let mut table = vec![0.0f64; rows * cols];
    let at = |i: usize, j: usize| i * cols + j;

    for i in 0..rows {
        table[at(i, 0)] = i as f64;
    }
    for j in 0..cols {
        table[at(0, j)] = j as f64;
    }

    let mut last_row: HashMap<char, usize, RandomState> =
        HashMap::with_capacity_and_hasher(rows + cols, RandomState::new());

    for i in 1..rows {
        let mut last_match_col = 0;
        for j in 1..cols {
            let left_row = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let right_col = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0.0
            } else {
                substitution_cost
            };

            let mut d = (table[at(i - 1, j)] + 1.0)
                .min(table[at(i, j - 1)] + 1.0)
                .min(table[at(i - 1, j - 1)] + cost);

            if transpositions && left_row > 0 && right_col > 0 {
                let gap = (i - left_row) + (j - right_col) - 1;
                d = d.min(table[at(left_row - 1, right_col - 1)] + gap as f64);
            }

            table[at(i, j)] = d;
        }
        last_row.insert(a[i - 1], i);
    }

    table[at(rows - 1, cols - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_is_zero() {
        let metric = EditDistance::default();
        assert_eq!(metric.distance("fox", "fox").unwrap(), 0.0);
        assert_eq!(metric.distance("", "").unwrap(), 0.0);
    }

    #[test]
    fn test_insert_and_delete_cost_one() {
        let metric = EditDistance::new(0.9, true);
        assert!(approx(metric.distance("", "abc").unwrap(), 3.0));
        assert!(approx(metric.distance("abcd", "abc").unwrap(), 1.0));
    }

    #[test]
    fn test_weighted_substitution() {
        let metric = EditDistance::new(0.9, false);
        // k->s, e->i, +g
        assert!(approx(metric.distance("kitten", "sitting").unwrap(), 2.8));
        assert!(approx(metric.distance("cat", "bat").unwrap(), 0.9));
    }

    #[test]
    fn test_substitution_never_exceeds_delete_plus_insert() {
        let metric = EditDistance::new(2.5, false);
        assert!(approx(metric.distance("a", "b").unwrap(), 2.0));
    }

    #[test]
    fn test_transposition_costs_one() {
        let with = EditDistance::new(0.9, true);
        let without = EditDistance::new(0.9, false);
        assert!(approx(with.distance("teh", "the").unwrap(), 1.0));
        assert!(approx(without.distance("teh", "the").unwrap(), 1.8));
    }

    #[test]
    fn test_edit_between_transposed_pair() {
        // swap a/c with b deleted in between: restricted alignment would give 2.8
        let weighted = EditDistance::new(0.9, true);
        assert!(approx(weighted.distance("abc", "ca").unwrap(), 2.0));
        assert!(approx(weighted.distance("ca", "abc").unwrap(), 2.0));

        let unit = EditDistance::new(1.0, true);
        assert!(approx(unit.distance("ca", "abc").unwrap(), 2.0));
        assert!(approx(unit.distance("abc", "ca").unwrap(), 2.0));
    }

    #[test]
    fn test_unit_cost_matches_weighted_path() {
        let pairs = [
            ("kitten", "sitting"),
            ("ca", "abc"),
            ("abc", "ca"),
            ("abcdef", "badcfe"),
            ("receive", "recieve"),
            ("", "word"),
            ("über", "uber"),
        ];
        for transpositions in [true, false] {
            let metric = EditDistance::new(1.0, transpositions);
            for (a, b) in pairs {
                let fast = metric.distance(a, b).unwrap();
                let a_chars: Vec<char> = a.chars().collect();
                let b_chars: Vec<char> = b.chars().collect();
                let slow = weighted_damerau(&a_chars, &b_chars, 1.0, transpositions);
                assert!(approx(fast, slow), "{a} vs {b}: {fast} != {slow}");
            }
        }
    }

    #[test]
    fn test_rejects_long_tokens() {
        let metric = EditDistance {
            max_chars: 4,
            ..EditDistance::default()
        };
        assert_eq!(
            metric.distance("abcde", "abc"),
            Err(DistanceError::InputTooLong { len: 5, max: 4 })
        );
        // Identical tokens short-circuit before the length guard
        assert_eq!(metric.distance("abcde", "abcde"), Ok(0.0));
    }

    #[test]
    fn test_closure_metric() {
        let exact = |a: &str, b: &str| -> Result<f64, DistanceError> {
            Ok(if a == b { 0.0 } else { 1.0 })
        };
        assert_eq!(exact.distance("a", "a").unwrap(), 0.0);
        assert_eq!(exact.distance("a", "b").unwrap(), 1.0);
    }
}
