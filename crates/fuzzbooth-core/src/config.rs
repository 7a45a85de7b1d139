//! Matcher configuration

use serde::{Deserialize, Serialize};

use crate::criterion::DEFAULT_SCALE_DENOMINATOR;
use crate::error::{MatchError, MatchResult};

/// Default per-character substitution cost
pub const DEFAULT_SUBSTITUTION_COST: f64 = 0.9;

/// Default acceptance criterion (maximum accumulated distance)
pub const DEFAULT_CRITERION: f64 = 2.5;

/// Maximum token length accepted by the built-in edit distance.
///
/// Longer tokens are rejected rather than filling an O(n*m) table for them.
pub const DEFAULT_MAX_TOKEN_CHARS: usize = 1_000;

/// Configuration for a phrase search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Cost of substituting one character for another
    pub substitution_cost: f64,
    /// Count an adjacent character swap as a single edit
    pub transpositions: bool,
    /// Maximum accumulated distance for a window to match
    pub criterion: f64,
    /// Give longer phrases a slightly larger tolerance
    pub criterion_scale: bool,
    /// Denominator of the scaling exponent; larger means less leniency
    pub scale_denominator: f64,
    /// Window count at which the `parallel` feature switches to rayon
    pub parallel_threshold: usize,
    /// Tokens longer than this fail the comparison
    pub max_token_chars: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            substitution_cost: DEFAULT_SUBSTITUTION_COST,
            transpositions: true,
            criterion: DEFAULT_CRITERION,
            criterion_scale: false,
            scale_denominator: DEFAULT_SCALE_DENOMINATOR,
            parallel_threshold: 1000,
            max_token_chars: DEFAULT_MAX_TOKEN_CHARS,
        }
    }
}

impl MatchConfig {
    pub fn with_criterion(mut self, criterion: f64) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_substitution_cost(mut self, cost: f64) -> Self {
        self.substitution_cost = cost;
        self
    }

    pub fn with_transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }

    pub fn with_criterion_scale(mut self, enabled: bool) -> Self {
        self.criterion_scale = enabled;
        self
    }

    pub fn with_scale_denominator(mut self, denominator: f64) -> Self {
        self.scale_denominator = denominator;
        self
    }

    pub fn with_parallel_threshold(mut self, windows: usize) -> Self {
        self.parallel_threshold = windows;
        self
    }

    pub fn with_max_token_chars(mut self, max: usize) -> Self {
        self.max_token_chars = max;
        self
    }

    /// Check every field before a scan starts
    pub fn validate(&self) -> MatchResult<()> {
        if !self.criterion.is_finite() || self.criterion < 0.0 {
            return Err(MatchError::invalid(
                "criterion",
                format!("must be a finite value >= 0, got {}", self.criterion),
            ));
        }
        if !self.scale_denominator.is_finite() || self.scale_denominator <= 0.0 {
            return Err(MatchError::invalid(
                "scale_denominator",
                format!("must be a finite value > 0, got {}", self.scale_denominator),
            ));
        }
        if !self.substitution_cost.is_finite() || self.substitution_cost < 0.0 {
            return Err(MatchError::invalid(
                "substitution_cost",
                format!("must be a finite value >= 0, got {}", self.substitution_cost),
            ));
        }
        if self.max_token_chars == 0 {
            return Err(MatchError::invalid("max_token_chars", "must be > 0"));
        }
        Ok(())
    }
}
