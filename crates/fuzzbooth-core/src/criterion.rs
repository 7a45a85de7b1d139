//! Criterion scaling
//!
//! Longer phrases accumulate distance over more token pairs, so they may be
//! granted a small extra tolerance: `base + phrase_len^(1/denominator)`.
//! The bonus is sub-linear and grows very slowly with phrase length.

use crate::error::{MatchError, MatchResult};

/// Default denominator of the scaling exponent
pub const DEFAULT_SCALE_DENOMINATOR: f64 = 50.0;

/// Compute the effective acceptance threshold.
///
/// Returns `base` unchanged when scaling is disabled.
pub fn scale_criterion(
    base: f64,
    phrase_len: usize,
    enabled: bool,
    denominator: f64,
) -> MatchResult<f64> {
    if !base.is_finite() || base < 0.0 {
        return Err(MatchError::invalid(
            "criterion",
            format!("must be a finite value >= 0, got {base}"),
        ));
    }
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(MatchError::invalid(
            "scale_denominator",
            format!("must be a finite value > 0, got {denominator}"),
        ));
    }

    if !enabled {
        return Ok(base);
    }

    Ok(base + (phrase_len as f64).powf(1.0 / denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_base() {
        assert_eq!(scale_criterion(2.5, 7, false, 50.0).unwrap(), 2.5);
    }

    #[test]
    fn test_single_token_bonus_is_one() {
        assert_eq!(scale_criterion(2.5, 1, true, 50.0).unwrap(), 3.5);
    }

    #[test]
    fn test_exponent_is_reciprocal_of_denominator() {
        // 32^(1/5) == 2
        let scaled = scale_criterion(1.0, 32, true, 5.0).unwrap();
        assert!((scaled - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_in_phrase_len() {
        let mut previous = scale_criterion(0.0, 0, true, 50.0).unwrap();
        for len in 1..200 {
            let next = scale_criterion(0.0, len, true, 50.0).unwrap();
            assert!(next >= previous, "len {len}: {next} < {previous}");
            previous = next;
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(scale_criterion(-1.0, 3, false, 50.0).is_err());
        assert!(scale_criterion(1.0, 3, true, 0.0).is_err());
        assert!(scale_criterion(1.0, 3, true, -50.0).is_err());
    }
}
