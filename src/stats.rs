//! Descriptive statistics over score histories.
//!
//! Every function expects a non-empty slice of finite values; callers
//! validate that once (see [`crate::scores::ScoreHistory`]) instead of each
//! function re-checking. Results never depend on the input order.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One-shot summary of a score distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub iqr: f64,
}

impl Summary {
    /// Compute all statistics from a single sorted copy of `values`.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyHistory);
        }

        let sorted = sorted_copy(values);
        let min = min(&sorted);
        let max = max(&sorted);

        // Summation error would otherwise leave a tiny spread on constant data
        let (mean, std_dev) = if min == max {
            (min, 0.0)
        } else {
            moments(&sorted)
        };

        let q25 = percentile_sorted(&sorted, 25.0);
        let median = percentile_sorted(&sorted, 50.0);
        let q75 = percentile_sorted(&sorted, 75.0);
        let iqr = q75 - q25;

        if ![q25, median, q75, iqr].iter().all(|v| v.is_finite()) {
            return Err(Error::invalid_input(format!(
                "score range [{min}, {max}] exceeds floating-point limits"
            )));
        }

        Ok(Self {
            count: sorted.len(),
            min,
            max,
            mean,
            std_dev,
            q25,
            median,
            q75,
            iqr,
        })
    }

    /// True when every score in the history is the same value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn mean(values: &[f64]) -> f64 {
    moments(values).0
}

/// Population standard deviation (no Bessel correction).
pub fn std_dev(values: &[f64]) -> f64 {
    moments(values).1
}

/// Mean and population standard deviation.
///
/// Values near `f64::MAX` overflow the plain sums; those are recomputed on
/// data scaled by a power of two, which is exact, and scaled back.
fn moments(values: &[f64]) -> (f64, f64) {
    let mean = raw_mean(values);
    let std_dev = raw_std_dev(values, mean);
    if mean.is_finite() && std_dev.is_finite() {
        return (mean, std_dev);
    }

    let max_abs = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    let scale = 2f64.powi(max_abs.log2().floor() as i32);
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let mean = raw_mean(&scaled);
    (mean * scale, raw_std_dev(&scaled, mean) * scale)
}

fn raw_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn raw_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Percentile with linear interpolation between closest ranks.
///
/// `p` is on the 0-100 scale.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyHistory);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::invalid_input(format!(
            "percentile must be within [0, 100], got {p}"
        )));
    }
    Ok(percentile_sorted(&sorted_copy(values), p))
}

/// `sorted` must be non-empty and ascending; `p` must be within [0, 100].
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_min_max_mean() {
        let values = [0.4, 0.1, 0.3, 0.2];
        assert_eq!(min(&values), 0.1);
        assert_eq!(max(&values), 0.4);
        assert!(approx(mean(&values), 0.25));
    }

    #[test]
    fn test_std_dev_is_population() {
        // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx(std_dev(&values), 2.0));
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let values = [1.0, 2.0, 3.0, 4.0];
        // rank = 0.25 * 3 = 0.75 -> 1 + 0.75
        assert!(approx(percentile(&values, 25.0).unwrap(), 1.75));
        assert!(approx(percentile(&values, 50.0).unwrap(), 2.5));
        assert!(approx(percentile(&values, 75.0).unwrap(), 3.25));
        assert_eq!(percentile(&values, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 4.0);
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        assert!(matches!(
            percentile(&[1.0], 101.0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(percentile(&[], 50.0), Err(Error::EmptyHistory)));
    }

    #[test]
    fn test_summary_single_value_is_degenerate() {
        let summary = Summary::from_values(&[0.5]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 0.5);
        assert_eq!(summary.q25, 0.5);
        assert_eq!(summary.q75, 0.5);
        assert_eq!(summary.std_dev, 0.0);
        assert!(summary.is_degenerate());
    }

    #[test]
    fn test_summary_matches_individual_functions() {
        let values = [0.9, 0.3, 0.7, 0.5, 0.6];
        let summary = Summary::from_values(&values).unwrap();
        assert_eq!(summary.min, min(&values));
        assert_eq!(summary.max, max(&values));
        assert!(approx(summary.mean, mean(&values)));
        assert!(approx(summary.std_dev, std_dev(&values)));
        assert!(approx(summary.median, 0.6));
        assert!(approx(summary.iqr, summary.q75 - summary.q25));
        assert!(!summary.is_degenerate());
    }

    #[test]
    fn test_constant_history_has_exactly_zero_spread() {
        for (value, len) in [(0.1, 3), (0.7, 7), (0.3625, 12)] {
            let summary = Summary::from_values(&vec![value; len]).unwrap();
            assert_eq!(summary.mean, value);
            assert_eq!(summary.std_dev, 0.0);
            assert_eq!(summary.iqr, 0.0);
            assert_eq!(summary.q25, value);
            assert!(summary.is_degenerate(), "[{value}; {len}] should be degenerate");
        }
    }

    #[test]
    fn test_summary_uses_extremes_of_unsorted_input() {
        let summary = Summary::from_values(&[0.4, -0.2, 0.9, 0.1]).unwrap();
        assert_eq!(summary.min, -0.2);
        assert_eq!(summary.max, 0.9);
    }

    #[test]
    fn test_values_near_f64_max_do_not_overflow() {
        let values = [1e308, 9e307];
        let summary = Summary::from_values(&values).unwrap();
        assert!(summary.mean.is_finite());
        assert!(summary.std_dev.is_finite());
        assert!(((summary.mean - 9.5e307) / 9.5e307).abs() < 1e-12);
        assert!(((summary.std_dev - 5e306) / 5e306).abs() < 1e-12);

        let constant = Summary::from_values(&[1e308, 1e308]).unwrap();
        assert_eq!(constant.mean, 1e308);
        assert_eq!(constant.std_dev, 0.0);
    }

    #[test]
    fn test_range_beyond_f64_limits_is_rejected() {
        let result = Summary::from_values(&[f64::MAX, -f64::MAX]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_summary_empty_is_error() {
        assert!(matches!(Summary::from_values(&[]), Err(Error::EmptyHistory)));
    }
}
