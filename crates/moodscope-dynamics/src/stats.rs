//! Statistical primitives over a daily series.
//!
//! Every primitive returns [`DEGENERATE`] when the statistic is undefined
//! for the input (too few points, or a constant series for SD and
//! autocorrelation).
//! Trait weights are calibrated against exactly these formulas: sample
//! standard deviation (n - 1) and MSSD over n - 1 differences.

/// Value reported for an undefined statistic
pub const DEGENERATE: f64 = 0.0;

/// Arithmetic mean
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return DEGENERATE;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Sample standard deviation
pub fn std_dev(series: &[f64]) -> f64 {
    if series.len() < 2 || is_constant(series) {
        return DEGENERATE;
    }

    let m = mean(series);
    let variance =
        series.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (series.len() - 1) as f64;

    variance.sqrt()
}

/// Mean squared successive difference.
///
/// MSSD = Σ (x[i] - x[i-1])² / (n - 1)
///
/// Day-to-day instability, independent of the series' level.
pub fn mssd(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return DEGENERATE;
    }

    let sum: f64 = series.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    sum / (series.len() - 1) as f64
}

/// Lag-1 autocorrelation around the series' own mean (emotional inertia).
///
/// r = Σ_{i<n-1} (x[i] - m)(x[i+1] - m) / Σ_i (x[i] - m)²
pub fn autocorrelation(series: &[f64]) -> f64 {
    if series.len() < 3 {
        return DEGENERATE;
    }

    if is_constant(series) {
        return DEGENERATE;
    }

    let m = mean(series);
    let num: f64 = series.windows(2).map(|w| (w[0] - m) * (w[1] - m)).sum();
    let den: f64 = series.iter().map(|v| (v - m).powi(2)).sum();

    if den == 0.0 {
        return DEGENERATE;
    }
    num / den
}

/// A rounded mean leaves tiny residuals on a constant series, so spread and
/// correlation must not be computed from it.
fn is_constant(series: &[f64]) -> bool {
    series.iter().all(|&v| v == series[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[0.5]), 0.5);
        assert!((mean(&[-1.0, 0.0, 0.4]) - (-0.2)).abs() < EPS);
    }

    #[test]
    fn test_std_dev_is_sample() {
        // Population SD would be 1.0
        let sd = std_dev(&[-1.0, 1.0]);
        assert!((sd - 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_mssd() {
        assert!((mssd(&[0.0, 1.0, 0.0]) - 1.0).abs() < EPS);
        assert!((mssd(&[0.8, -0.8]) - 2.56).abs() < EPS);
    }

    #[test]
    fn test_autocorrelation() {
        // Alternating series is perfectly anti-persistent up to the edge term
        let alternating = [1.0, -1.0, 1.0, -1.0];
        assert!((autocorrelation(&alternating) - (-0.75)).abs() < EPS);

        let trend = [0.0, 0.25, 0.5, 0.75, 1.0];
        assert!(autocorrelation(&trend) > 0.0);
    }

    #[test]
    fn test_autocorrelation_degenerate() {
        assert_eq!(autocorrelation(&[0.1, 0.9]), DEGENERATE);
        assert_eq!(autocorrelation(&[0.3; 10]), DEGENERATE);
    }

    #[test]
    fn test_constant_series_has_zero_spread() {
        // 0.1 and 0.7 are not exact in binary; their mean drifts off the value
        assert_eq!(std_dev(&[0.1; 7]), DEGENERATE);
        assert_eq!(std_dev(&[0.7; 30]), DEGENERATE);
        assert_eq!(std_dev(&[-0.2; 14]), DEGENERATE);
        assert_eq!(mssd(&[0.1; 7]), DEGENERATE);
    }

    proptest! {
        #[test]
        fn prop_short_series_have_no_spread(v in -1.0f64..=1.0, short in 0usize..2) {
            let series = vec![v; short];
            prop_assert_eq!(std_dev(&series), 0.0);
            prop_assert_eq!(mssd(&series), 0.0);
        }

        #[test]
        fn prop_autocorrelation_needs_three_points(
            series in prop::collection::vec(-1.0f64..=1.0, 0..3),
        ) {
            prop_assert_eq!(autocorrelation(&series), 0.0);
        }

        #[test]
        fn prop_constant_series_is_degenerate(v in -1.0f64..=1.0, n in 3usize..60) {
            let series = vec![v; n];
            prop_assert_eq!(std_dev(&series), 0.0);
            prop_assert_eq!(mssd(&series), 0.0);
            prop_assert_eq!(autocorrelation(&series), 0.0);
        }

        #[test]
        fn prop_bounded_inputs_give_finite_statistics(
            series in prop::collection::vec(-1.0f64..=1.0, 0..100),
        ) {
            prop_assert!(mean(&series).abs() <= 1.0 + EPS);
            prop_assert!(std_dev(&series).is_finite());
            prop_assert!(mssd(&series) <= 4.0 + EPS);
            prop_assert!(autocorrelation(&series).is_finite());
        }
    }
}
