//! Affect dynamics parameters (ADP) over the valence and arousal series.

use moodscope_core::DailyEntry;
use serde::{Deserialize, Serialize};

use crate::stats;

/// Level, spread, instability and inertia of one daily series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesDynamics {
    pub mean: f64,
    /// Sample standard deviation
    pub sd: f64,
    /// Mean squared successive difference
    pub mssd: f64,
    /// Lag-1 autocorrelation
    pub autocorrelation: f64,
}

impl SeriesDynamics {
    pub fn from_series(series: &[f64]) -> Self {
        Self {
            mean: stats::mean(series),
            sd: stats::std_dev(series),
            mssd: stats::mssd(series),
            autocorrelation: stats::autocorrelation(series),
        }
    }
}

/// Dynamics of both affect dimensions.
///
/// The series are taken in the order the entries are given; callers sort
/// by date first since MSSD and autocorrelation are order-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectDynamics {
    pub valence: SeriesDynamics,
    pub arousal: SeriesDynamics,
}

impl AffectDynamics {
    pub fn from_entries(entries: &[DailyEntry]) -> Self {
        let valences: Vec<f64> = entries.iter().map(|e| e.valence).collect();
        let arousals: Vec<f64> = entries.iter().map(|e| e.arousal).collect();

        let dynamics = Self {
            valence: SeriesDynamics::from_series(&valences),
            arousal: SeriesDynamics::from_series(&arousals),
        };

        tracing::debug!(
            valence_mean = dynamics.valence.mean,
            valence_sd = dynamics.valence.sd,
            arousal_mean = dynamics.arousal.mean,
            arousal_sd = dynamics.arousal.sd,
            "Computed affect dynamics over {} entries",
            entries.len()
        );

        dynamics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(valences: &[f64], arousal: f64) -> Vec<DailyEntry> {
        valences
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                DailyEntry::new(format!("2025-01-{:02}", i + 1), v, arousal, vec![])
            })
            .collect()
    }

    #[test]
    fn test_alternating_valence() {
        let series = [0.8, -0.8, 0.8, -0.8, 0.8, -0.8, 0.8];
        let adp = AffectDynamics::from_entries(&entries(&series, 0.0));

        // Sample SD of seven alternating ±0.8 values
        assert!((adp.valence.sd - 0.8552).abs() < 1e-3);
        assert!((adp.valence.mssd - 2.56).abs() < 1e-9);
        assert!(adp.valence.autocorrelation < 0.0);
        assert_eq!(adp.arousal.sd, 0.0);
        assert_eq!(adp.arousal.autocorrelation, 0.0);
    }

    #[test]
    fn test_empty_entries() {
        let adp = AffectDynamics::from_entries(&[]);
        assert_eq!(adp, AffectDynamics::default());
    }
}
