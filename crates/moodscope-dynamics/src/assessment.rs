//! Personality assessment over a user's daily entries.

use moodscope_core::{period_days, DailyEntry, Error, PersonalityResult, Result};

use crate::affect::AffectDynamics;
use crate::config::AssessmentConfig;
use crate::patterns::ActivityPatterns;
use crate::trait_mapper::TraitMapper;

/// Minimum number of entries before an assessment is meaningful
pub const MIN_ENTRIES: usize = 7;

/// Caller-side guard: reject histories shorter than `required`
pub fn ensure_sufficient_entries(entries: &[DailyEntry], required: usize) -> Result<()> {
    if entries.len() < required {
        return Err(Error::InsufficientData {
            required,
            available: entries.len(),
        });
    }
    Ok(())
}

/// Assess with the default weights.
///
/// Callers check [`MIN_ENTRIES`] first; this function does not.
pub fn assess(entries: &[DailyEntry]) -> PersonalityResult {
    PersonalityAssessor::default().assess(entries)
}

/// Guarded [`assess`]
pub fn try_assess(entries: &[DailyEntry]) -> Result<PersonalityResult> {
    PersonalityAssessor::default().try_assess(entries)
}

/// Stateless Big Five assessor
#[derive(Debug, Clone)]
pub struct PersonalityAssessor {
    mapper: TraitMapper,
    min_entries: usize,
}

impl PersonalityAssessor {
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            mapper: TraitMapper::new(config.weights),
            min_entries: config.min_entries,
        }
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// Score a history given in any order. The caller's slice is left untouched.
    pub fn assess(&self, entries: &[DailyEntry]) -> PersonalityResult {
        let mut sorted = entries.to_vec();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));

        let adp = AffectDynamics::from_entries(&sorted);
        let patterns = ActivityPatterns::from_entries(&sorted);
        let scores = self.mapper.predict(&adp, &patterns);

        let period = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => period_days(&first.date, &last.date),
            _ => 0,
        };

        let result = PersonalityResult::new(scores, sorted.len(), period);
        tracing::debug!("{}", result.summary());
        result
    }

    /// Apply the minimum-entries guard, then [`PersonalityAssessor::assess`]
    pub fn try_assess(&self, entries: &[DailyEntry]) -> Result<PersonalityResult> {
        ensure_sufficient_entries(entries, self.min_entries)?;
        Ok(self.assess(entries))
    }
}

impl Default for PersonalityAssessor {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use moodscope_core::{BigFiveTrait, ConfidenceLevel, ENTRY_DATE_FORMAT};
    use proptest::prelude::*;

    /// `offset` days after 2025-01-01
    fn day(offset: u32) -> String {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (start + Duration::days(offset as i64))
            .format(ENTRY_DATE_FORMAT)
            .to_string()
    }

    fn entry(offset: u32, valence: f64, arousal: f64, tags: &[&str]) -> DailyEntry {
        DailyEntry::new(
            day(offset),
            valence,
            arousal,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_guard() {
        let six: Vec<_> = (0..6).map(|i| entry(i, 0.0, 0.0, &[])).collect();
        let err = ensure_sufficient_entries(&six, MIN_ENTRIES).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                required: 7,
                available: 6
            }
        ));
        assert!(try_assess(&six).is_err());

        let seven: Vec<_> = (0..7).map(|i| entry(i, 0.0, 0.0, &[])).collect();
        assert!(try_assess(&seven).is_ok());
    }

    #[test]
    fn test_alternating_week() {
        let entries: Vec<_> = (0..7)
            .map(|i| entry(i, if i % 2 == 0 { 0.8 } else { -0.8 }, 0.0, &[]))
            .collect();

        let adp = AffectDynamics::from_entries(&entries);
        assert!((adp.valence.mssd - 2.56).abs() < 1e-9);
        assert_eq!(adp.arousal.sd, 0.0);
        assert_eq!(adp.arousal.autocorrelation, 0.0);

        let result = assess(&entries);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
        assert_eq!(result.entry_count, 7);
        assert_eq!(result.period_days, 7);
        // Instability saturates, variability is high: a volatile week reads as neurotic
        assert!(result.scores.neuroticism >= 50);
    }

    #[test]
    fn test_steady_exercising_month() {
        let entries: Vec<_> = (0..30).map(|i| entry(i, 0.5, 0.5, &["運動"])).collect();

        let patterns = ActivityPatterns::from_entries(&entries);
        assert_eq!(patterns.exercise_frequency, 1.0);
        assert_eq!(patterns.activity_diversity, 1.0 / 6.0);

        let adp = AffectDynamics::from_entries(&entries);
        assert_eq!(adp.valence.sd, 0.0);

        let result = assess(&entries);
        assert_eq!(result.period_days, 30);
        assert_eq!(result.confidence, ConfidenceLevel::High);

        // Exact scores for the default table
        assert_eq!(result.scores.neuroticism, 15);
        assert_eq!(result.scores.extraversion, 48);
        assert_eq!(result.scores.conscientiousness, 78);
        assert_eq!(result.scores.agreeableness, 60);
        assert_eq!(result.scores.openness, 21);
    }

    #[test]
    fn test_confidence_by_count() {
        let fortnight: Vec<_> = (0..14).map(|i| entry(i * 10, 0.0, 0.0, &[])).collect();
        assert_eq!(assess(&fortnight).confidence, ConfidenceLevel::Medium);

        // Thirty entries over ten distinct days
        let crowded: Vec<_> = (0..30).map(|i| entry(i % 10, 0.0, 0.0, &[])).collect();
        let result = assess(&crowded);
        assert_eq!(result.period_days, 10);
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let entries = vec![
            entry(3, 0.1, 0.0, &[]),
            entry(1, 0.2, 0.0, &[]),
            entry(2, 0.3, 0.0, &[]),
        ];
        let before = entries.clone();
        assess(&entries);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_descriptions_follow_scores() {
        let entries: Vec<_> = (0..7).map(|i| entry(i, 0.0, 0.0, &[])).collect();
        let result = assess(&entries);
        for detail in &result.traits {
            assert_eq!(detail.score, result.scores.get(detail.key));
            assert_eq!(detail.description, detail.key.description(detail.score));
        }
        assert_eq!(result.traits[0].key, BigFiveTrait::Openness);
    }

    #[test]
    fn test_unparseable_dates_give_zero_period() {
        let entries: Vec<_> = (0..7)
            .map(|i| DailyEntry::new(format!("day-{i}"), 0.0, 0.0, vec![]))
            .collect();
        let result = assess(&entries);
        assert_eq!(result.period_days, 0);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
    }

    fn arb_entries() -> impl Strategy<Value = Vec<DailyEntry>> {
        let tag = prop::sample::select(vec![
            "仕事",
            "学習",
            "運動",
            "家事",
            "買い物",
            "睡眠",
            "たくさん",
            "少し",
            "はい",
            "いいえ",
            "1",
            "3",
            "5",
            "ほとんどなし",
            "散歩",
        ]);
        prop::collection::vec(
            (-1.0f64..=1.0, -1.0f64..=1.0, prop::collection::vec(tag, 0..6)),
            7..45,
        )
        .prop_map(|days| {
            days.into_iter()
                .enumerate()
                .map(|(i, (v, a, tags))| entry(i as u32, v, a, &tags))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_scores_in_range(entries in arb_entries()) {
            let result = assess(&entries);
            for t in BigFiveTrait::ALL {
                prop_assert!(result.scores.get(t) <= 100);
            }
            prop_assert_eq!(result.entry_count, entries.len());
        }

        #[test]
        fn prop_order_independent(
            (entries, shuffled) in arb_entries()
                .prop_flat_map(|e| (Just(e.clone()), Just(e).prop_shuffle())),
        ) {
            prop_assert_eq!(assess(&entries), assess(&shuffled));
        }
    }
}
