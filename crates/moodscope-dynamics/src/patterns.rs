//! Activity-pattern ratios extracted from free-form activity tags.

use std::collections::HashSet;

use moodscope_core::{ActivityTag, DailyEntry, MainActivity, Novelty};
use serde::{Deserialize, Serialize};

/// Ratio reported for every pattern when there is no behavioural evidence
pub const NEUTRAL_RATIO: f64 = 0.5;

/// Behavioural ratios, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatterns {
    /// Share of days with some or a lot of social contact
    pub social_frequency: f64,
    /// Share of days the user tried something new
    pub novelty_rate: f64,
    /// Mean 1-5 sleep rating mapped linearly onto [0, 1]
    pub sleep_quality: f64,
    /// Share of days with exercise
    pub exercise_frequency: f64,
    /// Distinct main activities seen over all days, out of six
    pub activity_diversity: f64,
}

impl ActivityPatterns {
    pub fn neutral() -> Self {
        Self {
            social_frequency: NEUTRAL_RATIO,
            novelty_rate: NEUTRAL_RATIO,
            sleep_quality: NEUTRAL_RATIO,
            exercise_frequency: NEUTRAL_RATIO,
            activity_diversity: NEUTRAL_RATIO,
        }
    }

    /// Extract patterns from entries. Order is irrelevant; unknown tags are skipped.
    pub fn from_entries(entries: &[DailyEntry]) -> Self {
        if entries.is_empty() {
            return Self::neutral();
        }

        let mut counter = PatternCounter::default();
        for entry in entries {
            counter.add_day(&entry.activities);
        }

        let patterns = counter.finish(entries.len());
        tracing::debug!(?patterns, "Extracted activity patterns");
        patterns
    }
}

impl Default for ActivityPatterns {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Default)]
struct PatternCounter {
    social_days: usize,
    novelty_days: usize,
    exercise_days: usize,
    sleep_sum: f64,
    sleep_samples: usize,
    main_activities: HashSet<MainActivity>,
}

impl PatternCounter {
    fn add_day(&mut self, tags: &[String]) {
        let mut social = false;
        let mut novelty = false;
        let mut exercise = false;

        for tag in tags.iter().filter_map(|t| ActivityTag::parse(t)) {
            match tag {
                ActivityTag::Social(contact) => social |= contact.is_social(),
                ActivityTag::Novelty(answer) => novelty |= answer == Novelty::Yes,
                ActivityTag::SleepRating(rating) => {
                    self.sleep_sum += rating;
                    self.sleep_samples += 1;
                }
                ActivityTag::Main(activity) => {
                    exercise |= activity == MainActivity::Exercise;
                    self.main_activities.insert(activity);
                }
                ActivityTag::Meal(_) => {}
            }
        }

        self.social_days += social as usize;
        self.novelty_days += novelty as usize;
        self.exercise_days += exercise as usize;
    }

    fn finish(self, days: usize) -> ActivityPatterns {
        let n = days as f64;

        let sleep_quality = if self.sleep_samples > 0 {
            (self.sleep_sum / self.sleep_samples as f64 - 1.0) / 4.0
        } else {
            NEUTRAL_RATIO
        };

        ActivityPatterns {
            social_frequency: self.social_days as f64 / n,
            novelty_rate: self.novelty_days as f64 / n,
            sleep_quality,
            exercise_frequency: self.exercise_days as f64 / n,
            activity_diversity: self.main_activities.len() as f64 / MainActivity::ALL.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(tags: &[&str]) -> DailyEntry {
        DailyEntry::new("2025-01-01", 0.0, 0.0, tags.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_empty_is_neutral() {
        let patterns = ActivityPatterns::from_entries(&[]);
        assert_eq!(patterns, ActivityPatterns::neutral());
        assert_eq!(patterns.activity_diversity, NEUTRAL_RATIO);
    }

    #[test]
    fn test_ratios() {
        let entries = vec![
            day(&["仕事", "普通", "4", "たくさん", "はい"]),
            day(&["運動", "学習", "2", "ほとんどなし", "いいえ"]),
            day(&["仕事", "少し"]),
            day(&[]),
        ];

        let p = ActivityPatterns::from_entries(&entries);
        assert_eq!(p.social_frequency, 0.5);
        assert_eq!(p.novelty_rate, 0.25);
        assert_eq!(p.exercise_frequency, 0.25);
        // Mean rating 3 maps to the midpoint
        assert_eq!(p.sleep_quality, 0.5);
        assert_eq!(p.activity_diversity, 3.0 / 6.0);
    }

    #[test]
    fn test_no_sleep_ratings_is_neutral() {
        let p = ActivityPatterns::from_entries(&[day(&["仕事"]), day(&["家事"])]);
        assert_eq!(p.sleep_quality, NEUTRAL_RATIO);
    }

    #[test]
    fn test_sleep_rating_extremes() {
        assert_eq!(ActivityPatterns::from_entries(&[day(&["5"])]).sleep_quality, 1.0);
        assert_eq!(ActivityPatterns::from_entries(&[day(&["1"])]).sleep_quality, 0.0);
    }

    #[test]
    fn test_malformed_tags_are_skipped() {
        let p = ActivityPatterns::from_entries(&[day(&["7", "-3", "abc", "", "3"])]);
        assert_eq!(p.sleep_quality, 0.5);
        assert_eq!(p.social_frequency, 0.0);
        assert_eq!(p.activity_diversity, 0.0);
    }

    #[test]
    fn test_duplicate_tags_count_once_per_day() {
        let p =
            ActivityPatterns::from_entries(&[day(&["運動", "運動", "たくさん", "少し"])]);
        assert_eq!(p.exercise_frequency, 1.0);
        assert_eq!(p.social_frequency, 1.0);
        assert_eq!(p.activity_diversity, 1.0 / 6.0);
    }

    #[test]
    fn test_every_sleep_like_tag_is_sampled() {
        let p = ActivityPatterns::from_entries(&[day(&["5", "3"])]);
        assert_eq!(p.sleep_quality, 0.75);
    }
}
