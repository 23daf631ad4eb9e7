//! Big Five trait mapping from affect dynamics and activity patterns.
//!
//! ## Feature-to-Trait Mappings
//!
//! | Trait | Features (weight) |
//! |-------|-------------------|
//! | Neuroticism | negative valence (0.4), valence variability (0.3), valence instability (0.2), poor sleep (0.1) |
//! | Extraversion | positive valence (0.35), high arousal (0.25), social frequency (0.25), activity diversity (0.15) |
//! | Conscientiousness | valence stability (0.3), arousal stability (0.25), sleep quality (0.25), emotional balance (0.2) |
//! | Agreeableness | positive valence (0.4), social frequency (0.3), arousal stability (0.2), valence stability (0.1) |
//! | Openness | activity diversity (0.35), novelty rate (0.3), arousal variability (0.2), exercise frequency (0.15) |
//!
//! ## Research Basis
//!
//! - Kuppens et al. (2007) - Neuroticism and negative affect level/variability
//! - Augustine & Larsen (2012) - Extraversion, positive affect and arousal
//! - Segerstrom et al. (2003) - Conscientiousness and affective stability
//! - Fleeson (2001) - Openness and breadth of experience
//! - Jahng et al. (2008) - MSSD as an instability index
//! - Kuppens et al. (2010) - Autocorrelation as emotional inertia

use moodscope_core::{BigFiveScores, BigFiveTrait, Error, Result};
use serde::{Deserialize, Serialize};

use crate::affect::AffectDynamics;
use crate::patterns::ActivityPatterns;

/// Practical ceiling of a [-1, 1] series' standard deviation
pub const MAX_PRACTICAL_SD: f64 = 1.0;

/// Practical ceiling of a [-1, 1] series' MSSD. The theoretical maximum is
/// 4.0; values above 2.0 saturate.
pub const MAX_PRACTICAL_MSSD: f64 = 2.0;

/// Allowed drift of a weight vector's sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Normalized input a trait weight can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    NegativeValence,
    PositiveValence,
    HighArousal,
    ValenceVariability,
    ValenceInstability,
    ValenceStability,
    ArousalStability,
    ArousalVariability,
    EmotionalBalance,
    SleepQuality,
    PoorSleep,
    SocialFrequency,
    NoveltyRate,
    ExerciseFrequency,
    ActivityDiversity,
}

/// Map a [-1, 1] mean onto [0, 1]
fn normalize(v: f64) -> f64 {
    (v + 1.0) / 2.0
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Normalized feature vector for trait mapping, every value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFeatures {
    negative_valence: f64,
    positive_valence: f64,
    high_arousal: f64,
    valence_variability: f64,
    valence_instability: f64,
    valence_stability: f64,
    arousal_stability: f64,
    arousal_variability: f64,
    emotional_balance: f64,
    sleep_quality: f64,
    poor_sleep: f64,
    social_frequency: f64,
    novelty_rate: f64,
    exercise_frequency: f64,
    activity_diversity: f64,
}

impl NormalizedFeatures {
    pub fn new(adp: &AffectDynamics, patterns: &ActivityPatterns) -> Self {
        let valence = &adp.valence;
        let arousal = &adp.arousal;

        Self {
            negative_valence: clamp01(1.0 - normalize(valence.mean)),
            positive_valence: clamp01(normalize(valence.mean)),
            high_arousal: clamp01(normalize(arousal.mean)),
            valence_variability: clamp01(valence.sd / MAX_PRACTICAL_SD),
            valence_instability: clamp01(valence.mssd / MAX_PRACTICAL_MSSD),
            valence_stability: clamp01(1.0 - valence.sd / MAX_PRACTICAL_SD),
            arousal_stability: clamp01(1.0 - arousal.sd / MAX_PRACTICAL_SD),
            arousal_variability: clamp01(arousal.sd / MAX_PRACTICAL_SD),
            emotional_balance: clamp01(1.0 - valence.mean.abs()),
            sleep_quality: patterns.sleep_quality,
            poor_sleep: clamp01(1.0 - patterns.sleep_quality),
            social_frequency: patterns.social_frequency,
            novelty_rate: patterns.novelty_rate,
            exercise_frequency: patterns.exercise_frequency,
            activity_diversity: patterns.activity_diversity,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::NegativeValence => self.negative_valence,
            Feature::PositiveValence => self.positive_valence,
            Feature::HighArousal => self.high_arousal,
            Feature::ValenceVariability => self.valence_variability,
            Feature::ValenceInstability => self.valence_instability,
            Feature::ValenceStability => self.valence_stability,
            Feature::ArousalStability => self.arousal_stability,
            Feature::ArousalVariability => self.arousal_variability,
            Feature::EmotionalBalance => self.emotional_balance,
            Feature::SleepQuality => self.sleep_quality,
            Feature::PoorSleep => self.poor_sleep,
            Feature::SocialFrequency => self.social_frequency,
            Feature::NoveltyRate => self.novelty_rate,
            Feature::ExerciseFrequency => self.exercise_frequency,
            Feature::ActivityDiversity => self.activity_diversity,
        }
    }
}

/// One term of a trait's linear combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedFeature {
    pub feature: Feature,
    pub weight: f64,
}

/// Feature weights for a single trait, applied in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitWeights(pub Vec<WeightedFeature>);

impl TraitWeights {
    pub fn new(terms: &[(Feature, f64)]) -> Self {
        Self(
            terms
                .iter()
                .map(|&(feature, weight)| WeightedFeature { feature, weight })
                .collect(),
        )
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().map(|t| t.weight).sum()
    }

    /// Weighted sum of the features, clamped to [0, 1]
    pub fn apply(&self, features: &NormalizedFeatures) -> f64 {
        let score = self
            .0
            .iter()
            .fold(0.0, |acc, t| acc + features.get(t.feature) * t.weight);
        clamp01(score)
    }
}

/// Weight table for all five traits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitMappingConfig {
    pub neuroticism: TraitWeights,
    pub extraversion: TraitWeights,
    pub conscientiousness: TraitWeights,
    pub agreeableness: TraitWeights,
    pub openness: TraitWeights,
}

impl Default for TraitMappingConfig {
    fn default() -> Self {
        use Feature::*;

        Self {
            // Negative, volatile, unstable mood and poor sleep
            neuroticism: TraitWeights::new(&[
                (NegativeValence, 0.4),
                (ValenceVariability, 0.3),
                (ValenceInstability, 0.2),
                (PoorSleep, 0.1),
            ]),

            // Positive, energetic, social and varied days
            extraversion: TraitWeights::new(&[
                (PositiveValence, 0.35),
                (HighArousal, 0.25),
                (SocialFrequency, 0.25),
                (ActivityDiversity, 0.15),
            ]),

            // Steady mood and arousal, good sleep, no extremes
            conscientiousness: TraitWeights::new(&[
                (ValenceStability, 0.3),
                (ArousalStability, 0.25),
                (SleepQuality, 0.25),
                (EmotionalBalance, 0.2),
            ]),

            // Positive mood around others, steady arousal
            agreeableness: TraitWeights::new(&[
                (PositiveValence, 0.4),
                (SocialFrequency, 0.3),
                (ArousalStability, 0.2),
                (ValenceStability, 0.1),
            ]),

            // Breadth of activity, novelty, wide arousal range, exercise
            openness: TraitWeights::new(&[
                (ActivityDiversity, 0.35),
                (NoveltyRate, 0.3),
                (ArousalVariability, 0.2),
                (ExerciseFrequency, 0.15),
            ]),
        }
    }
}

impl TraitMappingConfig {
    pub fn weights(&self, trait_type: BigFiveTrait) -> &TraitWeights {
        match trait_type {
            BigFiveTrait::Openness => &self.openness,
            BigFiveTrait::Conscientiousness => &self.conscientiousness,
            BigFiveTrait::Extraversion => &self.extraversion,
            BigFiveTrait::Agreeableness => &self.agreeableness,
            BigFiveTrait::Neuroticism => &self.neuroticism,
        }
    }

    /// Every trait's weights must be non-negative and sum to 1.0
    pub fn validate(&self) -> Result<()> {
        for trait_type in BigFiveTrait::ALL {
            let weights = self.weights(trait_type);

            if let Some(term) = weights.0.iter().find(|t| t.weight.is_nan() || t.weight < 0.0) {
                return Err(Error::Config(format!(
                    "{} weight for {:?} must be non-negative, got {}",
                    trait_type.label_en(),
                    term.feature,
                    term.weight
                )));
            }

            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(Error::Config(format!(
                    "{} weights must sum to 1.0, got {}",
                    trait_type.label_en(),
                    sum
                )));
            }
        }
        Ok(())
    }
}

/// Big Five trait mapper
#[derive(Debug, Clone, Default)]
pub struct TraitMapper {
    config: TraitMappingConfig,
}

impl TraitMapper {
    pub fn new(config: TraitMappingConfig) -> Self {
        Self { config }
    }

    /// Map dynamics and patterns to 0-100 trait scores
    pub fn predict(&self, adp: &AffectDynamics, patterns: &ActivityPatterns) -> BigFiveScores {
        let features = NormalizedFeatures::new(adp, patterns);
        let score = |t: BigFiveTrait| to_score(self.config.weights(t).apply(&features));

        BigFiveScores {
            neuroticism: score(BigFiveTrait::Neuroticism),
            extraversion: score(BigFiveTrait::Extraversion),
            conscientiousness: score(BigFiveTrait::Conscientiousness),
            agreeableness: score(BigFiveTrait::Agreeableness),
            openness: score(BigFiveTrait::Openness),
        }
    }
}

/// Scale a [0, 1] composite to a rounded 0-100 score
fn to_score(composite: f64) -> u8 {
    (clamp01(composite) * 100.0).round() as u8
}
