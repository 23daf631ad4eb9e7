//! Big Five (OCEAN) trait scores and the assessment result.

use serde::{Deserialize, Serialize};

/// Scores below this fall in the low band
pub const LOW_BAND_UPPER: u8 = 35;

/// Scores at or above this fall in the high band
pub const HIGH_BAND_LOWER: u8 = 65;

/// Big Five trait scores, each an integer on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigFiveScores {
    /// Emotional instability: negative mood, volatility, poor sleep
    pub neuroticism: u8,

    /// Positive, energetic, socially active days
    pub extraversion: u8,

    /// Stable mood and arousal, good sleep, balanced affect
    pub conscientiousness: u8,

    /// Positive mood in company, steady arousal
    pub agreeableness: u8,

    /// Varied activities, novelty, wide arousal range
    pub openness: u8,
}

impl BigFiveScores {
    pub fn get(&self, trait_type: BigFiveTrait) -> u8 {
        match trait_type {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }

    /// Get the dominant trait (highest score, earliest in display order on ties)
    pub fn dominant_trait(&self) -> BigFiveTrait {
        let mut best = BigFiveTrait::Openness;
        for trait_type in BigFiveTrait::ALL {
            if self.get(trait_type) > self.get(best) {
                best = trait_type;
            }
        }
        best
    }
}

/// Individual Big Five trait enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    /// Display order of the result page
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    /// Japanese display label
    pub fn label(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "開放性",
            BigFiveTrait::Conscientiousness => "誠実性",
            BigFiveTrait::Extraversion => "外向性",
            BigFiveTrait::Agreeableness => "協調性",
            BigFiveTrait::Neuroticism => "神経症傾向",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "Openness",
            BigFiveTrait::Conscientiousness => "Conscientiousness",
            BigFiveTrait::Extraversion => "Extraversion",
            BigFiveTrait::Agreeableness => "Agreeableness",
            BigFiveTrait::Neuroticism => "Neuroticism",
        }
    }

    pub fn low_description(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => {
                "安定した環境や慣れた方法を好む傾向があります。確実性を重視し、着実に物事を進めます。"
            }
            BigFiveTrait::Conscientiousness => {
                "柔軟で自由な生活スタイルを好みます。型にはまらない発想で物事に取り組む傾向があります。"
            }
            BigFiveTrait::Extraversion => {
                "内向的で、一人の時間やじっくりと考えることを好む傾向があります。深い思考や集中力が強みです。"
            }
            BigFiveTrait::Agreeableness => {
                "独立心が強く、自分の考えをしっかり持っています。客観的で分析的な視点が強みです。"
            }
            BigFiveTrait::Neuroticism => {
                "感情的に安定しており、ストレスに対して強い耐性があります。冷静に物事を判断できる傾向があります。"
            }
        }
    }

    pub fn balanced_description(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => {
                "新しい体験と安定のバランスが取れています。適度に新しいことに挑戦しつつ、慣れた方法も活用します。"
            }
            BigFiveTrait::Conscientiousness => {
                "計画性と柔軟性のバランスが取れています。必要に応じて規律正しくも自由にも行動できます。"
            }
            BigFiveTrait::Extraversion => {
                "内向と外向のバランスが取れています。社交的な場面も一人の時間も楽しめる柔軟性があります。"
            }
            BigFiveTrait::Agreeableness => {
                "協調性と自主性のバランスが取れています。状況に応じて他者と協力しつつ、自分の意見も持てます。"
            }
            BigFiveTrait::Neuroticism => {
                "感情の波は一般的な範囲内です。状況に応じて適度にストレスを感じますが、バランスよく対処できています。"
            }
        }
    }

    pub fn high_description(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => {
                "新しい経験や活動に積極的に取り組んでいます。多様な活動への関与が好奇心の強さを示しています。"
            }
            BigFiveTrait::Conscientiousness => {
                "自己管理能力が高く、規律正しい生活リズムを維持しています。安定した感情パターンがその証拠です。"
            }
            BigFiveTrait::Extraversion => {
                "外向的で、活動的な生活を送っています。人との交流やエネルギッシュな活動から活力を得ています。"
            }
            BigFiveTrait::Agreeableness => {
                "他者への共感力が高く、良好な対人関係を築く傾向があります。社交場面でポジティブな感情を維持できます。"
            }
            BigFiveTrait::Neuroticism => {
                "感情の変動が大きく、繊細に物事を感じ取る傾向があります。この感受性は創造性や共感力の源でもあります。"
            }
        }
    }

    /// Description for a final 0-100 score
    pub fn description(&self, score: u8) -> &'static str {
        match ScoreBand::from_score(score) {
            ScoreBand::Low => self.low_description(),
            ScoreBand::Balanced => self.balanced_description(),
            ScoreBand::High => self.high_description(),
        }
    }
}

/// Coarse band of a trait score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Balanced,
    High,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score < LOW_BAND_UPPER {
            ScoreBand::Low
        } else if score < HIGH_BAND_LOWER {
            ScoreBand::Balanced
        } else {
            ScoreBand::High
        }
    }
}

/// How much history backs an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Under two weeks of entries
    Low,
    /// At least two weeks of entries
    Medium,
    /// A month of entries spread over at least a month
    High,
}

impl ConfidenceLevel {
    pub const HIGH_MIN_ENTRIES: usize = 30;
    pub const HIGH_MIN_PERIOD_DAYS: u32 = 30;
    pub const MEDIUM_MIN_ENTRIES: usize = 14;

    pub fn from_sample(entry_count: usize, period_days: u32) -> Self {
        if entry_count >= Self::HIGH_MIN_ENTRIES && period_days >= Self::HIGH_MIN_PERIOD_DAYS {
            ConfidenceLevel::High
        } else if entry_count >= Self::MEDIUM_MIN_ENTRIES {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

/// Per-trait line of the result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDetail {
    pub key: BigFiveTrait,
    pub label: String,
    pub label_en: String,
    pub score: u8,
    pub description: String,
}

impl TraitDetail {
    pub fn new(key: BigFiveTrait, score: u8) -> Self {
        Self {
            key,
            label: key.label().to_string(),
            label_en: key.label_en().to_string(),
            score,
            description: key.description(score).to_string(),
        }
    }
}

/// Personality estimate derived from a user's entry history.
///
/// Computed fresh on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResult {
    pub scores: BigFiveScores,
    pub traits: Vec<TraitDetail>,
    pub confidence: ConfidenceLevel,
    pub entry_count: usize,
    pub period_days: u32,
}

impl PersonalityResult {
    pub fn new(scores: BigFiveScores, entry_count: usize, period_days: u32) -> Self {
        let traits = BigFiveTrait::ALL
            .into_iter()
            .map(|t| TraitDetail::new(t, scores.get(t)))
            .collect();

        Self {
            scores,
            traits,
            confidence: ConfidenceLevel::from_sample(entry_count, period_days),
            entry_count,
            period_days,
        }
    }

    /// Generate a textual summary of the result
    pub fn summary(&self) -> String {
        let dominant = self.scores.dominant_trait();

        let parts = [
            format!(
                "Dominant trait: {} ({})",
                dominant.label_en(),
                self.scores.get(dominant)
            ),
            format!("Confidence: {}", self.confidence.as_str()),
            format!("Entries: {} over {} days", self.entry_count, self.period_days),
        ];

        parts.join(" | ")
    }
}
