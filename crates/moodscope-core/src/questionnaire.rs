//! Daily questionnaire vocabulary and answer scoring.
//!
//! ## Questions
//!
//! | Id | Kind | Stored as |
//! |----|------|-----------|
//! | `valence-1` | slider -100..100 | valence |
//! | `valence-2` | rating "1".."5" | valence |
//! | `arousal-1` | slider -100..100 | arousal |
//! | `arousal-2` | rating "1".."5" | arousal |
//! | `activity-1` | multi-select [`MainActivity`] | activity tags |
//! | `activity-2` | [`Meal`] | activity tag |
//! | `activity-3` | sleep rating "1".."5" | activity tag |
//! | `activity-4` | [`SocialContact`] | activity tag |
//! | `activity-5` | [`Novelty`] | activity tag |
//! | `freetext-1` | diary | free text |
//!
//! Activity answers are persisted as plain string tags, so the enums here
//! mirror the exact option values offered by the questionnaire.

use serde::{Deserialize, Serialize};

use crate::types::DailyEntry;

/// Lowest accepted sleep-quality rating
pub const SLEEP_RATING_MIN: f64 = 1.0;
/// Highest accepted sleep-quality rating
pub const SLEEP_RATING_MAX: f64 = 5.0;

/// Main activity of the day (`activity-1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainActivity {
    Work,
    Study,
    Exercise,
    Chores,
    Shopping,
    Sleep,
}

impl MainActivity {
    pub const ALL: [MainActivity; 6] = [
        MainActivity::Work,
        MainActivity::Study,
        MainActivity::Exercise,
        MainActivity::Chores,
        MainActivity::Shopping,
        MainActivity::Sleep,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            MainActivity::Work => "仕事",
            MainActivity::Study => "学習",
            MainActivity::Exercise => "運動",
            MainActivity::Chores => "家事",
            MainActivity::Shopping => "買い物",
            MainActivity::Sleep => "睡眠",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.tag() == tag)
    }
}

/// How well the user ate (`activity-2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meal {
    Well,
    Normal,
    Little,
    Skipped,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Well, Meal::Normal, Meal::Little, Meal::Skipped];

    pub fn tag(&self) -> &'static str {
        match self {
            Meal::Well => "しっかり食べた",
            Meal::Normal => "普通",
            Meal::Little => "あまり食べなかった",
            Meal::Skipped => "食べなかった",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.tag() == tag)
    }
}

/// Amount of social contact (`activity-4`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialContact {
    Lots,
    Some,
    Barely,
    NoneAtAll,
}

impl SocialContact {
    pub const ALL: [SocialContact; 4] = [
        SocialContact::Lots,
        SocialContact::Some,
        SocialContact::Barely,
        SocialContact::NoneAtAll,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            SocialContact::Lots => "たくさん",
            SocialContact::Some => "少し",
            SocialContact::Barely => "ほとんどなし",
            SocialContact::NoneAtAll => "まったくなし",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Whether the day counts as a social day
    pub fn is_social(&self) -> bool {
        matches!(self, SocialContact::Lots | SocialContact::Some)
    }
}

/// Whether the user tried something new (`activity-5`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Novelty {
    Yes,
    No,
}

impl Novelty {
    pub fn tag(&self) -> &'static str {
        match self {
            Novelty::Yes => "はい",
            Novelty::No => "いいえ",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        [Novelty::Yes, Novelty::No].into_iter().find(|n| n.tag() == tag)
    }
}

/// A classified activity tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivityTag {
    Main(MainActivity),
    Meal(Meal),
    Social(SocialContact),
    Novelty(Novelty),
    /// Sleep-quality rating in [1, 5]
    SleepRating(f64),
}

impl ActivityTag {
    /// Classify a stored tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        if let Some(rating) = parse_sleep_rating(tag) {
            return Some(ActivityTag::SleepRating(rating));
        }

        MainActivity::from_tag(tag)
            .map(ActivityTag::Main)
            .or_else(|| SocialContact::from_tag(tag).map(ActivityTag::Social))
            .or_else(|| Novelty::from_tag(tag).map(ActivityTag::Novelty))
            .or_else(|| Meal::from_tag(tag).map(ActivityTag::Meal))
    }
}

/// Any tag reading as a decimal number in [1, 5] is a sleep rating,
/// whichever question produced it.
pub fn parse_sleep_rating(tag: &str) -> Option<f64> {
    let value: f64 = tag.trim().parse().ok()?;
    (SLEEP_RATING_MIN..=SLEEP_RATING_MAX)
        .contains(&value)
        .then_some(value)
}

/// Raw questionnaire answers keyed by question id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(rename = "valence-1", default)]
    pub valence_slider: Option<f64>,
    #[serde(rename = "valence-2", default)]
    pub valence_rating: Option<String>,
    #[serde(rename = "arousal-1", default)]
    pub arousal_slider: Option<f64>,
    #[serde(rename = "arousal-2", default)]
    pub arousal_rating: Option<String>,
    #[serde(rename = "activity-1", default)]
    pub main_activities: Vec<String>,
    #[serde(rename = "activity-2", default)]
    pub meal: Option<String>,
    #[serde(rename = "activity-3", default)]
    pub sleep: Option<String>,
    #[serde(rename = "activity-4", default)]
    pub social: Option<String>,
    #[serde(rename = "activity-5", default)]
    pub novelty: Option<String>,
    #[serde(rename = "freetext-1", default)]
    pub free_text: Option<String>,
}

/// Valence and arousal derived from one set of answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectReading {
    pub valence: f64,
    pub arousal: f64,
    /// Slider / 100 and the parsed rating
    pub valence_answers: [Option<f64>; 2],
    pub arousal_answers: [Option<f64>; 2],
}

/// Combine a slider (-100..100) and a 1-5 rating into one [-1, 1] value.
///
/// Slider maps as value / 100, the rating as (value - 3) / 2; a missing or
/// non-numeric rating contributes 0. Returns the rounded mean and the raw
/// answers.
fn combine(slider: Option<f64>, rating: Option<&str>) -> (f64, [Option<f64>; 2]) {
    let slider = slider.unwrap_or(0.0) / 100.0;
    let rating = rating.and_then(|r| r.trim().parse::<f64>().ok());
    let from_rating = rating.map_or(0.0, |r| (r - 3.0) / 2.0);

    (round_hundredths((slider + from_rating) / 2.0), [Some(slider), rating])
}

/// Round half up to two decimals
fn round_hundredths(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}

impl QuizAnswers {
    pub fn score_affect(&self) -> AffectReading {
        let (valence, valence_answers) =
            combine(self.valence_slider, self.valence_rating.as_deref());
        let (arousal, arousal_answers) =
            combine(self.arousal_slider, self.arousal_rating.as_deref());

        AffectReading {
            valence,
            arousal,
            valence_answers,
            arousal_answers,
        }
    }

    /// Activity tags in storage order: main activities, then meal, sleep,
    /// social and novelty answers.
    pub fn collect_activities(&self) -> Vec<String> {
        let mut tags = self.main_activities.clone();

        for answer in [&self.meal, &self.sleep, &self.social, &self.novelty] {
            if let Some(value) = answer.as_deref().filter(|v| !v.is_empty()) {
                tags.push(value.to_string());
            }
        }

        tags
    }

    /// Build the entry to store for `date`
    pub fn into_entry(self, date: impl Into<String>) -> DailyEntry {
        let reading = self.score_affect();
        let activities = self.collect_activities();

        let mut entry = DailyEntry::new(date, reading.valence, reading.arousal, activities);
        entry.valence_answers = reading.valence_answers.to_vec();
        entry.arousal_answers = reading.arousal_answers.to_vec();
        entry.free_text = self.free_text.unwrap_or_default();
        entry
    }
}

/// Threshold on either axis for a non-neutral label
const CIRCUMPLEX_THRESHOLD: f64 = 0.3;

/// Region of Russell's circumplex a valence/arousal point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionLabel {
    Excited,
    Calm,
    Tense,
    Depressed,
    Happy,
    Unpleasant,
    Aroused,
    Subdued,
    Neutral,
}

impl EmotionLabel {
    pub fn classify(valence: f64, arousal: f64) -> Self {
        let t = CIRCUMPLEX_THRESHOLD;
        let pleasant = valence > t;
        let unpleasant = valence < -t;
        let activated = arousal > t;
        let deactivated = arousal < -t;

        match (pleasant, unpleasant, activated, deactivated) {
            (true, _, true, _) => EmotionLabel::Excited,
            (true, _, _, true) => EmotionLabel::Calm,
            (_, true, true, _) => EmotionLabel::Tense,
            (_, true, _, true) => EmotionLabel::Depressed,
            (true, _, _, _) => EmotionLabel::Happy,
            (_, true, _, _) => EmotionLabel::Unpleasant,
            (_, _, true, _) => EmotionLabel::Aroused,
            (_, _, _, true) => EmotionLabel::Subdued,
            _ => EmotionLabel::Neutral,
        }
    }

    /// Japanese display label
    pub fn label(&self) -> &'static str {
        match self {
            EmotionLabel::Excited => "興奮・喜び",
            EmotionLabel::Calm => "穏やか・満足",
            EmotionLabel::Tense => "怒り・緊張",
            EmotionLabel::Depressed => "悲しみ・倦怠",
            EmotionLabel::Happy => "幸福",
            EmotionLabel::Unpleasant => "不快",
            EmotionLabel::Aroused => "覚醒",
            EmotionLabel::Subdued => "沈静",
            EmotionLabel::Neutral => "ニュートラル",
        }
    }
}
