//! Fundamental types for the Moodscope system.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Calendar format of [`DailyEntry::date`]. Zero-padded, so lexicographic
/// order equals chronological order.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Bounds of valence and arousal
pub const AFFECT_MIN: f64 = -1.0;
pub const AFFECT_MAX: f64 = 1.0;

/// Offset of Asia/Tokyo from UTC. Japan observes no daylight saving.
const JST_OFFSET_HOURS: i64 = 9;

/// One answered daily questionnaire, as stored under `users/{uid}/entries`.
///
/// Only `date`, `valence`, `arousal` and `activities` feed the assessment;
/// the raw answers and diary text ride along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    /// Document id in the entry store, if the entry has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `YYYY-MM-DD`, one entry per user per day
    #[serde(default)]
    pub date: String,

    /// Pleasantness in [-1, 1]
    #[serde(default)]
    pub valence: f64,

    /// Activation in [-1, 1]
    #[serde(default)]
    pub arousal: f64,

    /// Raw valence answers: slider / 100 and the 1-5 rating
    #[serde(default)]
    pub valence_answers: Vec<Option<f64>>,

    /// Raw arousal answers: slider / 100 and the 1-5 rating
    #[serde(default)]
    pub arousal_answers: Vec<Option<f64>>,

    /// Free-text activity tags collected from the questionnaire
    #[serde(default)]
    pub activities: Vec<String>,

    /// Diary text
    #[serde(default)]
    pub free_text: String,
}

impl DailyEntry {
    pub fn new(
        date: impl Into<String>,
        valence: f64,
        arousal: f64,
        activities: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            date: date.into(),
            valence,
            arousal,
            valence_answers: Vec::new(),
            arousal_answers: Vec::new(),
            activities,
            free_text: String::new(),
        }
    }

    /// Parsed calendar date of this entry
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        parse_entry_date(&self.date)
    }

    /// Check the date format and that both affect values lie in [-1, 1]
    pub fn validate(&self) -> Result<()> {
        self.calendar_date()?;

        for (name, value) in [("valence", self.valence), ("arousal", self.arousal)] {
            if !(AFFECT_MIN..=AFFECT_MAX).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{} {} on {} is outside [{}, {}]",
                    name, value, self.date, AFFECT_MIN, AFFECT_MAX
                )));
            }
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` entry date
pub fn parse_entry_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, ENTRY_DATE_FORMAT)
        .map_err(|e| Error::InvalidDate(format!("{date:?}: {e}")))
}

/// Calendar date in Asia/Tokyo at the given instant
pub fn jst_date(now: DateTime<Utc>) -> NaiveDate {
    (now.naive_utc() + Duration::hours(JST_OFFSET_HOURS)).date()
}

/// Today's date in Asia/Tokyo as `YYYY-MM-DD`
pub fn today_jst() -> String {
    jst_date(Utc::now()).format(ENTRY_DATE_FORMAT).to_string()
}

/// Inclusive number of calendar days from `first` to `last`.
///
/// Returns 0 when either date is empty or unparseable, or when `last`
/// precedes `first`.
pub fn period_days(first: &str, last: &str) -> u32 {
    if first.is_empty() || last.is_empty() {
        return 0;
    }

    match (parse_entry_date(first), parse_entry_date(last)) {
        (Ok(first), Ok(last)) => {
            let span = (last - first).num_days() + 1;
            u32::try_from(span).unwrap_or(0)
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Cannot compute entry period: {}", e);
            0
        }
    }
}
