//! Feedback records and the input shapes that produce them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three rated fields of a feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Satisfaction,
    EaseOfUse,
    Nps,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Satisfaction, Field::EaseOfUse, Field::Nps];

    /// Inclusive `(min, max)` bounds of the field.
    pub fn bounds(self) -> (u8, u8) {
        match self {
            Field::Satisfaction | Field::EaseOfUse => (1, 5),
            Field::Nps => (0, 10),
        }
    }

    pub fn contains(self, value: i64) -> bool {
        let (min, max) = self.bounds();
        value >= i64::from(min) && value <= i64::from(max)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Satisfaction => "satisfaction",
            Field::EaseOfUse => "easeOfUse",
            Field::Nps => "nps",
        };
        f.write_str(name)
    }
}

/// A stored survey submission.
///
/// Only the service creates these; ratings are always within
/// [`Field::bounds`] once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(rename = "Id", alias = "id")]
    pub id: u64,
    pub satisfaction: u8,
    pub ease_of_use: u8,
    pub nps: u8,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
}

impl FeedbackRecord {
    pub fn rating(&self, field: Field) -> u8 {
        match field {
            Field::Satisfaction => self.satisfaction,
            Field::EaseOfUse => self.ease_of_use,
            Field::Nps => self.nps,
        }
    }

    pub fn nps_category(&self) -> NpsCategory {
        NpsCategory::from_score(self.nps)
    }
}

/// Raw answers as collected by the form. Nothing here is checked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInput {
    pub satisfaction: i64,
    pub ease_of_use: i64,
    pub nps: i64,
}

impl Default for FeedbackInput {
    fn default() -> Self {
        Self {
            satisfaction: 3,
            ease_of_use: 3,
            nps: 7,
        }
    }
}

impl FeedbackInput {
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Satisfaction => self.satisfaction,
            Field::EaseOfUse => self.ease_of_use,
            Field::Nps => self.nps,
        }
    }

    pub fn set(&mut self, field: Field, value: i64) {
        match field {
            Field::Satisfaction => self.satisfaction = value,
            Field::EaseOfUse => self.ease_of_use = value,
            Field::Nps => self.nps = value,
        }
    }
}

/// Answers that passed validation. Constructed only by
/// [`crate::survey::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInput {
    satisfaction: u8,
    ease_of_use: u8,
    nps: u8,
}

impl ValidatedInput {
    pub(crate) fn new(satisfaction: u8, ease_of_use: u8, nps: u8) -> Self {
        Self {
            satisfaction,
            ease_of_use,
            nps,
        }
    }

    pub fn satisfaction(&self) -> u8 {
        self.satisfaction
    }

    pub fn ease_of_use(&self) -> u8 {
        self.ease_of_use
    }

    pub fn nps(&self) -> u8 {
        self.nps
    }
}

/// Partial update for an existing record. `None` leaves the field as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPatch {
    pub satisfaction: Option<i64>,
    pub ease_of_use: Option<i64>,
    pub nps: Option<i64>,
}

impl FeedbackPatch {
    pub fn get(&self, field: Field) -> Option<i64> {
        match field {
            Field::Satisfaction => self.satisfaction,
            Field::EaseOfUse => self.ease_of_use,
            Field::Nps => self.nps,
        }
    }

    /// Input formed by laying this patch over `record`.
    pub fn merged_with(&self, record: &FeedbackRecord) -> FeedbackInput {
        FeedbackInput {
            satisfaction: self
                .satisfaction
                .unwrap_or_else(|| i64::from(record.satisfaction)),
            ease_of_use: self
                .ease_of_use
                .unwrap_or_else(|| i64::from(record.ease_of_use)),
            nps: self.nps.unwrap_or_else(|| i64::from(record.nps)),
        }
    }
}

/// Net Promoter Score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NpsCategory {
    Detractor,
    Passive,
    Promoter,
}

impl NpsCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=6 => NpsCategory::Detractor,
            7..=8 => NpsCategory::Passive,
            _ => NpsCategory::Promoter,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NpsCategory::Detractor => "Detractor",
            NpsCategory::Passive => "Passive",
            NpsCategory::Promoter => "Promoter",
        }
    }
}

/// Label for a 1-5 rating, empty outside that range.
pub fn rating_label(value: u8) -> &'static str {
    match value {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent",
        _ => "",
    }
}
