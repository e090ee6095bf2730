//! Questionnaire answers for one task.
//!
//! # Responsibility
//! - Hold exactly what the respondent entered, including absent fields.
//! - Leave default resolution to `scoring::response::normalize_response`.
//!
//! # Invariants
//! - `my_share_percentage` is meaningful for `Shared`, and for `Me` only as
//!   an explicit partial-partner override.
//! - `not_applicable = true` removes the task from every total.
//! - `time_adjustment` wins over `estimated_minutes`, which wins over the
//!   catalog baseline.

use serde::{Deserialize, Serialize};

/// Who performs a task from the respondent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    Me,
    Partner,
    Shared,
}

impl Assignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Partner => "partner",
            Self::Shared => "shared",
        }
    }

    /// Parses the wire tag. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "me" => Some(Self::Me),
            "partner" => Some(Self::Partner),
            "shared" => Some(Self::Shared),
            _ => None,
        }
    }
}

/// Qualitative correction of the catalog baseline time.
///
/// Tags outside the known table deserialize to `Unrecognized` and resolve
/// like `AboutRight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeAdjustment {
    MuchLess,
    Less,
    AboutRight,
    More,
    MuchMore,
    #[serde(other)]
    Unrecognized,
}

impl TimeAdjustment {
    /// Multiplier applied to the baseline minutes.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::MuchLess => 0.5,
            Self::Less => 0.75,
            Self::AboutRight | Self::Unrecognized => 1.0,
            Self::More => 1.25,
            Self::MuchMore => 1.5,
        }
    }

    /// Parses the wire tag, mapping unknown values to `Unrecognized`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "much_less" => Self::MuchLess,
            "less" => Self::Less,
            "about_right" => Self::AboutRight,
            "more" => Self::More,
            "much_more" => Self::MuchMore,
            _ => Self::Unrecognized,
        }
    }
}

/// Burden/fairness pair on a 1..=5 scale.
///
/// Stored as entered; clamping happens during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertRating {
    pub burden: u8,
    pub fairness: u8,
}

impl LikertRating {
    pub fn new(burden: u8, fairness: u8) -> Self {
        Self { burden, fairness }
    }
}

/// One respondent's answer for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task_id: String,
    pub assignment: Assignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_share_percentage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_adjustment: Option<TimeAdjustment>,
    /// Legacy explicit minutes; used only without `time_adjustment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub not_applicable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likert_rating: Option<LikertRating>,
}

impl TaskResponse {
    /// Creates a bare response with only an assignment.
    pub fn new(task_id: impl Into<String>, assignment: Assignment) -> Self {
        Self {
            task_id: task_id.into(),
            assignment,
            my_share_percentage: None,
            time_adjustment: None,
            estimated_minutes: None,
            not_applicable: false,
            likert_rating: None,
        }
    }

    /// Response marking the task as not relevant for this household.
    pub fn not_applicable(task_id: impl Into<String>) -> Self {
        Self {
            not_applicable: true,
            ..Self::new(task_id, Assignment::Me)
        }
    }

    pub fn with_share(mut self, my_share_percentage: u8) -> Self {
        self.my_share_percentage = Some(my_share_percentage);
        self
    }

    pub fn with_adjustment(mut self, adjustment: TimeAdjustment) -> Self {
        self.time_adjustment = Some(adjustment);
        self
    }

    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    pub fn with_rating(mut self, burden: u8, fairness: u8) -> Self {
        self.likert_rating = Some(LikertRating::new(burden, fairness));
        self
    }
}
