//! Response normalization and the shared split policy.
//!
//! # Responsibility
//! - Resolve every optional response field to a concrete value exactly once.
//! - Provide the single assignment-to-share rule used by all aggregations.
//!
//! # Invariants
//! - `ShareSplit::me + ShareSplit::partner == 1.0`.
//! - Burden and fairness are clamped to `1..=5`; missing ratings are `3/3`.
//! - Not-applicable and unknown-task responses never produce a
//!   `NormalizedResponse`.

use crate::catalog::TaskCatalog;
use crate::model::response::{Assignment, TaskResponse};
use crate::model::task::Task;
use crate::scoring::thresholds::{
    DEFAULT_SHARED_PERCENTAGE, LIKERT_MAX, LIKERT_MIN, MAJORITY_SHARE, NEUTRAL_LIKERT,
};
use crate::scoring::time_adjustment::effective_minutes;
use log::trace;
use serde::{Deserialize, Serialize};

/// Which household member a metric is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Me,
    Partner,
}

/// Fractions of one task attributed to each adult.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareSplit {
    pub me: f64,
    pub partner: f64,
}

impl ShareSplit {
    pub const ALL_MINE: Self = Self {
        me: 1.0,
        partner: 0.0,
    };
    pub const ALL_PARTNER: Self = Self {
        me: 0.0,
        partner: 1.0,
    };

    /// Split from a respondent-side percentage (clamped to `0..=100`).
    pub fn from_my_percentage(my_percentage: u8) -> Self {
        let me = f64::from(my_percentage.min(100)) / 100.0;
        Self {
            me,
            partner: 1.0 - me,
        }
    }

    /// The split policy.
    ///
    /// - `Me`: everything to me, unless an override keeps me the majority
    ///   owner (`50 < share < 100`).
    /// - `Partner`: everything to partner, unless an override keeps the
    ///   partner the majority owner (`0 < share < 50`).
    /// - `Shared`: the given percentage to me, defaulting to 50.
    ///
    /// An override never moves ownership away from the assigned adult.
    pub fn from_assignment(assignment: Assignment, my_share_percentage: Option<u8>) -> Self {
        match (assignment, my_share_percentage) {
            (Assignment::Me, Some(share))
                if share > DEFAULT_SHARED_PERCENTAGE && share < 100 =>
            {
                Self::from_my_percentage(share)
            }
            (Assignment::Me, _) => Self::ALL_MINE,
            (Assignment::Partner, Some(share))
                if share > 0 && share < DEFAULT_SHARED_PERCENTAGE =>
            {
                Self::from_my_percentage(share)
            }
            (Assignment::Partner, _) => Self::ALL_PARTNER,
            (Assignment::Shared, share) => {
                Self::from_my_percentage(share.unwrap_or(DEFAULT_SHARED_PERCENTAGE))
            }
        }
    }

    /// Same split seen from the other adult's perspective.
    pub fn swapped(self) -> Self {
        Self {
            me: self.partner,
            partner: self.me,
        }
    }

    pub fn for_side(self, side: Side) -> f64 {
        match side {
            Side::Me => self.me,
            Side::Partner => self.partner,
        }
    }

    /// Returns whether `side` owns strictly more than half of the task.
    pub fn is_majority(self, side: Side) -> bool {
        self.for_side(side) > MAJORITY_SHARE
    }
}

/// Fully resolved response, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedResponse<'a> {
    pub task: &'a Task,
    pub assignment: Assignment,
    pub split: ShareSplit,
    pub effective_minutes: u32,
    pub burden: u8,
    pub fairness: u8,
    /// False when burden/fairness came from the neutral default.
    pub has_rating: bool,
}

fn clamp_likert(value: u8) -> u8 {
    value.clamp(LIKERT_MIN, LIKERT_MAX)
}

/// Resolves one response against its catalog task.
///
/// Returns `None` for not-applicable responses and for unknown task ids.
pub fn normalize_response<'a>(
    response: &TaskResponse,
    catalog: &'a TaskCatalog,
) -> Option<NormalizedResponse<'a>> {
    if response.not_applicable {
        return None;
    }
    let Some(task) = catalog.get(response.task_id.as_str()) else {
        trace!(
            "event=response_skipped module=scoring reason=unknown_task task_id={}",
            response.task_id
        );
        return None;
    };

    let (burden, fairness, has_rating) = match response.likert_rating {
        Some(rating) => (clamp_likert(rating.burden), clamp_likert(rating.fairness), true),
        None => (NEUTRAL_LIKERT, NEUTRAL_LIKERT, false),
    };

    Some(NormalizedResponse {
        task,
        assignment: response.assignment,
        split: ShareSplit::from_assignment(response.assignment, response.my_share_percentage),
        effective_minutes: effective_minutes(response, task.baseline_minutes_per_week()),
        burden,
        fairness,
        has_rating,
    })
}

/// Normalizes a snapshot, dropping skipped responses and keeping order.
pub fn normalize_all<'a>(
    responses: &[TaskResponse],
    catalog: &'a TaskCatalog,
) -> Vec<NormalizedResponse<'a>> {
    responses
        .iter()
        .filter_map(|response| normalize_response(response, catalog))
        .collect()
}
