//! Per-task scoring.
//!
//! Two intensity formulas, chosen by the task's measurement type:
//! - time: `effective_minutes / baseline_minutes`
//! - likert: `burden * (1 + (5 - fairness) / 5) / 10`
//!
//! Both land on a roughly `0..=1` scale. Visible and mental contributions
//! are split between the adults with the shared `ShareSplit` policy.

use crate::model::task::MeasurementType;
use crate::scoring::response::NormalizedResponse;
use serde::{Deserialize, Serialize};

/// Ratio of actual to typical weekly time. Zero for a zero baseline.
pub fn time_score(effective_minutes: u32, baseline_minutes: u32) -> f64 {
    if baseline_minutes == 0 {
        return 0.0;
    }
    f64::from(effective_minutes) / f64::from(baseline_minutes)
}

/// `0.0` for fully fair (5) up to `0.8` for very unfair (1).
pub fn unfairness(fairness: u8) -> f64 {
    f64::from(5_u8.saturating_sub(fairness)) / 5.0
}

/// Burden amplified by unfairness, normalized by 10.
///
/// Never below `burden / 10`.
pub fn likert_score(burden: u8, fairness: u8) -> f64 {
    let weighted = f64::from(burden) * (1.0 + unfairness(fairness));
    weighted / 10.0
}

/// One task's share of every running total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskContribution {
    pub my_visible_time: f64,
    pub partner_visible_time: f64,
    pub my_mental_load: f64,
    pub partner_mental_load: f64,
    /// Intensity score from the task's own measurement formula.
    pub score: f64,
    pub measurement_type: MeasurementType,
}

/// Intensity score for a normalized response.
pub fn intensity_score(response: &NormalizedResponse<'_>) -> f64 {
    match response.task.measurement_type() {
        MeasurementType::Time => time_score(
            response.effective_minutes,
            response.task.baseline_minutes_per_week(),
        ),
        MeasurementType::Likert => likert_score(response.burden, response.fairness),
    }
}

/// Splits visible minutes `m` and mental load `m * w` between the adults,
/// using the aggregator weight `w` (1 physical, 2 cognitive).
pub fn score_task(response: &NormalizedResponse<'_>) -> TaskContribution {
    let minutes = f64::from(response.effective_minutes);
    let mental = minutes * response.task.aggregator_weight();
    let split = response.split;

    TaskContribution {
        my_visible_time: minutes * split.me,
        partner_visible_time: minutes * split.partner,
        my_mental_load: mental * split.me,
        partner_mental_load: mental * split.partner,
        score: intensity_score(response),
        measurement_type: response.task.measurement_type(),
    }
}

#[cfg(test)]
mod tests {
    use super::{likert_score, time_score, unfairness};

    #[test]
    fn time_score_is_zero_for_zero_baseline() {
        assert_eq!(time_score(30, 0), 0.0);
        assert_eq!(time_score(150, 100), 1.5);
    }

    #[test]
    fn unfairness_amplifies_but_never_reduces_burden() {
        for burden in 1..=5_u8 {
            for fairness in 1..=5_u8 {
                assert!(likert_score(burden, fairness) >= f64::from(burden) / 10.0 - 1e-12);
            }
        }
        assert_eq!(unfairness(5), 0.0);
        assert!((unfairness(1) - 0.8).abs() < 1e-12);
    }
}
