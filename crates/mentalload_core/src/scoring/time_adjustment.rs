//! Effective weekly minutes for one response.

use crate::model::response::TaskResponse;

/// Resolves the weekly minutes a response stands for.
///
/// Precedence: `time_adjustment` (baseline times multiplier, rounded),
/// then `estimated_minutes` verbatim, then the baseline itself.
pub fn effective_minutes(response: &TaskResponse, baseline_minutes: u32) -> u32 {
    if let Some(adjustment) = response.time_adjustment {
        return (f64::from(baseline_minutes) * adjustment.multiplier()).round() as u32;
    }
    response.estimated_minutes.unwrap_or(baseline_minutes)
}
