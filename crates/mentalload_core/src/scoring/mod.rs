//! Scoring and aggregation engine.
//!
//! # Responsibility
//! - Turn response snapshots plus the task catalog into load metrics.
//! - Keep every default and split policy in one place.
//!
//! # Invariants
//! - All functions are pure: inputs are borrowed read-only, no ambient state.
//! - No function panics or returns `NaN`; empty input yields zeros.
//! - Percentages are rounded only after full accumulation.

pub mod person_load;
pub mod response;
pub mod results;
pub mod task_score;
pub mod thresholds;
pub mod time_adjustment;
pub mod wmli;

/// Share of `part` in `whole` as a rounded integer percentage.
///
/// Returns `0` when `whole` is zero or not finite.
pub fn rounded_percentage(part: f64, whole: f64) -> u32 {
    if !whole.is_finite() || whole <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Rounds to one decimal place for display-stable index values.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
