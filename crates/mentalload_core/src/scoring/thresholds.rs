//! Scoring constants shared by the aggregator and the WMLI engine.

/// Percentage-point gap above which a split counts as imbalanced.
pub const IMBALANCE_THRESHOLD_POINTS: f64 = 20.0;

/// Minimum burden rating that counts as strain on a majority-owned task.
pub const STRAIN_BURDEN_MIN: u8 = 4;

/// Maximum fairness rating that counts as a fairness risk.
pub const FAIRNESS_RISK_MAX: u8 = 2;

/// A task is majority-owned when a person's share is strictly above this.
pub const MAJORITY_SHARE: f64 = 0.5;

/// Neutral Likert value used when a rating is missing.
pub const NEUTRAL_LIKERT: u8 = 3;

/// Likert scale bounds.
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Share assumed for `shared` tasks without an explicit percentage.
pub const DEFAULT_SHARED_PERCENTAGE: u8 = 50;

/// Upper bounds of the WMLI interpretation buckets (exclusive).
pub const WMLI_LOW_MAX: f64 = 25.0;
pub const WMLI_MODERATE_MAX: f64 = 50.0;
pub const WMLI_HIGH_MAX: f64 = 75.0;
