//! Person load calculator.
//!
//! # Responsibility
//! - Visit every response once and accumulate visible time, mental load and
//!   intensity scores for both adults.
//! - Produce per-category breakdowns for dominant-category insights.
//!
//! # Invariants
//! - Percentages are derived after accumulation and are `0` for empty data.
//! - `combined_score` weights each measurement type equally, not each task.
//! - Category counts exclude not-applicable and unknown responses.

use crate::catalog::TaskCatalog;
use crate::model::response::TaskResponse;
use crate::model::task::{MeasurementType, TaskCategory};
use crate::scoring::response::normalize_all;
use crate::scoring::rounded_percentage;
use crate::scoring::task_score::score_task;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw accumulated minutes and weighted minutes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadTotals {
    pub my_visible_time: f64,
    pub my_mental_load: f64,
    pub partner_visible_time: f64,
    pub partner_mental_load: f64,
}

impl LoadTotals {
    pub fn total_visible_time(&self) -> f64 {
        self.my_visible_time + self.partner_visible_time
    }

    pub fn total_mental_load(&self) -> f64 {
        self.my_mental_load + self.partner_mental_load
    }
}

/// Integer shares of each total. Visible and mental shares are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadPercentages {
    pub my_visible_percentage: u32,
    pub partner_visible_percentage: u32,
    pub my_mental_percentage: u32,
    pub partner_mental_percentage: u32,
}

impl LoadPercentages {
    pub fn from_totals(totals: &LoadTotals) -> Self {
        let visible = totals.total_visible_time();
        let mental = totals.total_mental_load();
        Self {
            my_visible_percentage: rounded_percentage(totals.my_visible_time, visible),
            partner_visible_percentage: rounded_percentage(totals.partner_visible_time, visible),
            my_mental_percentage: rounded_percentage(totals.my_mental_load, mental),
            partner_mental_percentage: rounded_percentage(totals.partner_mental_load, mental),
        }
    }
}

/// Mean intensity per measurement type and their equal-weight blend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub time_score_average: f64,
    pub time_task_count: usize,
    pub likert_score_average: f64,
    pub likert_task_count: usize,
    pub combined_score: f64,
}

/// Accumulated figures for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: TaskCategory,
    /// Sum of intensity scores weighted by my share.
    pub score: f64,
    pub task_count: usize,
    pub my_visible_time: f64,
    pub partner_visible_time: f64,
    pub my_mental_load: f64,
    pub partner_mental_load: f64,
}

impl CategoryScore {
    fn empty(category: TaskCategory) -> Self {
        Self {
            category,
            score: 0.0,
            task_count: 0,
            my_visible_time: 0.0,
            partner_visible_time: 0.0,
            my_mental_load: 0.0,
            partner_mental_load: 0.0,
        }
    }

    /// My share of this category's mental load, `0` when empty.
    pub fn my_mental_percentage(&self) -> u32 {
        rounded_percentage(
            self.my_mental_load,
            self.my_mental_load + self.partner_mental_load,
        )
    }
}

/// Output of `calculate_person_load`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonLoad {
    pub totals: LoadTotals,
    pub percentages: LoadPercentages,
    pub scores: ScoreSummary,
    /// Sorted by category order; categories without tasks are omitted.
    pub category_scores: Vec<CategoryScore>,
    pub applicable_task_count: usize,
}

impl PersonLoad {
    /// Category with the highest my-share-weighted score.
    ///
    /// Ties resolve to the earlier category. `None` when nothing scored.
    pub fn dominant_category(&self) -> Option<TaskCategory> {
        self.category_scores
            .iter()
            .filter(|entry| entry.score > 0.0)
            .fold(None::<&CategoryScore>, |best, entry| match best {
                Some(current) if current.score >= entry.score => Some(current),
                _ => Some(entry),
            })
            .map(|entry| entry.category)
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Aggregates a response snapshot from the respondent's perspective.
///
/// Not-applicable responses and responses for unknown tasks are skipped.
pub fn calculate_person_load(responses: &[TaskResponse], catalog: &TaskCatalog) -> PersonLoad {
    let mut totals = LoadTotals::default();
    let mut categories: BTreeMap<TaskCategory, CategoryScore> = BTreeMap::new();
    let (mut time_sum, mut time_count) = (0.0_f64, 0_usize);
    let (mut likert_sum, mut likert_count) = (0.0_f64, 0_usize);

    let normalized = normalize_all(responses, catalog);
    for response in &normalized {
        let contribution = score_task(response);

        totals.my_visible_time += contribution.my_visible_time;
        totals.partner_visible_time += contribution.partner_visible_time;
        totals.my_mental_load += contribution.my_mental_load;
        totals.partner_mental_load += contribution.partner_mental_load;

        match contribution.measurement_type {
            MeasurementType::Time => {
                time_sum += contribution.score;
                time_count += 1;
            }
            MeasurementType::Likert => {
                likert_sum += contribution.score;
                likert_count += 1;
            }
        }

        let category = response.task.category();
        let entry = categories
            .entry(category)
            .or_insert_with(|| CategoryScore::empty(category));
        entry.score += contribution.score * response.split.me;
        entry.task_count += 1;
        entry.my_visible_time += contribution.my_visible_time;
        entry.partner_visible_time += contribution.partner_visible_time;
        entry.my_mental_load += contribution.my_mental_load;
        entry.partner_mental_load += contribution.partner_mental_load;
    }

    let time_score_average = mean(time_sum, time_count);
    let likert_score_average = mean(likert_sum, likert_count);
    let type_averages = [
        (time_count > 0).then_some(time_score_average),
        (likert_count > 0).then_some(likert_score_average),
    ];
    let present: Vec<f64> = type_averages.into_iter().flatten().collect();
    let combined_score = mean(present.iter().sum(), present.len());

    PersonLoad {
        percentages: LoadPercentages::from_totals(&totals),
        totals,
        scores: ScoreSummary {
            time_score_average,
            time_task_count: time_count,
            likert_score_average,
            likert_task_count: likert_count,
            combined_score,
        },
        category_scores: categories.into_values().collect(),
        applicable_task_count: normalized.len(),
    }
}
