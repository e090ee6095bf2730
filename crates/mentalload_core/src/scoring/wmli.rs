//! Weighted Mental Load Index.
//!
//! # Responsibility
//! - Score each adult on a 0-100 scale from burden ratings weighted by
//!   ownership share and the catalog mental-load weight.
//! - Raise strain, fairness and equity flags from majority-owned tasks.
//! - Compare both adults when, and only when, the household has two.
//!
//! # Invariants
//! - Index denominator is the maximum possible burden (`5 * weight`) summed
//!   over every assessed task, so a person carrying everything at burden 5
//!   scores 100.
//! - Single-adult households produce no partner block and no disparity.
//! - Missing ratings count as neutral (3/3).

use crate::catalog::TaskCatalog;
use crate::model::household::HouseholdSetup;
use crate::model::response::TaskResponse;
use crate::scoring::response::{normalize_all, NormalizedResponse, Side};
use crate::scoring::round_one_decimal;
use crate::scoring::task_score::unfairness;
use crate::scoring::thresholds::{
    FAIRNESS_RISK_MAX, IMBALANCE_THRESHOLD_POINTS, LIKERT_MAX, STRAIN_BURDEN_MIN, WMLI_HIGH_MAX,
    WMLI_LOW_MAX, WMLI_MODERATE_MAX,
};
use serde::{Deserialize, Serialize};

/// Highest possible unfairness value (fairness = 1).
const MAX_UNFAIRNESS: f64 = 0.8;

/// Interpretation bucket for an index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WmliInterpretation {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl WmliInterpretation {
    pub fn from_index(index: f64) -> Self {
        if index < WMLI_LOW_MAX {
            Self::Low
        } else if index < WMLI_MODERATE_MAX {
            Self::Moderate
        } else if index < WMLI_HIGH_MAX {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    /// Short sentence for insight panels.
    pub fn context(self) -> &'static str {
        match self {
            Self::Low => "Mental load is light and likely sustainable.",
            Self::Moderate => "Mental load is noticeable but manageable.",
            Self::High => "Mental load is heavy; some responsibilities may need rebalancing.",
            Self::VeryHigh => "Mental load is very heavy and at risk of burnout.",
        }
    }
}

/// Index and flags for one adult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonWmli {
    /// 0-100, one decimal.
    pub index: f64,
    /// Sum of `burden * share * weight`; basis for disparity shares.
    pub weighted_load: f64,
    /// 0-100 share of the maximum possible weighted unfairness.
    pub unfairness_index: f64,
    pub interpretation: WmliInterpretation,
    pub interpretation_context: String,
    pub high_subjective_strain: bool,
    pub fairness_risk: bool,
    pub equity_priority: bool,
    /// Majority-owned tasks rated burden >= 4, in answer order.
    pub strain_tasks: Vec<String>,
    /// Majority-owned tasks rated fairness <= 2.
    pub unfairness_tasks: Vec<String>,
    pub assessed_task_count: usize,
}

/// Comparison between both adults' weighted loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disparity {
    pub my_share: f64,
    pub partner_share: f64,
    /// `|my_share - partner_share|` in percentage points.
    pub mental_load_gap: f64,
    pub high_equity_risk: bool,
}

/// Engine output. Partner fields are absent, not zero, for one adult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmliResults {
    pub my_wmli: PersonWmli,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_wmli: Option<PersonWmli>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disparity: Option<Disparity>,
}

impl WmliResults {
    /// Returns whether either adult carries the equity-priority flag.
    pub fn any_equity_priority(&self) -> bool {
        self.my_wmli.equity_priority
            || self
                .partner_wmli
                .as_ref()
                .is_some_and(|partner| partner.equity_priority)
    }
}

/// Scores one side of a normalized snapshot.
fn score_person(responses: &[NormalizedResponse<'_>], side: Side) -> PersonWmli {
    let mut weighted_load = 0.0_f64;
    let mut max_load = 0.0_f64;
    let mut weighted_unfairness = 0.0_f64;
    let mut max_unfairness = 0.0_f64;
    let mut strain_tasks = Vec::new();
    let mut unfairness_tasks = Vec::new();

    for response in responses {
        let weight = response.task.mental_load_weight();
        let share = response.split.for_side(side);

        weighted_load += f64::from(response.burden) * share * weight;
        max_load += f64::from(LIKERT_MAX) * weight;
        weighted_unfairness += unfairness(response.fairness) * share * weight;
        max_unfairness += MAX_UNFAIRNESS * weight;

        if response.split.is_majority(side) {
            if response.burden >= STRAIN_BURDEN_MIN {
                strain_tasks.push(response.task.id().to_string());
            }
            if response.fairness <= FAIRNESS_RISK_MAX {
                unfairness_tasks.push(response.task.id().to_string());
            }
        }
    }

    let index = if max_load > 0.0 {
        round_one_decimal(weighted_load / max_load * 100.0)
    } else {
        0.0
    };
    let unfairness_index = if max_unfairness > 0.0 {
        round_one_decimal(weighted_unfairness / max_unfairness * 100.0)
    } else {
        0.0
    };
    let high_subjective_strain = !strain_tasks.is_empty();
    let fairness_risk = !unfairness_tasks.is_empty();
    let interpretation = WmliInterpretation::from_index(index);

    PersonWmli {
        index,
        weighted_load,
        unfairness_index,
        interpretation,
        interpretation_context: interpretation.context().to_string(),
        high_subjective_strain,
        fairness_risk,
        equity_priority: high_subjective_strain && fairness_risk,
        strain_tasks,
        unfairness_tasks,
        assessed_task_count: responses.len(),
    }
}

fn disparity_between(mine: &PersonWmli, partner: &PersonWmli) -> Disparity {
    let total = mine.weighted_load + partner.weighted_load;
    let (my_share, partner_share) = if total > 0.0 {
        (
            round_one_decimal(mine.weighted_load / total * 100.0),
            round_one_decimal(partner.weighted_load / total * 100.0),
        )
    } else {
        (0.0, 0.0)
    };
    let mental_load_gap = round_one_decimal((my_share - partner_share).abs());

    Disparity {
        my_share,
        partner_share,
        mental_load_gap,
        high_equity_risk: mental_load_gap > IMBALANCE_THRESHOLD_POINTS,
    }
}

/// Computes the WMLI for the respondent and, in two-adult households, the
/// partner.
///
/// The partner side comes from `partner_responses` (the partner's own
/// answers, their "me" side) when given, otherwise from the respondent's
/// answers attributed to the partner.
pub fn calculate_wmli(
    responses: &[TaskResponse],
    partner_responses: Option<&[TaskResponse]>,
    household: &HouseholdSetup,
    catalog: &TaskCatalog,
) -> WmliResults {
    let normalized = normalize_all(responses, catalog);
    let my_wmli = score_person(&normalized, Side::Me);

    if !household.has_partner() {
        return WmliResults {
            my_wmli,
            partner_wmli: None,
            disparity: None,
        };
    }

    let partner_wmli = match partner_responses {
        Some(theirs) => score_person(&normalize_all(theirs, catalog), Side::Me),
        None => score_person(&normalized, Side::Partner),
    };
    let disparity = disparity_between(&my_wmli, &partner_wmli);

    WmliResults {
        my_wmli,
        partner_wmli: Some(partner_wmli),
        disparity: Some(disparity),
    }
}
