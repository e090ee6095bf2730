//! Household-level results built on the person load calculator.
//!
//! # Invariants
//! - `partner` and `imbalance` are present only for two-adult households.
//! - `perception_gap` is present only when the partner answered separately.
//! - Nothing here caches; every call recomputes from the snapshot.

use crate::catalog::TaskCatalog;
use crate::model::household::HouseholdSetup;
use crate::model::response::TaskResponse;
use crate::model::task::TaskCategory;
use crate::scoring::person_load::{calculate_person_load, CategoryScore, PersonLoad, ScoreSummary};
use crate::scoring::thresholds::IMBALANCE_THRESHOLD_POINTS;
use serde::{Deserialize, Serialize};

/// Partner-side totals as attributed by the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartnerLoad {
    pub visible_time: f64,
    pub mental_load: f64,
    pub visible_percentage: u32,
    pub mental_percentage: u32,
}

/// Gaps between the adults' shares, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imbalance {
    pub visible_gap: u32,
    pub mental_gap: u32,
    /// My mental share minus my visible share. Positive means invisible work.
    pub hidden_load_gap: i32,
    pub visible_imbalance: bool,
    pub mental_imbalance: bool,
}

/// Disagreement between my own claim and what my partner attributes to me.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptionGap {
    pub my_claimed_visible_percentage: u32,
    pub partner_attributed_visible_percentage: u32,
    pub my_claimed_mental_percentage: u32,
    pub partner_attributed_mental_percentage: u32,
    pub visible_gap: i32,
    pub mental_gap: i32,
    pub significant: bool,
}

/// Results consumed by charts, prompts and the Markdown report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedResults {
    pub my_visible_time: f64,
    pub my_mental_load: f64,
    pub my_visible_percentage: u32,
    pub my_mental_percentage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerLoad>,
    pub scores: ScoreSummary,
    pub category_scores: Vec<CategoryScore>,
    pub dominant_category: Option<TaskCategory>,
    pub applicable_task_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imbalance: Option<Imbalance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perception_gap: Option<PerceptionGap>,
}

fn gap(left: u32, right: u32) -> i32 {
    left as i32 - right as i32
}

fn exceeds_threshold(points: i32) -> bool {
    f64::from(points.abs()) > IMBALANCE_THRESHOLD_POINTS
}

fn imbalance_of(load: &PersonLoad) -> Imbalance {
    let p = &load.percentages;
    let visible_gap = gap(p.my_visible_percentage, p.partner_visible_percentage);
    let mental_gap = gap(p.my_mental_percentage, p.partner_mental_percentage);
    Imbalance {
        visible_gap: visible_gap.unsigned_abs(),
        mental_gap: mental_gap.unsigned_abs(),
        hidden_load_gap: gap(p.my_mental_percentage, p.my_visible_percentage),
        visible_imbalance: exceeds_threshold(visible_gap),
        mental_imbalance: exceeds_threshold(mental_gap),
    }
}

fn perception_gap_of(mine: &PersonLoad, theirs: &PersonLoad) -> Option<PerceptionGap> {
    if theirs.applicable_task_count == 0 {
        return None;
    }
    let claimed_visible = mine.percentages.my_visible_percentage;
    let claimed_mental = mine.percentages.my_mental_percentage;
    // From the partner's answers, "partner" is me.
    let attributed_visible = theirs.percentages.partner_visible_percentage;
    let attributed_mental = theirs.percentages.partner_mental_percentage;
    let visible_gap = gap(claimed_visible, attributed_visible);
    let mental_gap = gap(claimed_mental, attributed_mental);

    Some(PerceptionGap {
        my_claimed_visible_percentage: claimed_visible,
        partner_attributed_visible_percentage: attributed_visible,
        my_claimed_mental_percentage: claimed_mental,
        partner_attributed_mental_percentage: attributed_mental,
        visible_gap,
        mental_gap,
        significant: exceeds_threshold(visible_gap) || exceeds_threshold(mental_gap),
    })
}

/// Computes household results from the respondent's snapshot.
///
/// `partner_responses` are the partner's own answers (their "me" is the
/// partner); they only feed the perception gap. Single-adult households get
/// no partner, imbalance or perception blocks.
pub fn calculate_results(
    responses: &[TaskResponse],
    partner_responses: Option<&[TaskResponse]>,
    household: &HouseholdSetup,
    catalog: &TaskCatalog,
) -> CalculatedResults {
    let load = calculate_person_load(responses, catalog);
    let has_partner = household.has_partner();

    let partner = has_partner.then(|| PartnerLoad {
        visible_time: load.totals.partner_visible_time,
        mental_load: load.totals.partner_mental_load,
        visible_percentage: load.percentages.partner_visible_percentage,
        mental_percentage: load.percentages.partner_mental_percentage,
    });
    let imbalance = has_partner.then(|| imbalance_of(&load));
    let perception_gap = partner_responses
        .filter(|_| has_partner)
        .and_then(|theirs| perception_gap_of(&load, &calculate_person_load(theirs, catalog)));

    CalculatedResults {
        my_visible_time: load.totals.my_visible_time,
        my_mental_load: load.totals.my_mental_load,
        my_visible_percentage: load.percentages.my_visible_percentage,
        my_mental_percentage: load.percentages.my_mental_percentage,
        partner,
        scores: load.scores,
        dominant_category: load.dominant_category(),
        category_scores: load.category_scores,
        applicable_task_count: load.applicable_task_count,
        imbalance,
        perception_gap,
    }
}

#[cfg(test)]
mod tests {
    use super::calculate_results;
    use crate::catalog::TaskCatalog;
    use crate::model::household::HouseholdSetup;
    use crate::model::response::{Assignment, TaskResponse};

    #[test]
    fn hidden_load_gap_is_positive_when_planning_is_mine() {
        let catalog = TaskCatalog::standard();
        let responses = vec![
            TaskResponse::new("cook_meals", Assignment::Shared),
            TaskResponse::new("meal_planning", Assignment::Me),
            TaskResponse::new("family_calendar", Assignment::Me),
        ];
        let results = calculate_results(&responses, None, &HouseholdSetup::default(), catalog);
        let imbalance = results.imbalance.expect("two adults");
        assert!(imbalance.hidden_load_gap > 0);
        assert!(results.my_mental_percentage > results.my_visible_percentage);
    }

    #[test]
    fn perception_gap_compares_claim_with_partner_view() {
        let catalog = TaskCatalog::standard();
        let mine = vec![TaskResponse::new("dishes", Assignment::Me)];
        let theirs = vec![TaskResponse::new("dishes", Assignment::Shared)];
        let results =
            calculate_results(&mine, Some(&theirs), &HouseholdSetup::default(), catalog);
        let perception = results.perception_gap.expect("partner answered");
        assert_eq!(perception.my_claimed_visible_percentage, 100);
        assert_eq!(perception.partner_attributed_visible_percentage, 50);
        assert_eq!(perception.visible_gap, 50);
        assert!(perception.significant);
    }

    #[test]
    fn single_adult_has_no_partner_blocks() {
        let catalog = TaskCatalog::standard();
        let responses = vec![TaskResponse::new("dishes", Assignment::Me)];
        let theirs = vec![TaskResponse::new("dishes", Assignment::Me)];
        let results = calculate_results(
            &responses,
            Some(&theirs),
            &HouseholdSetup::single_adult(),
            catalog,
        );
        assert!(results.partner.is_none());
        assert!(results.imbalance.is_none());
        assert!(results.perception_gap.is_none());
        assert_eq!(results.my_visible_percentage, 100);
    }
}
