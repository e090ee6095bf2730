//! Conversation prompt generation.

use crate::catalog::TaskCatalog;
use crate::scoring::results::CalculatedResults;
use crate::scoring::thresholds::IMBALANCE_THRESHOLD_POINTS;
use crate::scoring::wmli::{PersonWmli, WmliResults};
use serde::{Deserialize, Serialize};

/// Ordering key for prompts; `High` is shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptPriority {
    High,
    Medium,
    Low,
}

impl PromptPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTopic {
    EquityPriority,
    EquityRisk,
    PerceptionGap,
    InvisibleWork,
    MentalImbalance,
    VisibleImbalance,
    Acknowledgement,
    DominantCategory,
    GettingStarted,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationPrompt {
    pub topic: PromptTopic,
    pub priority: PromptPriority,
    pub text: String,
}

impl ConversationPrompt {
    fn new(topic: PromptTopic, priority: PromptPriority, text: impl Into<String>) -> Self {
        Self {
            topic,
            priority,
            text: text.into(),
        }
    }
}

fn task_titles(task_ids: &[String], catalog: &TaskCatalog) -> String {
    task_ids
        .iter()
        .map(|id| catalog.get(id).map_or(id.as_str(), |task| task.title()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Subject and verb forms used to phrase per-person prompts.
struct Voice {
    who: &'static str,
    carry: &'static str,
    handle: &'static str,
}

const YOU: Voice = Voice {
    who: "you",
    carry: "carry",
    handle: "handle",
};
const PARTNER: Voice = Voice {
    who: "your partner",
    carry: "carries",
    handle: "handles",
};

fn person_prompts(
    voice: &Voice,
    wmli: &PersonWmli,
    catalog: &TaskCatalog,
    prompts: &mut Vec<ConversationPrompt>,
) {
    if wmli.equity_priority {
        prompts.push(ConversationPrompt::new(
            PromptTopic::EquityPriority,
            PromptPriority::High,
            format!(
                "Time for a household conversation: {} {} tasks that feel both heavy \
                 and unacknowledged ({}). Which of these could change hands first?",
                voice.who,
                voice.carry,
                task_titles(&wmli.strain_tasks, catalog)
            ),
        ));
    } else if wmli.fairness_risk {
        prompts.push(ConversationPrompt::new(
            PromptTopic::Acknowledgement,
            PromptPriority::Medium,
            format!(
                "Some of the work {} mostly {} feels unrecognized ({}). \
                 What would acknowledgement look like?",
                voice.who,
                voice.handle,
                task_titles(&wmli.unfairness_tasks, catalog)
            ),
        ));
    }
}

/// Builds prompts ordered by priority, then by generation order.
pub fn conversation_prompts(
    results: &CalculatedResults,
    wmli: &WmliResults,
    catalog: &TaskCatalog,
) -> Vec<ConversationPrompt> {
    if results.applicable_task_count == 0 {
        return vec![ConversationPrompt::new(
            PromptTopic::GettingStarted,
            PromptPriority::Low,
            "Answer a few tasks to see where your household's load sits.",
        )];
    }

    let mut prompts = Vec::new();
    person_prompts(&YOU, &wmli.my_wmli, catalog, &mut prompts);
    if let Some(partner) = &wmli.partner_wmli {
        person_prompts(&PARTNER, partner, catalog, &mut prompts);
    }

    if let Some(disparity) = wmli.disparity.filter(|d| d.high_equity_risk) {
        prompts.push(ConversationPrompt::new(
            PromptTopic::EquityRisk,
            PromptPriority::High,
            format!(
                "Your weighted mental load shares differ by {:.0} points ({:.0}% vs {:.0}%). \
                 Is this split one you both chose?",
                disparity.mental_load_gap, disparity.my_share, disparity.partner_share
            ),
        ));
    }

    if let Some(perception) = results.perception_gap.filter(|p| p.significant) {
        prompts.push(ConversationPrompt::new(
            PromptTopic::PerceptionGap,
            PromptPriority::High,
            format!(
                "You see yourself doing {}% of the visible work; your partner sees {}%. \
                 Walk through one task where your views differ most.",
                perception.my_claimed_visible_percentage,
                perception.partner_attributed_visible_percentage
            ),
        ));
    }

    if let (Some(imbalance), Some(partner)) = (results.imbalance, results.partner) {
        if f64::from(imbalance.hidden_load_gap) > IMBALANCE_THRESHOLD_POINTS {
            prompts.push(ConversationPrompt::new(
                PromptTopic::InvisibleWork,
                PromptPriority::Medium,
                format!(
                    "You hold {}% of the mental load but {}% of the visible work. \
                     Much of your contribution may be invisible.",
                    results.my_mental_percentage, results.my_visible_percentage
                ),
            ));
        }
        if imbalance.mental_imbalance {
            prompts.push(ConversationPrompt::new(
                PromptTopic::MentalImbalance,
                PromptPriority::Medium,
                format!(
                    "The planning and noticing is split {}/{}. Who keeps track of what \
                     needs doing next?",
                    results.my_mental_percentage, partner.mental_percentage
                ),
            ));
        }
        if imbalance.visible_imbalance {
            prompts.push(ConversationPrompt::new(
                PromptTopic::VisibleImbalance,
                PromptPriority::Medium,
                format!(
                    "Hands-on work is split {}/{}. Which routine tasks could rotate?",
                    results.my_visible_percentage, partner.visible_percentage
                ),
            ));
        }
    }

    if let Some(category) = results.dominant_category {
        prompts.push(ConversationPrompt::new(
            PromptTopic::DominantCategory,
            PromptPriority::Low,
            format!(
                "Most of your load sits in {}. Who notices first when something there \
                 needs doing?",
                category.label().to_lowercase()
            ),
        ));
    }

    if prompts.iter().all(|p| p.priority == PromptPriority::Low) {
        prompts.push(ConversationPrompt::new(
            PromptTopic::Balanced,
            PromptPriority::Low,
            "Your split looks fairly balanced. Talk about what is working so it stays that way.",
        ));
    }

    prompts.sort_by_key(|prompt| prompt.priority);
    prompts
}

#[cfg(test)]
mod tests {
    use super::{conversation_prompts, PromptPriority, PromptTopic};
    use crate::catalog::TaskCatalog;
    use crate::model::household::HouseholdSetup;
    use crate::model::response::{Assignment, TaskResponse};
    use crate::scoring::results::calculate_results;
    use crate::scoring::wmli::calculate_wmli;

    fn prompts_for(
        responses: &[TaskResponse],
        household: &HouseholdSetup,
    ) -> Vec<super::ConversationPrompt> {
        let catalog = TaskCatalog::standard();
        let results = calculate_results(responses, None, household, catalog);
        let wmli = calculate_wmli(responses, None, household, catalog);
        conversation_prompts(&results, &wmli, catalog)
    }

    #[test]
    fn empty_assessment_gets_getting_started_prompt() {
        let prompts = prompts_for(&[], &HouseholdSetup::default());
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].topic, PromptTopic::GettingStarted);
    }

    #[test]
    fn equity_priority_leads_and_names_the_task() {
        let responses =
            vec![TaskResponse::new("family_calendar", Assignment::Me).with_rating(5, 1)];
        let prompts = prompts_for(&responses, &HouseholdSetup::default());
        assert_eq!(prompts[0].priority, PromptPriority::High);
        assert!(prompts
            .iter()
            .any(|p| p.topic == PromptTopic::EquityPriority
                && p.text.contains("Managing the family calendar")));
    }

    #[test]
    fn split_prompts_quote_both_rounded_percentages() {
        // 15 of 120 minutes rounds to 13% for me and 88% for the partner.
        let responses = vec![
            TaskResponse::new("bathrooms", Assignment::Shared).with_share(25),
            TaskResponse::new("errands", Assignment::Partner),
        ];
        let prompts = prompts_for(&responses, &HouseholdSetup::default());
        let split_text = |topic: PromptTopic| {
            prompts
                .iter()
                .find(|p| p.topic == topic)
                .map(|p| p.text.clone())
                .expect("split prompt present")
        };
        assert!(split_text(PromptTopic::VisibleImbalance).contains("13/88"));
        assert!(split_text(PromptTopic::MentalImbalance).contains("13/88"));
    }

    #[test]
    fn prompts_are_sorted_by_priority() {
        let responses = vec![
            TaskResponse::new("dishes", Assignment::Partner),
            TaskResponse::new("family_calendar", Assignment::Me).with_rating(5, 1),
            TaskResponse::new("meal_planning", Assignment::Me).with_rating(4, 2),
        ];
        let prompts = prompts_for(&responses, &HouseholdSetup::default());
        assert!(prompts.windows(2).all(|pair| pair[0].priority <= pair[1].priority));
    }
}
