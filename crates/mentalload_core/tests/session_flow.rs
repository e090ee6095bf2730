use mentalload_core::{
    AssessmentMode, AssessmentSession, Assignment, HouseholdSetup, HouseholdValidationError,
    InsightKind, PromptTopic, SessionError, TaskResponse,
};
use uuid::Uuid;

fn couple_with_kids() -> HouseholdSetup {
    HouseholdSetup {
        adults: 2,
        children: 2,
        has_pets: false,
        has_garden: true,
        i_am_employed: true,
        partner_employed: true,
        mode: AssessmentMode::Together,
    }
}

#[test]
fn set_household_rejects_invalid_setup_and_keeps_state() {
    let mut session = AssessmentSession::new();
    session.set_household(couple_with_kids()).unwrap();

    let err = session
        .set_household(HouseholdSetup {
            adults: 3,
            ..couple_with_kids()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidHousehold(HouseholdValidationError::UnsupportedAdultCount(3))
    ));
    assert_eq!(session.household(), Some(&couple_with_kids()));
}

#[test]
fn partner_answers_rejected_for_single_adult() {
    let mut session = AssessmentSession::new();
    session.set_household(HouseholdSetup::single_adult()).unwrap();
    let err = session
        .upsert_partner_response(TaskResponse::new("dishes", Assignment::Me))
        .unwrap_err();
    assert!(matches!(err, SessionError::PartnerResponsesUnavailable));
}

#[test]
fn progress_counts_answers_among_applicable_tasks() {
    let mut session = AssessmentSession::new();
    session.set_household(couple_with_kids()).unwrap();
    let applicable = session.applicable_tasks().unwrap().len();

    session.upsert_response(TaskResponse::new("dishes", Assignment::Shared));
    session.upsert_response(TaskResponse::not_applicable("lawn_garden"));
    session.upsert_response(TaskResponse::new("pet_feeding", Assignment::Me));

    let progress = session.progress().unwrap();
    assert_eq!(progress.applicable, applicable);
    // pet_feeding is not applicable without pets.
    assert_eq!(progress.answered, 2);
    assert!(progress.percent_complete() > 0);
}

#[test]
fn results_are_recomputed_after_each_change() {
    let mut session = AssessmentSession::new();
    session.set_household(couple_with_kids()).unwrap();

    session.upsert_response(TaskResponse::new("dishes", Assignment::Me));
    assert_eq!(session.results().unwrap().my_visible_percentage, 100);

    session.upsert_response(TaskResponse::new("dishes", Assignment::Shared).with_share(40));
    assert_eq!(session.results().unwrap().my_visible_percentage, 40);

    assert!(session.remove_response("dishes"));
    assert!(!session.remove_response("dishes"));
    assert_eq!(session.results().unwrap().applicable_task_count, 0);
}

#[test]
fn together_mode_reports_perception_gap() {
    let mut session = AssessmentSession::new();
    session.set_household(couple_with_kids()).unwrap();
    session.upsert_response(TaskResponse::new("school_runs", Assignment::Me));
    session
        .upsert_partner_response(TaskResponse::new("school_runs", Assignment::Me))
        .unwrap();

    let results = session.results().unwrap();
    let perception = results.perception_gap.expect("partner answered");
    assert_eq!(perception.my_claimed_visible_percentage, 100);
    assert_eq!(perception.partner_attributed_visible_percentage, 0);

    let prompts = session.conversation_prompts().unwrap();
    assert!(prompts
        .iter()
        .any(|prompt| prompt.topic == PromptTopic::PerceptionGap));
}

#[test]
fn insights_keep_order_and_reject_blank_text() {
    let mut session = AssessmentSession::new();
    let first = session
        .add_insight(InsightKind::Surprise, "  I plan every birthday  ")
        .unwrap();
    let second = session
        .add_insight(InsightKind::Breakthrough, "We will rotate school runs")
        .unwrap();

    assert!(matches!(
        session.add_insight(InsightKind::Disagreement, "   "),
        Err(SessionError::InvalidInsightText)
    ));
    let ids: Vec<Uuid> = session.insights().iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(session.insights()[0].text, "I plan every birthday");

    let removed = session.remove_insight(first).unwrap();
    assert_eq!(removed.kind, InsightKind::Surprise);
    assert!(matches!(
        session.remove_insight(first),
        Err(SessionError::InsightNotFound(id)) if id == first
    ));
}

#[test]
fn reset_clears_everything() {
    let mut session = AssessmentSession::new();
    session.set_household(couple_with_kids()).unwrap();
    session.upsert_response(TaskResponse::new("dishes", Assignment::Me));
    session.add_insight(InsightKind::Surprise, "noted").unwrap();
    session.set_notes("talk on sunday");

    session.reset();
    assert!(session.household().is_none());
    assert!(session.responses().is_empty());
    assert!(session.insights().is_empty());
    assert!(session.notes().is_empty());
}
