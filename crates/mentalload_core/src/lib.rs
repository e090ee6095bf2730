//! Core domain logic for the household mental-load assessment.
//! This crate is the single source of truth for scoring invariants.

pub mod catalog;
pub mod insights;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod session;

pub use catalog::TaskCatalog;
pub use insights::prompts::{conversation_prompts, ConversationPrompt, PromptPriority, PromptTopic};
pub use insights::report::{
    render_markdown_report, sanitize_inline_text, write_markdown_report, ReportError, ReportInput,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::household::{AssessmentMode, HouseholdSetup, HouseholdValidationError};
pub use model::insight::{InsightEntry, InsightId, InsightKind};
pub use model::response::{Assignment, LikertRating, TaskResponse, TimeAdjustment};
pub use model::task::{
    CognitiveTask, MeasurementType, PhysicalTask, Task, TaskCategory, TaskRequirement,
};
pub use scoring::person_load::{
    calculate_person_load, CategoryScore, LoadPercentages, LoadTotals, PersonLoad, ScoreSummary,
};
pub use scoring::response::{normalize_response, NormalizedResponse, ShareSplit, Side};
pub use scoring::results::{
    calculate_results, CalculatedResults, Imbalance, PartnerLoad, PerceptionGap,
};
pub use scoring::task_score::{likert_score, score_task, time_score, unfairness, TaskContribution};
pub use scoring::time_adjustment::effective_minutes;
pub use scoring::wmli::{calculate_wmli, Disparity, PersonWmli, WmliInterpretation, WmliResults};
pub use session::assessment_session::{
    AssessmentSession, SessionError, SessionProgress, SessionResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
