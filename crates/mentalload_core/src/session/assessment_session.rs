//! Assessment session.
//!
//! # Responsibility
//! - Validate inputs at the boundary and keep one response per task.
//! - Expose use-case level reads (results, WMLI, prompts, report).
//!
//! # Invariants
//! - Upserting a response replaces any earlier answer for the same task id.
//! - Partner responses are accepted only for two-adult households.
//! - Shrinking the household to one adult drops stored partner responses.

use crate::catalog::TaskCatalog;
use crate::insights::prompts::{conversation_prompts, ConversationPrompt};
use crate::insights::report::{
    render_markdown_report, write_markdown_report, ReportError, ReportInput,
};
use crate::model::household::{HouseholdSetup, HouseholdValidationError};
use crate::model::insight::{InsightEntry, InsightId, InsightKind};
use crate::model::response::TaskResponse;
use crate::model::task::Task;
use crate::scoring::results::{calculate_results, CalculatedResults};
use crate::scoring::wmli::{calculate_wmli, WmliResults};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type SessionResult<T> = Result<T, SessionError>;

/// Session use-case errors.
#[derive(Debug)]
pub enum SessionError {
    /// Household record failed validation.
    InvalidHousehold(HouseholdValidationError),
    /// An operation needs a household but none was set.
    HouseholdNotConfigured,
    /// Partner answers were given for a single-adult household.
    PartnerResponsesUnavailable,
    /// Insight text is empty after trimming.
    InvalidInsightText,
    /// No insight with this id exists.
    InsightNotFound(InsightId),
    /// Report export failed.
    Report(ReportError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHousehold(err) => write!(f, "invalid household: {err}"),
            Self::HouseholdNotConfigured => write!(f, "household setup has not been completed"),
            Self::PartnerResponsesUnavailable => {
                write!(f, "partner responses require a two-adult household")
            }
            Self::InvalidInsightText => write!(f, "insight text cannot be empty"),
            Self::InsightNotFound(id) => write!(f, "insight not found: {id}"),
            Self::Report(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidHousehold(err) => Some(err),
            Self::Report(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HouseholdValidationError> for SessionError {
    fn from(value: HouseholdValidationError) -> Self {
        Self::InvalidHousehold(value)
    }
}

impl From<ReportError> for SessionError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

/// Answered versus applicable task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub answered: usize,
    pub applicable: usize,
}

impl SessionProgress {
    /// Completion as a rounded percentage, `0` when nothing applies.
    pub fn percent_complete(&self) -> u32 {
        crate::scoring::rounded_percentage(self.answered as f64, self.applicable as f64)
    }
}

/// One household assessment held in memory.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    catalog: &'static TaskCatalog,
    household: Option<HouseholdSetup>,
    responses: Vec<TaskResponse>,
    partner_responses: Vec<TaskResponse>,
    insights: Vec<InsightEntry>,
    notes: String,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

fn upsert_into(list: &mut Vec<TaskResponse>, response: TaskResponse) {
    match list.iter_mut().find(|existing| existing.task_id == response.task_id) {
        Some(existing) => *existing = response,
        None => list.push(response),
    }
}

impl AssessmentSession {
    /// Creates an empty session over the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(TaskCatalog::standard())
    }

    /// Creates an empty session over a caller-provided catalog.
    pub fn with_catalog(catalog: &'static TaskCatalog) -> Self {
        Self {
            catalog,
            household: None,
            responses: Vec::new(),
            partner_responses: Vec::new(),
            insights: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn catalog(&self) -> &'static TaskCatalog {
        self.catalog
    }

    /// Replaces the household setup wholesale.
    ///
    /// # Errors
    /// - `InvalidHousehold` when validation fails; state is left unchanged.
    pub fn set_household(&mut self, household: HouseholdSetup) -> SessionResult<()> {
        household.validate()?;
        if !household.has_partner() && !self.partner_responses.is_empty() {
            debug!(
                "event=partner_responses_dropped module=session count={}",
                self.partner_responses.len()
            );
            self.partner_responses.clear();
        }
        info!(
            "event=household_set module=session status=ok adults={} children={} mode={}",
            household.adults,
            household.children,
            household.mode.as_str()
        );
        self.household = Some(household);
        Ok(())
    }

    pub fn household(&self) -> Option<&HouseholdSetup> {
        self.household.as_ref()
    }

    fn require_household(&self) -> SessionResult<&HouseholdSetup> {
        self.household
            .as_ref()
            .ok_or(SessionError::HouseholdNotConfigured)
    }

    /// Stores my answer for a task, replacing an earlier one.
    ///
    /// Unknown task ids are stored as given; scoring skips them.
    pub fn upsert_response(&mut self, response: TaskResponse) {
        debug!(
            "event=response_upsert module=session side=me task_id={} known={}",
            response.task_id,
            self.catalog.contains(&response.task_id)
        );
        upsert_into(&mut self.responses, response);
    }

    /// Removes my answer for a task. Returns whether one existed.
    pub fn remove_response(&mut self, task_id: &str) -> bool {
        let before = self.responses.len();
        self.responses.retain(|response| response.task_id != task_id);
        before != self.responses.len()
    }

    pub fn responses(&self) -> &[TaskResponse] {
        &self.responses
    }

    /// Stores the partner's own answer for a task.
    ///
    /// # Errors
    /// - `HouseholdNotConfigured` before household setup.
    /// - `PartnerResponsesUnavailable` for single-adult households.
    pub fn upsert_partner_response(&mut self, response: TaskResponse) -> SessionResult<()> {
        if !self.require_household()?.has_partner() {
            return Err(SessionError::PartnerResponsesUnavailable);
        }
        debug!(
            "event=response_upsert module=session side=partner task_id={}",
            response.task_id
        );
        upsert_into(&mut self.partner_responses, response);
        Ok(())
    }

    pub fn partner_responses(&self) -> &[TaskResponse] {
        &self.partner_responses
    }

    fn partner_snapshot(&self) -> Option<&[TaskResponse]> {
        (!self.partner_responses.is_empty()).then_some(self.partner_responses.as_slice())
    }

    /// Catalog tasks relevant to the configured household.
    pub fn applicable_tasks(&self) -> SessionResult<Vec<&'static Task>> {
        let household = self.require_household()?;
        Ok(self.catalog.applicable_for(household))
    }

    /// Counts my answered tasks among the applicable ones.
    ///
    /// Not-applicable answers count as answered.
    pub fn progress(&self) -> SessionResult<SessionProgress> {
        let applicable = self.applicable_tasks()?;
        let answered = applicable
            .iter()
            .filter(|task| {
                self.responses
                    .iter()
                    .any(|response| response.task_id == task.id())
            })
            .count();
        Ok(SessionProgress {
            answered,
            applicable: applicable.len(),
        })
    }

    /// Records a user insight and returns its id.
    ///
    /// # Errors
    /// - `InvalidInsightText` when `text` is blank.
    pub fn add_insight(
        &mut self,
        kind: InsightKind,
        text: impl Into<String>,
    ) -> SessionResult<InsightId> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::InvalidInsightText);
        }
        let entry = InsightEntry::new(kind, trimmed);
        let id = entry.id;
        info!(
            "event=insight_added module=session kind={} chars={}",
            kind.as_str(),
            trimmed.chars().count()
        );
        self.insights.push(entry);
        Ok(id)
    }

    /// Removes an insight by id.
    ///
    /// # Errors
    /// - `InsightNotFound` when no entry has this id.
    pub fn remove_insight(&mut self, id: InsightId) -> SessionResult<InsightEntry> {
        let position = self
            .insights
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(SessionError::InsightNotFound(id))?;
        Ok(self.insights.remove(position))
    }

    /// Insights in creation order.
    pub fn insights(&self) -> &[InsightEntry] {
        &self.insights
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Recomputes household results from the current snapshot.
    pub fn results(&self) -> SessionResult<CalculatedResults> {
        let household = self.require_household()?;
        Ok(calculate_results(
            &self.responses,
            self.partner_snapshot(),
            household,
            self.catalog,
        ))
    }

    /// Recomputes the WMLI from the current snapshot.
    pub fn wmli(&self) -> SessionResult<WmliResults> {
        let household = self.require_household()?;
        Ok(calculate_wmli(
            &self.responses,
            self.partner_snapshot(),
            household,
            self.catalog,
        ))
    }

    pub fn conversation_prompts(&self) -> SessionResult<Vec<ConversationPrompt>> {
        let results = self.results()?;
        let wmli = self.wmli()?;
        Ok(conversation_prompts(&results, &wmli, self.catalog))
    }

    fn with_report_input<T>(
        &self,
        render: impl FnOnce(&ReportInput<'_>) -> T,
    ) -> SessionResult<T> {
        let household = self.require_household()?;
        let results = self.results()?;
        let wmli = self.wmli()?;
        let prompts = conversation_prompts(&results, &wmli, self.catalog);
        let input = ReportInput {
            household,
            results: &results,
            wmli: &wmli,
            prompts: &prompts,
            insights: &self.insights,
            notes: &self.notes,
        };
        Ok(render(&input))
    }

    /// Renders the Markdown report for the current state.
    pub fn export_markdown(&self) -> SessionResult<String> {
        self.with_report_input(render_markdown_report)
    }

    /// Writes the Markdown report to `path`.
    pub fn export_markdown_to(&self, path: impl AsRef<Path>) -> SessionResult<()> {
        self.with_report_input(|input| write_markdown_report(path, input))??;
        Ok(())
    }

    /// Clears everything, including the household.
    pub fn reset(&mut self) {
        info!("event=session_reset module=session status=ok");
        self.household = None;
        self.responses.clear();
        self.partner_responses.clear();
        self.insights.clear();
        self.notes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{AssessmentSession, SessionError};
    use crate::model::household::HouseholdSetup;
    use crate::model::response::{Assignment, TaskResponse};

    #[test]
    fn upsert_replaces_existing_answer() {
        let mut session = AssessmentSession::new();
        session.upsert_response(TaskResponse::new("dishes", Assignment::Me));
        session.upsert_response(TaskResponse::new("dishes", Assignment::Partner));
        assert_eq!(session.responses().len(), 1);
        assert_eq!(session.responses()[0].assignment, Assignment::Partner);
    }

    #[test]
    fn reads_require_household() {
        let session = AssessmentSession::new();
        assert!(matches!(
            session.results(),
            Err(SessionError::HouseholdNotConfigured)
        ));
    }

    #[test]
    fn switching_to_single_adult_drops_partner_answers() {
        let mut session = AssessmentSession::new();
        session
            .set_household(HouseholdSetup::default())
            .expect("valid household");
        session
            .upsert_partner_response(TaskResponse::new("dishes", Assignment::Me))
            .expect("two adults");
        session
            .set_household(HouseholdSetup::single_adult())
            .expect("valid household");
        assert!(session.partner_responses().is_empty());
    }
}
