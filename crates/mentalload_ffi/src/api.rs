//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one process-wide assessment session to Dart via FRB.
//! - Convert core errors into simple envelopes for UI display.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Derived results are recomputed from session state on every call.
//! - User free text is never logged from this layer.

use log::warn;
use mentalload_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AssessmentMode, AssessmentSession, Assignment, HouseholdSetup, InsightKind, LikertRating,
    Task, TaskCatalog, TaskResponse, TimeAdjustment,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<AssessmentSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Catalog entry as shown by questionnaire screens.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTaskItem {
    pub task_id: String,
    pub title: String,
    /// Category id, e.g. `cooking`.
    pub category: String,
    /// `physical|cognitive`.
    pub kind: String,
    pub baseline_minutes_per_week: u32,
    pub mental_load_weight: f64,
}

/// Flat questionnaire answer coming from a form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseInput {
    pub task_id: String,
    /// `me|partner|shared`.
    pub assignment: String,
    pub my_share_percentage: Option<u8>,
    /// `much_less|less|about_right|more|much_more`; unknown tags resolve to baseline.
    pub time_adjustment: Option<String>,
    pub estimated_minutes: Option<u32>,
    pub not_applicable: bool,
    pub burden: Option<u8>,
    pub fairness: Option<u8>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Optional created entity ID.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Text payload envelope (JSON or Markdown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub ok: bool,
    pub text: String,
    pub message: String,
}

impl TextResponse {
    fn from_result(operation: &str, result: Result<String, String>) -> Self {
        match result {
            Ok(text) => Self {
                ok: true,
                text,
                message: String::new(),
            },
            Err(err) => Self {
                ok: false,
                text: String::new(),
                message: format!("{operation} failed: {err}"),
            },
        }
    }
}

/// Conversation prompt item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptItem {
    /// `high|medium|low`.
    pub priority: String,
    pub text: String,
}

/// Lists every catalog task in catalog order.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_tasks() -> Vec<CatalogTaskItem> {
    TaskCatalog::standard()
        .tasks()
        .iter()
        .map(to_catalog_item)
        .collect()
}

/// Clears the session, including household setup.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() {
    lock_session().reset();
}

/// Replaces the household setup.
///
/// # FFI contract
/// - `mode`: `solo|together`; anything else is rejected.
/// - Never panics; validation failures return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
#[allow(clippy::too_many_arguments)]
pub fn session_set_household(
    adults: u8,
    children: u32,
    has_pets: bool,
    has_garden: bool,
    i_am_employed: bool,
    partner_employed: bool,
    mode: String,
) -> ActionResponse {
    let mode = match mode.trim().to_ascii_lowercase().as_str() {
        "solo" => AssessmentMode::Solo,
        "together" => AssessmentMode::Together,
        other => {
            return ActionResponse::failure(format!(
                "session_set_household failed: unsupported mode `{other}`"
            ))
        }
    };
    let household = HouseholdSetup {
        adults,
        children,
        has_pets,
        has_garden,
        i_am_employed,
        partner_employed,
        mode,
    };
    match lock_session().set_household(household) {
        Ok(()) => ActionResponse::success("Household saved.", None),
        Err(err) => ActionResponse::failure(format!("session_set_household failed: {err}")),
    }
}

/// Stores the respondent's answer for one task.
#[flutter_rust_bridge::frb(sync)]
pub fn session_upsert_response(input: ResponseInput) -> ActionResponse {
    match to_task_response(input) {
        Ok(response) => {
            let task_id = response.task_id.clone();
            lock_session().upsert_response(response);
            ActionResponse::success("Answer saved.", Some(task_id))
        }
        Err(err) => ActionResponse::failure(format!("session_upsert_response failed: {err}")),
    }
}

/// Stores the partner's own answer for one task (together mode).
#[flutter_rust_bridge::frb(sync)]
pub fn session_upsert_partner_response(input: ResponseInput) -> ActionResponse {
    let response = match to_task_response(input) {
        Ok(response) => response,
        Err(err) => {
            return ActionResponse::failure(format!(
                "session_upsert_partner_response failed: {err}"
            ))
        }
    };
    let task_id = response.task_id.clone();
    match lock_session().upsert_partner_response(response) {
        Ok(()) => ActionResponse::success("Partner answer saved.", Some(task_id)),
        Err(err) => {
            ActionResponse::failure(format!("session_upsert_partner_response failed: {err}"))
        }
    }
}

/// Removes the respondent's answer for one task.
#[flutter_rust_bridge::frb(sync)]
pub fn session_remove_response(task_id: String) -> bool {
    lock_session().remove_response(task_id.trim())
}

/// Current `CalculatedResults` as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn session_results_json() -> TextResponse {
    let result = lock_session()
        .results()
        .map_err(|err| err.to_string())
        .and_then(|results| serde_json::to_string(&results).map_err(|err| err.to_string()));
    TextResponse::from_result("session_results_json", result)
}

/// Current `WmliResults` as JSON. Partner fields are absent for one adult.
#[flutter_rust_bridge::frb(sync)]
pub fn session_wmli_json() -> TextResponse {
    let result = lock_session()
        .wmli()
        .map_err(|err| err.to_string())
        .and_then(|wmli| serde_json::to_string(&wmli).map_err(|err| err.to_string()));
    TextResponse::from_result("session_wmli_json", result)
}

/// Conversation prompts, highest priority first. Empty before setup.
#[flutter_rust_bridge::frb(sync)]
pub fn session_prompts() -> Vec<PromptItem> {
    match lock_session().conversation_prompts() {
        Ok(prompts) => prompts
            .into_iter()
            .map(|prompt| PromptItem {
                priority: prompt.priority.as_str().to_string(),
                text: prompt.text,
            })
            .collect(),
        Err(err) => {
            warn!("event=prompts_unavailable module=ffi status=error reason={err}");
            Vec::new()
        }
    }
}

/// Records an insight.
///
/// # FFI contract
/// - `kind`: `breakthrough|disagreement|surprise`.
/// - Returns the new insight ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn session_add_insight(kind: String, text: String) -> ActionResponse {
    let Some(kind) = InsightKind::parse(&kind) else {
        return ActionResponse::failure(format!(
            "session_add_insight failed: unsupported kind `{}`",
            kind.trim()
        ));
    };
    match lock_session().add_insight(kind, text) {
        Ok(id) => ActionResponse::success("Insight saved.", Some(id.to_string())),
        Err(err) => ActionResponse::failure(format!("session_add_insight failed: {err}")),
    }
}

/// Removes an insight by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn session_remove_insight(insight_id: String) -> ActionResponse {
    let id = match Uuid::parse_str(insight_id.trim()) {
        Ok(id) => id,
        Err(err) => {
            return ActionResponse::failure(format!("session_remove_insight failed: {err}"))
        }
    };
    match lock_session().remove_insight(id) {
        Ok(entry) => ActionResponse::success("Insight removed.", Some(entry.id.to_string())),
        Err(err) => ActionResponse::failure(format!("session_remove_insight failed: {err}")),
    }
}

/// Replaces the free-text notes.
#[flutter_rust_bridge::frb(sync)]
pub fn session_set_notes(notes: String) {
    lock_session().set_notes(notes);
}

/// Renders the Markdown report.
#[flutter_rust_bridge::frb(sync)]
pub fn session_export_markdown() -> TextResponse {
    let result = lock_session()
        .export_markdown()
        .map_err(|err| err.to_string());
    TextResponse::from_result("session_export_markdown", result)
}

fn lock_session() -> MutexGuard<'static, AssessmentSession> {
    SESSION
        .get_or_init(|| Mutex::new(AssessmentSession::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_task_response(input: ResponseInput) -> Result<TaskResponse, String> {
    let task_id = input.task_id.trim().to_string();
    if task_id.is_empty() {
        return Err("task_id cannot be empty".to_string());
    }
    let assignment = Assignment::parse(&input.assignment)
        .ok_or_else(|| format!("unsupported assignment `{}`", input.assignment.trim()))?;
    let likert_rating = match (input.burden, input.fairness) {
        (None, None) => None,
        (burden, fairness) => Some(LikertRating::new(
            burden.unwrap_or(3),
            fairness.unwrap_or(3),
        )),
    };

    Ok(TaskResponse {
        task_id,
        assignment,
        my_share_percentage: input.my_share_percentage,
        time_adjustment: input
            .time_adjustment
            .as_deref()
            .map(TimeAdjustment::parse),
        estimated_minutes: input.estimated_minutes,
        not_applicable: input.not_applicable,
        likert_rating,
    })
}

fn to_catalog_item(task: &Task) -> CatalogTaskItem {
    CatalogTaskItem {
        task_id: task.id().to_string(),
        title: task.title().to_string(),
        category: task.category().as_str().to_string(),
        kind: if task.is_physical() {
            "physical".to_string()
        } else {
            "cognitive".to_string()
        },
        baseline_minutes_per_week: task.baseline_minutes_per_week(),
        mental_load_weight: task.mental_load_weight(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_tasks, core_version, init_logging, ping, session_add_insight,
        session_export_markdown, session_prompts, session_remove_insight, session_reset,
        session_results_json, session_set_household, session_upsert_partner_response,
        session_upsert_response, session_wmli_json, to_task_response, ResponseInput,
    };
    use mentalload_core::{Assignment, LikertRating, TimeAdjustment};

    fn answer(task_id: &str, assignment: &str) -> ResponseInput {
        ResponseInput {
            task_id: task_id.to_string(),
            assignment: assignment.to_string(),
            ..ResponseInput::default()
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn catalog_tasks_lists_both_kinds() {
        let items = catalog_tasks();
        assert!(items.iter().any(|item| item.kind == "physical"));
        assert!(items.iter().any(|item| item.kind == "cognitive"));
    }

    #[test]
    fn response_input_maps_tags_and_partial_rating() {
        let mut input = answer(" dishes ", "Shared");
        input.time_adjustment = Some("much_much_more".to_string());
        input.burden = Some(4);
        let response = to_task_response(input).expect("valid input");
        assert_eq!(response.task_id, "dishes");
        assert_eq!(response.assignment, Assignment::Shared);
        assert_eq!(response.time_adjustment, Some(TimeAdjustment::Unrecognized));
        assert_eq!(response.likert_rating, Some(LikertRating::new(4, 3)));

        assert!(to_task_response(answer("dishes", "everyone")).is_err());
        assert!(to_task_response(answer("  ", "me")).is_err());
    }

    // Single test for the process-wide session to avoid cross-test races.
    #[test]
    fn session_flow_over_ffi() {
        session_reset();
        assert!(!session_results_json().ok);
        assert!(session_prompts().is_empty());

        let solo = session_set_household(1, 0, false, false, true, false, "solo".to_string());
        assert!(solo.ok, "{}", solo.message);
        let mut calendar = answer("family_calendar", "me");
        calendar.burden = Some(5);
        calendar.fairness = Some(1);
        assert!(session_upsert_response(calendar).ok);

        let wmli = session_wmli_json();
        assert!(wmli.ok, "{}", wmli.message);
        assert!(!wmli.text.contains("partner_wmli"));
        assert!(!wmli.text.contains("disparity"));
        assert!(!session_upsert_partner_response(answer("dishes", "me")).ok);

        let together =
            session_set_household(2, 1, false, false, true, true, "together".to_string());
        assert!(together.ok, "{}", together.message);
        assert!(session_upsert_partner_response(answer("dishes", "me")).ok);
        let results = session_results_json();
        assert!(results.text.contains("perception_gap"));
        assert_eq!(session_prompts()[0].priority, "high");

        let added = session_add_insight("surprise".to_string(), "I track all of it".to_string());
        let insight_id = added.id.expect("insight id");
        assert!(session_export_markdown().text.contains("I track all of it"));
        assert!(session_remove_insight(insight_id.clone()).ok);
        assert!(!session_remove_insight(insight_id).ok);
        assert!(!session_add_insight("rant".to_string(), "x".to_string()).ok);

        let bad_mode = session_set_household(2, 0, false, false, false, false, "duo".to_string());
        assert!(!bad_mode.ok);
        session_reset();
    }
}
