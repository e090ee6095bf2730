//! Markdown report export.
//!
//! # Responsibility
//! - Render a self-contained Markdown summary of one assessment.
//! - Write the rendered report to disk for file export flows.
//!
//! # Invariants
//! - Rendering is pure; only `write_markdown_report` touches the file system.
//! - Embedded user text is single-line and cannot open a Markdown heading.
//! - Partner sections are emitted only when partner data is present.

use crate::insights::prompts::ConversationPrompt;
use crate::model::household::HouseholdSetup;
use crate::model::insight::{InsightEntry, InsightKind};
use crate::scoring::results::CalculatedResults;
use crate::scoring::wmli::{PersonWmli, WmliResults};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static LEADING_MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+|>+|[-*+]\s|\d+\.\s)\s*").expect("valid markup regex"));

/// Error returned when writing an exported report fails.
#[derive(Debug)]
pub enum ReportError {
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write report `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Everything the report renders, borrowed from the session.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub household: &'a HouseholdSetup,
    pub results: &'a CalculatedResults,
    pub wmli: &'a WmliResults,
    pub prompts: &'a [ConversationPrompt],
    pub insights: &'a [InsightEntry],
    pub notes: &'a str,
}

/// Collapses whitespace and strips leading Markdown block markup.
pub fn sanitize_inline_text(value: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(value.trim(), " ");
    LEADING_MARKUP_RE.replace(&collapsed, "").into_owned()
}

fn write_household(out: &mut Formatter<'_>, household: &HouseholdSetup) -> fmt::Result {
    writeln!(out, "## Household\n")?;
    writeln!(out, "- Adults: {}", household.adults)?;
    writeln!(out, "- Children: {}", household.children)?;
    writeln!(out, "- Pets: {}", yes_no(household.has_pets))?;
    writeln!(out, "- Garden: {}", yes_no(household.has_garden))?;
    writeln!(out, "- Mode: {}\n", household.mode.as_str())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn write_load_table(out: &mut Formatter<'_>, results: &CalculatedResults) -> fmt::Result {
    writeln!(out, "## Load split\n")?;
    writeln!(out, "| | Visible time (min/week) | Visible % | Mental load | Mental % |")?;
    writeln!(out, "|---|---:|---:|---:|---:|")?;
    writeln!(
        out,
        "| Me | {:.0} | {}% | {:.0} | {}% |",
        results.my_visible_time,
        results.my_visible_percentage,
        results.my_mental_load,
        results.my_mental_percentage
    )?;
    if let Some(partner) = &results.partner {
        writeln!(
            out,
            "| Partner | {:.0} | {}% | {:.0} | {}% |",
            partner.visible_time,
            partner.visible_percentage,
            partner.mental_load,
            partner.mental_percentage
        )?;
    }
    writeln!(
        out,
        "\nTasks assessed: {}. Combined intensity score: {:.2}.\n",
        results.applicable_task_count, results.scores.combined_score
    )?;

    if results.category_scores.is_empty() {
        return Ok(());
    }
    writeln!(out, "### By category\n")?;
    for entry in &results.category_scores {
        writeln!(
            out,
            "- {}: {} task(s), my mental share {}%",
            entry.category.label(),
            entry.task_count,
            entry.my_mental_percentage()
        )?;
    }
    writeln!(out)
}

fn write_person_wmli(out: &mut Formatter<'_>, who: &str, wmli: &PersonWmli) -> fmt::Result {
    writeln!(
        out,
        "- {who}: {:.1} ({}) - {}",
        wmli.index,
        wmli.interpretation.as_str(),
        wmli.interpretation_context
    )?;
    let mut flags = Vec::new();
    if wmli.high_subjective_strain {
        flags.push("high subjective strain");
    }
    if wmli.fairness_risk {
        flags.push("fairness risk");
    }
    if wmli.equity_priority {
        flags.push("equity priority");
    }
    if flags.is_empty() {
        return Ok(());
    }
    writeln!(out, "  - Flags: {}", flags.join(", "))
}

fn write_wmli(out: &mut Formatter<'_>, wmli: &WmliResults) -> fmt::Result {
    writeln!(out, "## Weighted Mental Load Index\n")?;
    write_person_wmli(out, "Me", &wmli.my_wmli)?;
    if let Some(partner) = &wmli.partner_wmli {
        write_person_wmli(out, "Partner", partner)?;
    }
    if let Some(disparity) = &wmli.disparity {
        writeln!(
            out,
            "- Mental load gap: {:.1} points{}",
            disparity.mental_load_gap,
            if disparity.high_equity_risk {
                " (high equity risk)"
            } else {
                ""
            }
        )?;
    }
    writeln!(out)
}

fn write_prompts(out: &mut Formatter<'_>, prompts: &[ConversationPrompt]) -> fmt::Result {
    if prompts.is_empty() {
        return Ok(());
    }
    writeln!(out, "## Conversation prompts\n")?;
    for (position, prompt) in prompts.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, prompt.text)?;
    }
    writeln!(out)
}

fn write_insights(out: &mut Formatter<'_>, insights: &[InsightEntry]) -> fmt::Result {
    if insights.is_empty() {
        return Ok(());
    }
    writeln!(out, "## Insights\n")?;
    for kind in [
        InsightKind::Breakthrough,
        InsightKind::Disagreement,
        InsightKind::Surprise,
    ] {
        let entries: Vec<&InsightEntry> =
            insights.iter().filter(|entry| entry.kind == kind).collect();
        if entries.is_empty() {
            continue;
        }
        writeln!(out, "### {}\n", kind.heading())?;
        for entry in entries {
            writeln!(out, "- {}", sanitize_inline_text(&entry.text))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_notes(out: &mut Formatter<'_>, notes: &str) -> fmt::Result {
    let notes = notes.trim();
    if notes.is_empty() {
        return Ok(());
    }
    writeln!(out, "## Notes\n")?;
    for line in notes.lines().map(str::trim).filter(|line| !line.is_empty()) {
        writeln!(out, "> {}", sanitize_inline_text(line))?;
    }
    Ok(())
}

impl Display for ReportInput<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Household Load Assessment\n")?;
        write_household(f, self.household)?;
        write_load_table(f, self.results)?;
        write_wmli(f, self.wmli)?;
        write_prompts(f, self.prompts)?;
        write_insights(f, self.insights)?;
        write_notes(f, self.notes)
    }
}

/// Renders the full report.
pub fn render_markdown_report(input: &ReportInput<'_>) -> String {
    input.to_string()
}

/// Renders and writes the report to `path`, replacing any existing file.
///
/// # Errors
/// - `ReportError::Io` when the file cannot be written.
pub fn write_markdown_report(
    path: impl AsRef<Path>,
    input: &ReportInput<'_>,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let rendered = render_markdown_report(input);
    match std::fs::write(path, rendered.as_bytes()) {
        Ok(()) => {
            info!(
                "event=report_export module=insights status=ok bytes={}",
                rendered.len()
            );
            Ok(())
        }
        Err(source) => {
            warn!(
                "event=report_export module=insights status=error kind={:?}",
                source.kind()
            );
            Err(ReportError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render_markdown_report, sanitize_inline_text, ReportInput};
    use crate::catalog::TaskCatalog;
    use crate::model::household::HouseholdSetup;
    use crate::model::response::{Assignment, TaskResponse};
    use crate::scoring::results::calculate_results;
    use crate::scoring::wmli::calculate_wmli;

    #[test]
    fn sections_render_in_order_without_empty_blocks() {
        let catalog = TaskCatalog::standard();
        let household = HouseholdSetup::default();
        let responses = vec![TaskResponse::new("dishes", Assignment::Me).with_rating(4, 2)];
        let results = calculate_results(&responses, None, &household, catalog);
        let wmli = calculate_wmli(&responses, None, &household, catalog);
        let input = ReportInput {
            household: &household,
            results: &results,
            wmli: &wmli,
            prompts: &[],
            insights: &[],
            notes: "  first line\n\n second line ",
        };

        let rendered = render_markdown_report(&input);
        assert_eq!(rendered, input.to_string());
        let position = |heading: &str| rendered.find(heading).expect("section present");
        assert!(position("## Household") < position("## Load split"));
        assert!(position("## Load split") < position("## Weighted Mental Load Index"));
        assert!(position("## Weighted Mental Load Index") < position("## Notes"));
        assert!(!rendered.contains("## Conversation prompts"));
        assert!(!rendered.contains("## Insights"));
        assert!(rendered.ends_with("> first line\n> second line\n"));
    }

    #[test]
    fn sanitize_collapses_lines_and_strips_headings() {
        assert_eq!(sanitize_inline_text("## big\n  news"), "big news");
        assert_eq!(sanitize_inline_text("> quoted"), "quoted");
        assert_eq!(sanitize_inline_text("- item"), "item");
        assert_eq!(sanitize_inline_text("plain text"), "plain text");
    }
}
