//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `mentalload_core` linkage without a UI shell.
//! - Run a fixed sample assessment and print deterministic output.

use clap::Parser;
use mentalload_core::{
    AssessmentMode, AssessmentSession, Assignment, HouseholdSetup, InsightKind, SessionError,
    TaskResponse, TimeAdjustment,
};
use std::process::ExitCode;

/// Runs a built-in sample household through the mental-load engine.
#[derive(Debug, Parser)]
#[command(name = "mentalload_cli", version)]
struct Cli {
    /// Print results and WMLI as pretty JSON instead of the Markdown report.
    #[arg(long)]
    json: bool,
}

fn sample_session() -> Result<AssessmentSession, SessionError> {
    let mut session = AssessmentSession::new();
    session.set_household(HouseholdSetup {
        adults: 2,
        children: 1,
        has_pets: false,
        has_garden: false,
        i_am_employed: true,
        partner_employed: true,
        mode: AssessmentMode::Solo,
    })?;

    let answers = [
        TaskResponse::new("cook_meals", Assignment::Shared).with_share(40),
        TaskResponse::new("dishes", Assignment::Partner),
        TaskResponse::new("laundry_wash", Assignment::Me).with_adjustment(TimeAdjustment::More),
        TaskResponse::new("school_runs", Assignment::Shared),
        TaskResponse::new("meal_planning", Assignment::Me).with_rating(4, 2),
        TaskResponse::new("family_calendar", Assignment::Me).with_rating(5, 1),
        TaskResponse::new("school_admin", Assignment::Me).with_rating(3, 3),
        TaskResponse::new("budget_tracking", Assignment::Partner).with_rating(2, 4),
    ];
    for answer in answers {
        session.upsert_response(answer);
    }
    session.add_insight(
        InsightKind::Surprise,
        "Planning takes more time than the cooking itself.",
    )?;
    Ok(session)
}

fn run(json: bool) -> Result<(), String> {
    let session = sample_session().map_err(|err| err.to_string())?;
    if json {
        let payload = serde_json::json!({
            "results": session.results().map_err(|err| err.to_string())?,
            "wmli": session.wmli().map_err(|err| err.to_string())?,
        });
        let rendered = serde_json::to_string_pretty(&payload).map_err(|err| err.to_string())?;
        println!("{rendered}");
    } else {
        print!(
            "{}",
            session.export_markdown().map_err(|err| err.to_string())?
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    if !json {
        println!("mentalload_core ping={}", mentalload_core::ping());
        println!("mentalload_core version={}", mentalload_core::core_version());
    }
    match run(json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mentalload_cli: {err}");
            ExitCode::FAILURE
        }
    }
}
