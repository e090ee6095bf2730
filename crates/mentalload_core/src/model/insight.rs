//! User-authored insight notes.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the session.
//! - Entries are never auto-expired.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type InsightId = Uuid;

/// Tag chosen by the user when recording an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Breakthrough,
    Disagreement,
    Surprise,
}

impl InsightKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakthrough => "breakthrough",
            Self::Disagreement => "disagreement",
            Self::Surprise => "surprise",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breakthrough" => Some(Self::Breakthrough),
            "disagreement" => Some(Self::Disagreement),
            "surprise" => Some(Self::Surprise),
            _ => None,
        }
    }

    /// Section heading used by the Markdown report.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Breakthrough => "Breakthroughs",
            Self::Disagreement => "Disagreements",
            Self::Surprise => "Surprises",
        }
    }
}

/// Free-text note captured during the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightEntry {
    pub id: InsightId,
    pub kind: InsightKind,
    pub text: String,
    /// Unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl InsightEntry {
    /// Creates an entry with a generated id and the current time.
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            created_at_ms: now_epoch_ms(),
        }
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
