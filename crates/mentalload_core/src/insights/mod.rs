//! Human-readable output derived from engine results.
//!
//! # Responsibility
//! - Turn `CalculatedResults` and `WmliResults` into conversation prompts.
//! - Render the Markdown export with user-authored insights and notes.
//!
//! # Invariants
//! - Generators never change numeric results; they only read them.
//! - User free text is normalized before it is embedded in Markdown.

pub mod prompts;
pub mod report;
