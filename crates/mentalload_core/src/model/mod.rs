//! Domain model for household load self-assessment.
//!
//! # Responsibility
//! - Define the canonical records exchanged between UI, session and engine.
//! - Keep task definitions as a tagged sum type instead of shape checks.
//!
//! # Invariants
//! - Task definitions are immutable reference data.
//! - At most one `TaskResponse` exists per task id per respondent.

pub mod household;
pub mod insight;
pub mod response;
pub mod task;
