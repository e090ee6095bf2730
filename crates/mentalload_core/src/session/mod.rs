//! Session-scoped state container.
//!
//! # Responsibility
//! - Own household setup, responses, insights and notes for one assessment.
//! - Hand read-only snapshots to the scoring engine on every read.
//!
//! # Invariants
//! - State is in-memory only and lost when the session is dropped.
//! - Derived results are never cached.

pub mod assessment_session;
